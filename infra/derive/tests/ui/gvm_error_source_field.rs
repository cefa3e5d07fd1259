use gvm_derive::gvm_error;

#[gvm_error]
pub enum DemoError {
    #[error("I/O failure: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
