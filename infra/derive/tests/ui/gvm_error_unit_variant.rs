use gvm_derive::gvm_error;

#[gvm_error]
pub enum DemoError {
    #[error("Missing argument")]
    Missing,
}

fn main() {}
