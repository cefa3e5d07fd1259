use gvm_derive::gvm_error;

#[gvm_error]
pub enum DemoError {
    #[error("Invalid argument {0}")]
    Invalid(String),
}

fn main() {}
