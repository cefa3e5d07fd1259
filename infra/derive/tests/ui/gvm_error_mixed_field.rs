use gvm_derive::gvm_error;

#[gvm_error]
pub enum DemoError {
    #[error("Server error {status}")]
    Server { status: std::borrow::Cow<'static, str> },

    #[error("Response error {status}")]
    Response { status: u16 },
}

fn main() {}
