use gvm_derive::gvm_error;
use std::borrow::Cow;

#[gvm_error]
pub enum DemoError {
    #[error("Unknown scanner {name}")]
    UnknownScanner { name: Cow<'static, str>, function: Option<Cow<'static, str>> },

    #[error("Timed out after {seconds}s")]
    Timeout { seconds: u64, function: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::Timeout { seconds: 3, function: None };
    assert_eq!(err.name(), None);
    assert_eq!(err.function(), None);
    assert_eq!(err.variant_name(), "Timeout");

    let result: Result<()> = Err(err.clone());
    assert_eq!(result, Err(err));
}
