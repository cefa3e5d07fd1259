//! # GVM Errors
//!
//! Error values raised by the GVM client library when a call cannot proceed,
//! most often because an argument is invalid or missing.
//!
//! * Every error is a [`GvmError`]; its [`ErrorKind`] places it in a small
//!   hierarchy so that handlers can match coarsely ([`ErrorKind::Gvm`]) or
//!   precisely ([`ErrorKind::RequiredArgument`]).
//! * The display text follows fixed templates per kind (see [`render`]). An
//!   explicit message always wins over the generated text.
//! * [`validate`] offers detection-site helpers that return these errors.
//!
//! ## Example
//!
//! ```rust
//! use gvm_errors::{ErrorKind, GvmError};
//!
//! let err = GvmError::required_argument().argument("target_id").function("modify_target").build();
//!
//! assert_eq!(err.to_string(), "modify_target requires a target_id argument");
//! assert_eq!(err.argument(), Some("target_id"));
//! assert!(err.is_a(ErrorKind::Gvm));
//! ```
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` for [`GvmError`] and [`ErrorKind`].

mod builder;
mod error;
mod kind;
pub mod render;
pub mod validate;

pub use builder::{ArgumentErrorBuilder, ArgumentTypeErrorBuilder, Invalid, Required};
pub use error::{GvmError, Result};
pub use kind::ErrorKind;

pub mod prelude {
    pub use crate::error::{GvmError, Result};
    pub use crate::kind::ErrorKind;
    pub use crate::validate::{expect_type, parse_argument, required, required_text};
}
