#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the GVM error crates.
//! The only macro here, [`macro@gvm_error`], turns a plain enum into an error type that
//! follows the workspace conventions (derives, `Result` alias, field accessors).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! gvm-derive = { path = "../../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The docstring example is `ignore`d to avoid compiling in this crate; the
//! `tests/ui` cases show the same usage end to end.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining value-type error enums.
///
/// The resulting error carries only text, compares by value, and never wraps
/// another error.
///
/// # Features
///
/// * **Automatic Derives**: Injects `Debug`, `Clone`, `PartialEq`, `Eq` and
///   `thiserror::Error` unless the enum already derives them.
/// * **Type Aliasing**: Creates a `Result<T>` type alias next to the enum.
/// * **Field Accessors**: Every field typed `Cow<'static, str>` or
///   `Option<Cow<'static, str>>` gets an inherent accessor of the same name
///   returning `Option<&str>`. Variants without the field return `None`.
/// * **Variant Names**: `variant_name()` returns the variant identifier, for log fields.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with at least one variant.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. No field may be a `source` (by name, `#[source]` or `#[from]`).
/// 4. A field name is either text in every variant that declares it, or in none.
///
/// # Example
///
/// ```rust,ignore
/// use gvm_derive::gvm_error;
/// use std::borrow::Cow;
///
/// #[gvm_error]
/// pub enum ScanError {
///     #[error("Unknown scanner {name}")]
///     UnknownScanner { name: Cow<'static, str>, function: Option<Cow<'static, str>> },
///
///     #[error("Scan timed out after {seconds}s")]
///     Timeout { seconds: u64, function: Option<Cow<'static, str>> },
/// }
///
/// let err = ScanError::Timeout { seconds: 30, function: Some("start_task".into()) };
/// assert_eq!(err.function(), Some("start_task"));
/// assert_eq!(err.name(), None);
/// assert_eq!(err.variant_name(), "Timeout");
/// ```
#[proc_macro_attribute]
pub fn gvm_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
