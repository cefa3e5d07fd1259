//! # Argument validation
//!
//! Helpers for the detection site: each one either hands back the checked
//! value or the matching [`GvmError`], and logs the rejection at `debug` level.

use crate::error::{GvmError, Result};
use std::any::{Any, type_name};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::{debug, trace};

/// Unwraps a mandatory argument.
///
/// # Errors
/// Returns [`GvmError::RequiredArgument`] naming `argument` and `function`
/// when `value` is `None`.
///
/// ```rust
/// use gvm_errors::validate::required;
///
/// let err = required::<u32>(None, "port", "create_port_list").unwrap_err();
/// assert_eq!(err.to_string(), "create_port_list requires a port argument");
/// ```
pub fn required<T>(
    value: Option<T>,
    argument: impl Into<Cow<'static, str>>,
    function: impl Into<Cow<'static, str>>,
) -> Result<T> {
    value.ok_or_else(|| {
        reject(GvmError::required_argument().argument(argument).function(function).build())
    })
}

/// Unwraps a mandatory text argument, treating an empty string as missing.
///
/// # Errors
/// Returns [`GvmError::RequiredArgument`] when `value` is `None` or empty.
pub fn required_text<'a>(
    value: Option<&'a str>,
    argument: impl Into<Cow<'static, str>>,
    function: impl Into<Cow<'static, str>>,
) -> Result<&'a str> {
    required(value.filter(|v| !v.is_empty()), argument, function)
}

/// Parses an argument from its textual form.
///
/// # Errors
/// Returns [`GvmError::InvalidArgument`] naming `argument` and `function`
/// when `value` does not parse as `T`.
///
/// ```rust
/// use gvm_errors::validate::parse_argument;
///
/// let port: u16 = parse_argument("9390", "port", "connect").unwrap();
/// assert_eq!(port, 9390);
///
/// let err = parse_argument::<u16>("ninety", "port", "connect").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid argument port for connect");
/// ```
pub fn parse_argument<T: FromStr>(
    value: &str,
    argument: impl Into<Cow<'static, str>>,
    function: impl Into<Cow<'static, str>>,
) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        trace!(value, target_type = type_name::<T>(), "Argument value failed to parse");
        reject(GvmError::invalid_argument().argument(argument).function(function).build())
    })
}

/// Checks that a dynamically typed argument is a `T`.
///
/// # Errors
/// Returns [`GvmError::InvalidArgumentType`] with `arg_type` set to the name
/// of `T` when the downcast fails.
pub fn expect_type<'a, T: Any>(
    value: &'a dyn Any,
    argument: impl Into<Cow<'static, str>>,
    function: impl Into<Cow<'static, str>>,
) -> Result<&'a T> {
    value.downcast_ref::<T>().ok_or_else(|| {
        reject(
            GvmError::invalid_argument_type(argument, type_name::<T>()).function(function).build(),
        )
    })
}

fn reject(err: GvmError) -> GvmError {
    debug!(
        kind = %err.kind(),
        argument = ?err.argument(),
        function = ?err.function(),
        "{err}"
    );
    err
}
