//! # Display text
//!
//! Pure template functions, one per error kind. Every function maps its inputs
//! to the same text on every call.
//!
//! A text input counts as *set* only when it is `Some` and non-empty; an empty
//! string renders exactly like `None`. An explicit message, when set, is the
//! whole display text for the argument kinds.

use std::borrow::Cow;

/// Text for [`GvmError::InvalidArgument`](crate::GvmError::InvalidArgument).
///
/// ```rust
/// use gvm_errors::render::invalid_argument;
///
/// assert_eq!(invalid_argument(None, Some("foo"), Some("bar")), "Invalid argument foo for bar");
/// assert_eq!(invalid_argument(Some("foo bar"), Some("foo"), None), "foo bar");
/// ```
#[must_use]
pub fn invalid_argument<'a>(
    message: Option<&'a str>,
    argument: Option<&str>,
    function: Option<&str>,
) -> Cow<'a, str> {
    if let Some(message) = present(message) {
        return Cow::Borrowed(message);
    }
    match (present(argument), present(function)) {
        (Some(argument), None) => Cow::Owned(format!("Invalid argument {argument}")),
        (None, Some(function)) => Cow::Owned(format!("Invalid argument for {function}")),
        (Some(argument), Some(function)) => {
            Cow::Owned(format!("Invalid argument {argument} for {function}"))
        },
        (None, None) => Cow::Borrowed("Invalid argument"),
    }
}

/// Text for [`GvmError::RequiredArgument`](crate::GvmError::RequiredArgument).
///
/// With both names present the function leads: `bar requires a foo argument`.
#[must_use]
pub fn required_argument<'a>(
    message: Option<&'a str>,
    argument: Option<&str>,
    function: Option<&str>,
) -> Cow<'a, str> {
    if let Some(message) = present(message) {
        return Cow::Borrowed(message);
    }
    match (present(argument), present(function)) {
        (Some(argument), None) => Cow::Owned(format!("Required argument {argument}")),
        (None, Some(function)) => Cow::Owned(format!("Required argument missing for {function}")),
        (Some(argument), Some(function)) => {
            Cow::Owned(format!("{function} requires a {argument} argument"))
        },
        (None, None) => Cow::Borrowed("Required argument missing"),
    }
}

/// Text for [`GvmError::InvalidArgumentType`](crate::GvmError::InvalidArgumentType).
#[must_use]
pub fn invalid_argument_type(argument: &str, arg_type: &str, function: Option<&str>) -> String {
    match present(function) {
        Some(function) => {
            format!("In {function} the argument {argument} must be of type {arg_type}.")
        },
        None => format!("The argument {argument} must be of type {arg_type}."),
    }
}

/// Text for [`GvmError::Server`](crate::GvmError::Server).
#[must_use]
pub fn server(status: Option<&str>, message: Option<&str>) -> String {
    status_line("Server Error", status, message)
}

/// Text for [`GvmError::Response`](crate::GvmError::Response).
#[must_use]
pub fn response(status: Option<&str>, message: Option<&str>) -> String {
    status_line("Response Error", status, message)
}

// "<prefix>[ status].[ message]"
fn status_line(prefix: &str, status: Option<&str>, message: Option<&str>) -> String {
    let mut line = String::from(prefix);
    if let Some(status) = present(status) {
        line.push(' ');
        line.push_str(status);
    }
    line.push('.');
    if let Some(message) = present(message) {
        line.push(' ');
        line.push_str(message);
    }
    line
}

/// Borrows an optional text field for the templates above.
pub(crate) fn text<'a>(field: &'a Option<Cow<'static, str>>) -> Option<&'a str> {
    field.as_deref()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_borrows_from_the_field() {
        let field: Option<Cow<'static, str>> = Some(Cow::Owned("target_id".to_owned()));
        let empty: Option<Cow<'static, str>> = None;

        assert_eq!(text(&field), Some("target_id"));
        assert_eq!(text(&empty), None);
    }

    #[test]
    fn empty_message_falls_through_to_templates() {
        assert_eq!(invalid_argument(Some(""), Some("foo"), None), "Invalid argument foo");
        assert_eq!(
            required_argument(Some(""), None, Some("bar")),
            "Required argument missing for bar"
        );
    }

    #[test]
    fn empty_names_count_as_absent() {
        assert_eq!(invalid_argument(None, Some(""), Some("bar")), "Invalid argument for bar");
        assert_eq!(required_argument(None, Some("foo"), Some("")), "Required argument foo");
    }

    #[test]
    fn no_fields_render_generic_text() {
        assert_eq!(invalid_argument(None, None, None), "Invalid argument");
        assert_eq!(required_argument(None, None, None), "Required argument missing");
    }

    #[test]
    fn message_is_borrowed_verbatim() {
        let rendered = invalid_argument(Some("foo bar"), Some("foo"), Some("bar"));
        assert!(matches!(rendered, Cow::Borrowed("foo bar")));
    }

    #[test]
    fn argument_type_mentions_function_when_known() {
        assert_eq!(
            invalid_argument_type("port_range", "PortRangeType", Some("create_port_range")),
            "In create_port_range the argument port_range must be of type PortRangeType."
        );
        assert_eq!(
            invalid_argument_type("port_range", "PortRangeType", None),
            "The argument port_range must be of type PortRangeType."
        );
    }

    #[test]
    fn status_lines_skip_missing_parts() {
        assert_eq!(
            server(Some("400"), Some("Bogus command name")),
            "Server Error 400. Bogus command name"
        );
        assert_eq!(server(None, None), "Server Error.");
        assert_eq!(response(Some("404"), None), "Response Error 404.");
        assert_eq!(
            response(None, Some("Failed to find task")),
            "Response Error. Failed to find task"
        );
    }
}
