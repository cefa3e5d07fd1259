//! # GVM Errors
//!
//! This module defines the [`GvmError`] enum and [`Result`] type returned by the
//! client library when a call cannot proceed.

use crate::builder::{ArgumentErrorBuilder, ArgumentTypeErrorBuilder, Invalid, Required};
use crate::kind::ErrorKind;
use crate::render::{self, text};
use std::borrow::Cow;

/// Errors raised by the GVM client library.
///
/// Values are immutable once built; the display text is derived from the
/// fields by the functions in [`render`](crate::render).
#[gvm_derive::gvm_error]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GvmError {
    /// A supplied argument is invalid.
    #[error("{}", render::invalid_argument(text(.message), text(.argument), text(.function)))]
    InvalidArgument {
        message: Option<Cow<'static, str>>,
        argument: Option<Cow<'static, str>>,
        function: Option<Cow<'static, str>>,
    },

    /// A mandatory argument was not supplied.
    #[error("{}", render::required_argument(text(.message), text(.argument), text(.function)))]
    RequiredArgument {
        message: Option<Cow<'static, str>>,
        argument: Option<Cow<'static, str>>,
        function: Option<Cow<'static, str>>,
    },

    /// A supplied argument has the wrong type.
    #[error("{}", render::invalid_argument_type(.argument, .arg_type, text(.function)))]
    InvalidArgumentType {
        argument: Cow<'static, str>,
        arg_type: Cow<'static, str>,
        function: Option<Cow<'static, str>>,
    },

    /// The client detected a problem on its side.
    #[error("{message}")]
    Client { message: Cow<'static, str> },

    /// The manager reported a failure.
    #[error("{}", render::server(text(.status), text(.message)))]
    Server { status: Option<Cow<'static, str>>, message: Option<Cow<'static, str>> },

    /// The manager answered a request with an error status.
    #[error("{}", render::response(text(.status), text(.message)))]
    Response { status: Option<Cow<'static, str>>, message: Option<Cow<'static, str>> },
}

impl GvmError {
    /// Starts a [`GvmError::InvalidArgument`].
    ///
    /// ```rust
    /// use gvm_errors::GvmError;
    ///
    /// let err = GvmError::invalid_argument().argument("foo").function("bar").build();
    /// assert_eq!(err.to_string(), "Invalid argument foo for bar");
    /// ```
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn invalid_argument() -> ArgumentErrorBuilder<Invalid> {
        ArgumentErrorBuilder::new()
    }

    /// Starts a [`GvmError::RequiredArgument`].
    ///
    /// ```rust
    /// use gvm_errors::GvmError;
    ///
    /// let err = GvmError::required_argument().argument("foo").function("bar").build();
    /// assert_eq!(err.to_string(), "bar requires a foo argument");
    /// ```
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn required_argument() -> ArgumentErrorBuilder<Required> {
        ArgumentErrorBuilder::new()
    }

    /// Starts a [`GvmError::InvalidArgumentType`] for `argument`, which should
    /// have been of type `arg_type`.
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn invalid_argument_type(
        argument: impl Into<Cow<'static, str>>,
        arg_type: impl Into<Cow<'static, str>>,
    ) -> ArgumentTypeErrorBuilder {
        ArgumentTypeErrorBuilder::new(argument.into(), arg_type.into())
    }

    /// Builds a [`GvmError::Client`].
    #[must_use]
    pub fn client(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Client { message: message.into() }
    }

    /// Builds a [`GvmError::Server`] with both status and message.
    #[must_use]
    pub fn server(
        status: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Server { status: Some(status.into()), message: Some(message.into()) }
    }

    /// Builds a [`GvmError::Response`] with both status and message.
    #[must_use]
    pub fn response(
        status: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Response { status: Some(status.into()), message: Some(message.into()) }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::RequiredArgument { .. } => ErrorKind::RequiredArgument,
            Self::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            Self::Client { .. } => ErrorKind::Client,
            Self::Server { .. } => ErrorKind::Server,
            Self::Response { .. } => ErrorKind::Response,
        }
    }

    /// Returns `true` if this error's kind is `kind` or descends from it.
    ///
    /// Every value `is_a(ErrorKind::Gvm)`.
    #[must_use]
    pub fn is_a(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    /// Returns the display text.
    ///
    /// Identical to the [`Display`](std::fmt::Display) output, without going
    /// through a formatter. An explicit message is borrowed, not copied.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::InvalidArgument { message, argument, function } => {
                render::invalid_argument(text(message), text(argument), text(function))
            },
            Self::RequiredArgument { message, argument, function } => {
                render::required_argument(text(message), text(argument), text(function))
            },
            Self::InvalidArgumentType { argument, arg_type, function } => {
                Cow::Owned(render::invalid_argument_type(argument, arg_type, text(function)))
            },
            Self::Client { message } => Cow::Borrowed(message.as_ref()),
            Self::Server { status, message } => {
                Cow::Owned(render::server(text(status), text(message)))
            },
            Self::Response { status, message } => {
                Cow::Owned(render::response(text(status), text(message)))
            },
        }
    }

    /// Recognizes a [`GvmError`] behind a type-erased error.
    ///
    /// Only the error itself is inspected, its source chain is not walked.
    ///
    /// ```rust
    /// use gvm_errors::GvmError;
    ///
    /// let boxed: Box<dyn std::error::Error> = Box::new(GvmError::client("lost connection"));
    /// assert!(GvmError::classify(boxed.as_ref()).is_some());
    /// ```
    #[must_use]
    pub fn classify<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a Self> {
        err.downcast_ref::<Self>()
    }
}
