use crate::error::GvmError;
use private::Sealed;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Marker for builders producing [`GvmError::InvalidArgument`].
#[derive(Debug, Clone, Copy)]
pub struct Invalid;
/// Marker for builders producing [`GvmError::RequiredArgument`].
#[derive(Debug, Clone, Copy)]
pub struct Required;

mod private {
    use super::{Cow, GvmError};

    pub trait Sealed {
        fn assemble(
            message: Option<Cow<'static, str>>,
            argument: Option<Cow<'static, str>>,
            function: Option<Cow<'static, str>>,
        ) -> GvmError;
    }
}

impl Sealed for Invalid {
    fn assemble(
        message: Option<Cow<'static, str>>,
        argument: Option<Cow<'static, str>>,
        function: Option<Cow<'static, str>>,
    ) -> GvmError {
        GvmError::InvalidArgument { message, argument, function }
    }
}

impl Sealed for Required {
    fn assemble(
        message: Option<Cow<'static, str>>,
        argument: Option<Cow<'static, str>>,
        function: Option<Cow<'static, str>>,
    ) -> GvmError {
        GvmError::RequiredArgument { message, argument, function }
    }
}

/// A builder for the argument errors.
///
/// Obtained from [`GvmError::invalid_argument`] or [`GvmError::required_argument`].
/// Every setter is optional; [`ArgumentErrorBuilder::build`] never fails.
#[derive(Debug, Clone)]
pub struct ArgumentErrorBuilder<K: Sealed> {
    message: Option<Cow<'static, str>>,
    argument: Option<Cow<'static, str>>,
    function: Option<Cow<'static, str>>,
    kind: PhantomData<K>,
}

impl<K: Sealed> ArgumentErrorBuilder<K> {
    pub(crate) const fn new() -> Self {
        Self { message: None, argument: None, function: None, kind: PhantomData }
    }

    /// Sets an explicit message. When non-empty it replaces the generated text.
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Names the offending argument.
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn argument(mut self, argument: impl Into<Cow<'static, str>>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Names the function the argument was passed to.
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Consumes the builder and returns the error.
    #[must_use]
    pub fn build(self) -> GvmError {
        K::assemble(self.message, self.argument, self.function)
    }
}

impl<K: Sealed> From<ArgumentErrorBuilder<K>> for GvmError {
    fn from(builder: ArgumentErrorBuilder<K>) -> Self {
        builder.build()
    }
}

/// A builder for [`GvmError::InvalidArgumentType`].
#[derive(Debug, Clone)]
pub struct ArgumentTypeErrorBuilder {
    argument: Cow<'static, str>,
    arg_type: Cow<'static, str>,
    function: Option<Cow<'static, str>>,
}

impl ArgumentTypeErrorBuilder {
    pub(crate) const fn new(argument: Cow<'static, str>, arg_type: Cow<'static, str>) -> Self {
        Self { argument, arg_type, function: None }
    }

    /// Names the function the argument was passed to.
    #[must_use = "The builder does nothing until `build` is called."]
    pub fn function(mut self, function: impl Into<Cow<'static, str>>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Consumes the builder and returns the error.
    #[must_use]
    pub fn build(self) -> GvmError {
        GvmError::InvalidArgumentType {
            argument: self.argument,
            arg_type: self.arg_type,
            function: self.function,
        }
    }
}

impl From<ArgumentTypeErrorBuilder> for GvmError {
    fn from(builder: ArgumentTypeErrorBuilder) -> Self {
        builder.build()
    }
}
