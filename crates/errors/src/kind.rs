use std::fmt;

/// Classification of a [`GvmError`](crate::GvmError) value.
///
/// Kinds form a small hierarchy rooted at [`ErrorKind::Gvm`]:
///
/// ```text
/// Gvm
/// ├── Client
/// │   └── Response
/// ├── Server
/// ├── InvalidArgument
/// ├── InvalidArgumentType
/// └── RequiredArgument
/// ```
///
/// A handler that accepts "any GVM error" checks [`ErrorKind::is_a`] against
/// [`ErrorKind::Gvm`], which holds for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Base kind shared by every client library error.
    Gvm,
    /// The client detected a problem on its side.
    Client,
    /// The manager reported a failure.
    Server,
    /// The manager answered with an error status.
    Response,
    /// A supplied argument is invalid.
    InvalidArgument,
    /// A supplied argument has the wrong type.
    InvalidArgumentType,
    /// A mandatory argument was not supplied.
    RequiredArgument,
}

impl ErrorKind {
    /// Every kind, root first.
    pub const ALL: [Self; 7] = [
        Self::Gvm,
        Self::Client,
        Self::Server,
        Self::Response,
        Self::InvalidArgument,
        Self::InvalidArgumentType,
        Self::RequiredArgument,
    ];

    /// Returns the direct parent kind, or `None` for [`ErrorKind::Gvm`].
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Gvm => None,
            Self::Response => Some(Self::Client),
            Self::Client
            | Self::Server
            | Self::InvalidArgument
            | Self::InvalidArgumentType
            | Self::RequiredArgument => Some(Self::Gvm),
        }
    }

    /// Iterates over this kind and its ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Returns `true` if `self` is `other` or descends from it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self.ancestors().any(|kind| kind == other)
    }

    /// Stable snake-case label, used for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gvm => "gvm",
            Self::Client => "client",
            Self::Server => "server",
            Self::Response => "response",
            Self::InvalidArgument => "invalid_argument",
            Self::InvalidArgumentType => "invalid_argument_type",
            Self::RequiredArgument => "required_argument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
