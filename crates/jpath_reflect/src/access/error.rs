use alloc::borrow::Cow;
use core::fmt;

use crate::info::ReflectKind;

// -----------------------------------------------------------------------------
// ErrorKind

/// The classification of a failed path access.
///
/// Every error of this module maps to exactly one kind, so callers can
/// branch on it without looking at messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The path names something that does not exist: a missing field or
    /// key, a null reference, or a leaf that cannot be descended into.
    NotFound,
    /// The path or the value is malformed for the location: a bad index,
    /// a value that does not convert, or a location that cannot be set.
    BadArgument,
    /// The operation is not supported on this location: a map whose keys
    /// are not strings, or a write into a map entry.
    Unsupported,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.pad("not found"),
            Self::BadArgument => f.pad("bad argument"),
            Self::Unsupported => f.pad("unsupported"),
        }
    }
}

// -----------------------------------------------------------------------------
// Single step error

/// The reason a single path segment could not be applied.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessErrorKind {
    #[error("no such field")]
    MissingField,
    #[error("no such key")]
    MissingKey,
    #[error("cannot descend into {0} value")]
    UnsupportedShape(ReflectKind),
    #[error("cannot follow null reference")]
    NullReference,
    #[error("cannot parse index")]
    InvalidIndex,
    #[error("invalid index")]
    NegativeIndex,
    #[error("index out of range (length {len})")]
    IndexOutOfRange { len: usize },
    #[error("map key type `{key_type}` is not a string")]
    UnsupportedKey { key_type: &'static str },
}

impl AccessErrorKind {
    /// Returns the classification of this cause.
    pub const fn error_kind(&self) -> ErrorKind {
        match self {
            Self::MissingField
            | Self::MissingKey
            | Self::UnsupportedShape(_)
            | Self::NullReference => ErrorKind::NotFound,
            Self::InvalidIndex | Self::NegativeIndex | Self::IndexOutOfRange { .. } => {
                ErrorKind::BadArgument
            }
            Self::UnsupportedKey { .. } => ErrorKind::Unsupported,
        }
    }
}

/// A path segment that could not be applied to the value reached so far.
///
/// ```
/// use jpath_reflect::access::{ErrorKind, ReflectPathAccess};
///
/// let data = vec![1_u8, 2];
/// let err = data.query("/7").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BadArgument);
/// assert!(
///     err.to_string()
///         .starts_with("query: index out of range (length 2): segment `7` at offset 1 of `")
/// );
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: segment `{segment}` at offset {offset} of `{type_path}`")]
pub struct AccessError<'a> {
    kind: AccessErrorKind,
    segment: Cow<'a, str>,
    offset: usize,
    type_path: &'static str,
}

impl<'a> AccessError<'a> {
    #[inline]
    pub(crate) const fn new(
        kind: AccessErrorKind,
        segment: Cow<'a, str>,
        offset: usize,
        type_path: &'static str,
    ) -> Self {
        Self {
            kind,
            segment,
            offset,
            type_path,
        }
    }

    /// Returns the cause of the failure.
    #[inline]
    pub const fn kind(&self) -> AccessErrorKind {
        self.kind
    }

    /// Returns the segment that could not be applied.
    #[inline]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns the byte offset of the segment in the path.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the type path of the value the segment was applied to.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Converts the error into one that does not borrow the path.
    pub fn into_owned(self) -> AccessError<'static> {
        AccessError {
            kind: self.kind,
            segment: Cow::Owned(self.segment.into_owned()),
            offset: self.offset,
            type_path: self.type_path,
        }
    }
}

// -----------------------------------------------------------------------------
// Assign error

/// The reason a resolved location could not be written.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignError {
    /// The location is a reference with no value behind it to overwrite,
    /// such as `None`.
    #[error("cannot set `{type_path}`: no value behind the reference")]
    NotSettable { type_path: &'static str },
    /// The location was reached through a map entry.
    #[error("cannot set map entry value")]
    MapEntry,
    /// The new value does not convert to the type of the location.
    #[error("cannot convert value of type `{from}` to `{to}`")]
    Conversion {
        from: &'static str,
        to: &'static str,
    },
}

impl AssignError {
    /// Returns the classification of this cause.
    pub const fn error_kind(&self) -> ErrorKind {
        match self {
            Self::NotSettable { .. } | Self::Conversion { .. } => ErrorKind::BadArgument,
            Self::MapEntry => ErrorKind::Unsupported,
        }
    }
}

// -----------------------------------------------------------------------------
// PathAccessError

/// The operation a [`PathAccessError`] was returned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Query,
    Assign,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.pad("query"),
            Self::Assign => f.pad("assign"),
        }
    }
}

/// What went wrong in a [`PathAccessError`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathAccessErrorCause<'a> {
    /// A segment could not be applied while resolving the path.
    #[error(transparent)]
    Access(AccessError<'a>),
    /// The resolved location could not be written.
    #[error(transparent)]
    Assign(AssignError),
    /// The resolved value is not of the requested type.
    #[error("cannot downcast value of type `{found}` to `{expected}`")]
    InvalidDowncast {
        found: &'static str,
        expected: &'static str,
    },
}

/// An error returned from a failed path access.
///
/// Carries the [`Operation`] it came from and its cause, and classifies
/// itself with [`ErrorKind`].
///
/// ```
/// use jpath_reflect::access::{ErrorKind, Operation, ReflectPathAccess};
/// use std::collections::BTreeMap;
///
/// let mut data = BTreeMap::from([(String::from("k"), 1_u8)]);
///
/// let err = data.query("missing").unwrap_err();
/// assert!(err.is_not_found());
/// assert_eq!(err.operation(), Operation::Query);
///
/// let err = data.assign("k", 2_u8).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Unsupported);
/// assert_eq!(err.to_string(), "assign: cannot set map entry value");
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{operation}: {cause}")]
pub struct PathAccessError<'a> {
    operation: Operation,
    cause: PathAccessErrorCause<'a>,
}

impl<'a> PathAccessError<'a> {
    #[inline]
    pub(crate) const fn new(operation: Operation, cause: PathAccessErrorCause<'a>) -> Self {
        Self { operation, cause }
    }

    #[inline]
    pub(crate) const fn access(operation: Operation, err: AccessError<'a>) -> Self {
        Self::new(operation, PathAccessErrorCause::Access(err))
    }

    #[inline]
    pub(crate) const fn assign(err: AssignError) -> Self {
        Self::new(Operation::Assign, PathAccessErrorCause::Assign(err))
    }

    /// Returns the operation that failed.
    #[inline]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns what went wrong.
    #[inline]
    pub const fn cause(&self) -> &PathAccessErrorCause<'a> {
        &self.cause
    }

    /// Returns the classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match &self.cause {
            PathAccessErrorCause::Access(err) => err.kind().error_kind(),
            PathAccessErrorCause::Assign(err) => err.error_kind(),
            PathAccessErrorCause::InvalidDowncast { .. } => ErrorKind::BadArgument,
        }
    }

    #[inline]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    #[inline]
    pub const fn is_bad_argument(&self) -> bool {
        matches!(self.kind(), ErrorKind::BadArgument)
    }

    #[inline]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self.kind(), ErrorKind::Unsupported)
    }

    /// Converts the error into one that does not borrow the path.
    pub fn into_owned(self) -> PathAccessError<'static> {
        let cause = match self.cause {
            PathAccessErrorCause::Access(err) => PathAccessErrorCause::Access(err.into_owned()),
            PathAccessErrorCause::Assign(err) => PathAccessErrorCause::Assign(err),
            PathAccessErrorCause::InvalidDowncast { found, expected } => {
                PathAccessErrorCause::InvalidDowncast { found, expected }
            }
        };
        PathAccessError::new(self.operation, cause)
    }
}
