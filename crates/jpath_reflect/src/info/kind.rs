use core::fmt;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" (shapes) of a reflected type.
///
/// Each kind except `Opaque` corresponds to a sub-trait of
/// [`Reflect`](crate::Reflect) in [`ops`](crate::ops).
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// or via [`ReflectRef::kind`] and [`ReflectMut::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
/// [`ReflectMut::kind`]: crate::ops::ReflectMut::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, addressed by field name.
    Struct,
    /// Ordered elements, addressed by index.
    List,
    /// Keyed entries, addressed by key.
    Map,
    /// A possibly null indirection to another value.
    Reference,
    /// A leaf that cannot be descended into.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Map => f.pad("Map"),
            Self::Reference => f.pad("Reference"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a value is not of the expected [`ReflectKind`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("reflect kind mismatch: expected {expected}, received {received}")]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}
