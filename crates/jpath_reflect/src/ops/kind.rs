use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{List, Map, Reference, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable view of a reflected value, by shape.
///
/// Obtained from [`Reflect::reflect_ref`].
///
/// ```
/// use jpath_reflect::{Reflect, ops::Map};
/// use std::collections::BTreeMap;
///
/// let map = BTreeMap::from([(String::from("a"), 1_u8)]);
/// let map: &dyn Map = map.reflect_ref().as_map().unwrap();
/// assert_eq!(map.len(), 1);
/// ```
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Reference(&'a dyn Reference),
    Opaque(&'a dyn Reflect),
}

/// A mutable view of a reflected value, by shape.
///
/// Obtained from [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Map(&'a mut dyn Map),
    Reference(&'a mut dyn Reference),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_cast_fn {
    ($name:ident : $kind:ident => $($ref:tt)+) => {
        /// Casts to the shape's sub-trait, or reports the actual shape.
        #[inline]
        pub fn $name(self) -> Result<$($ref)+ dyn $kind, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the shape of the viewed value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Reference(_) => ReflectKind::Reference,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_fn!(as_struct: Struct => &'a);
    impl_cast_fn!(as_list: List => &'a);
    impl_cast_fn!(as_map: Map => &'a);
    impl_cast_fn!(as_reference: Reference => &'a);
}

impl<'a> ReflectMut<'a> {
    /// Returns the shape of the viewed value.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Map(_) => ReflectKind::Map,
            Self::Reference(_) => ReflectKind::Reference,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    impl_cast_fn!(as_struct: Struct => &'a mut);
    impl_cast_fn!(as_list: List => &'a mut);
    impl_cast_fn!(as_map: Map => &'a mut);
    impl_cast_fn!(as_reference: Reference => &'a mut);
}
