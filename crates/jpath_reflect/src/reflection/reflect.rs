use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{ReflectKind, Type};
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`jpath_reflect`].
///
/// A `Reflect` value reports its *shape* ([`ReflectKind`]) at runtime and
/// hands out a view of itself as the matching sub-trait through
/// [`reflect_ref`] and [`reflect_mut`]. Path access only ever looks at
/// values through this trait.
///
/// # Recommendations
///
/// Use [the derive macro for `Reflect`] rather than implementing this trait
/// by hand. It implements [`Struct`] as well for structs with fields.
///
/// # Type Identification
///
/// `Any::type_id` on `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use jpath_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = Box::new(32_i32).into_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Type Casting
///
/// ```rust
/// # use jpath_reflect::{Reflect, ops::{List, ReflectRef}};
/// let vec = vec![1, 2, 3].into_boxed_reflect();
///
/// let ReflectRef::List(list) = vec.reflect_ref() else { unreachable!() };
/// assert_eq!(list.len(), 3);
///
/// let first = list.get(0).unwrap().downcast_ref::<i32>().unwrap();
/// assert_eq!(*first, 1);
/// ```
///
/// # Manual Implementation
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;  // Extract Self from Box<dyn Reflect>
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Kind  // e.g., ReflectKind::Struct, ReflectKind::List
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Kind(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Kind(self)
/// }
/// ```
///
/// [`jpath_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`Struct`]: crate::ops::Struct
/// [the derive macro for `Reflect`]: crate::derive::Reflect
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a fully-reflected value.
    ///
    /// ```
    /// use jpath_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the type path of the underlying type, as
    /// [`core::any::type_name`] spells it.
    ///
    /// Only used for diagnostics: the exact text is not stable.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the [`Type`] of the underlying value.
    ///
    /// ```
    /// use jpath_reflect::Reflect;
    ///
    /// let value: &dyn Reflect = &1_u8;
    /// assert!(value.reflect_type().is::<u8>());
    /// ```
    #[inline]
    fn reflect_type(&self) -> Type {
        Type::of::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Gives `value` back if it is not of type `Self`. Conversion between
    /// compatible types is the job of [`convert`](crate::convert).
    ///
    /// ```
    /// # use jpath_reflect::Reflect;
    /// let data = vec![1_i32, 2_i32, 3_i32].into_boxed_reflect();
    /// let mut vec = Vec::<i32>::new();
    ///
    /// vec.set(data).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// assert!(vec.set(2_u8.into_boxed_reflect()).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns the shape of this value.
    ///
    /// ```
    /// # use jpath_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3].into_boxed_reflect();
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable view of this value as its shape's sub-trait.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable view of this value as its shape's sub-trait.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` means the comparison is not supported, which is the default
    /// for opaque types. Other shapes compare structurally, see
    /// [`struct_partial_eq`], [`list_partial_eq`], [`map_partial_eq`] and
    /// [`reference_partial_eq`].
    ///
    /// [`struct_partial_eq`]: crate::impls::struct_partial_eq
    /// [`list_partial_eq`]: crate::impls::list_partial_eq
    /// [`map_partial_eq`]: crate::impls::map_partial_eq
    /// [`reference_partial_eq`]: crate::impls::reference_partial_eq
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_partial_eq(data, other),
            ReflectRef::List(data) => impls::list_partial_eq(data, other),
            ReflectRef::Map(data) => impls::map_partial_eq(data, other),
            ReflectRef::Reference(data) => impls::reference_partial_eq(data, other),
            ReflectRef::Opaque(_) => None,
        }
    }

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_path)"` by default.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Reference(data) => impls::reference_debug(data, f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// ```
    /// # use jpath_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// ```
    /// # use jpath_reflect::Reflect;
    /// let mut x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let y = x.downcast_mut::<i32>().unwrap();
    /// *y += 2;
    ///
    /// assert_eq!(*y, 12);
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            // TODO: replace with `downcast_unchecked` once it is stable.
            #[expect(unsafe_code, reason = "type is already checked")]
            Ok(unsafe { <Box<dyn Any>>::downcast::<T>(self).unwrap_unchecked() })
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// ```
    /// # use jpath_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement the methods every impl writes the same way: `set` and the
/// three shape casts.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn downcast_and_take() {
        let boxed: Box<dyn Reflect> = Box::new(String::from("abc"));
        assert!(boxed.is::<String>());
        assert!(!boxed.is::<&'static str>());

        let boxed = boxed.take::<u8>().unwrap_err();
        assert_eq!(boxed.take::<String>().unwrap(), "abc");
    }

    #[test]
    fn set_requires_same_type() {
        let mut value = 1_i64;
        assert!(value.set(Box::new(2_i32)).is_err());
        assert_eq!(value, 1);

        value.set(Box::new(5_i64)).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn structural_equality_and_debug() {
        let a = vec![Some(1_u8), None];
        let b = vec![Some(1_u8), None];
        let c = vec![Some(2_u8), None];

        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
        assert_eq!(a.reflect_kind(), ReflectKind::List);

        let dynamic: &dyn Reflect = &a;
        assert_eq!(format!("{dynamic:?}"), "[Some(1), None]");
    }
}
