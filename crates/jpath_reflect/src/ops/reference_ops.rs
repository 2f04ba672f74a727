use crate::Reflect;

// -----------------------------------------------------------------------------
// Reference

/// A trait used to power nullable indirection via reflection.
///
/// A reference either points at another value (its *target*) or is null.
/// `Box<T>` is never null; `Option<T>` is null when it is `None`.
///
/// Path access looks through references: they are dereferenced before a
/// segment is applied, so `Option<Vec<u8>>` is addressed like `Vec<u8>`.
///
/// # Example
///
/// ```
/// use jpath_reflect::ops::Reference;
///
/// let some: &dyn Reference = &Some(3_u8);
/// let none: &dyn Reference = &None::<u8>;
///
/// assert_eq!(some.target().unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(none.is_null());
/// ```
pub trait Reference: Reflect {
    /// Returns the pointee, or `None` for a null reference.
    fn target(&self) -> Option<&dyn Reflect>;

    /// Returns the pointee mutably, or `None` for a null reference.
    fn target_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` if this reference does not point at a value.
    #[inline]
    fn is_null(&self) -> bool {
        self.target().is_none()
    }
}
