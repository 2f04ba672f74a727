use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;
use crate::ops::Reference;

// -----------------------------------------------------------------------------
// Box

impl<T: Reflect> Reflect for Box<T> {
    crate::reflection::impl_reflect_cast_fn!(Reference);

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::reference_partial_eq(self, value)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::reflect_debug(self, f)
    }
}

impl<T: Reflect> Reference for Box<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        Some(T::as_reflect(self))
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(T::as_reflect_mut(self))
    }

    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

// -----------------------------------------------------------------------------
// Option

impl<T: Reflect> Reflect for Option<T> {
    crate::reflection::impl_reflect_cast_fn!(Reference);

    #[inline]
    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        crate::impls::reference_partial_eq(self, value)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => {
                f.write_str("Some(")?;
                value.reflect_debug(f)?;
                f.write_str(")")
            }
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect> Reference for Option<T> {
    #[inline]
    fn target(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn target_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;

    use crate::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::Reference;

    #[test]
    fn box_is_a_non_null_reference() {
        let mut value = Box::new(5_u32);
        assert_eq!(value.reflect_kind(), ReflectKind::Reference);
        assert!(!Reference::is_null(&value));

        let target = value.target_mut().unwrap();
        *target.downcast_mut::<u32>().unwrap() = 6;
        assert_eq!(*value, 6);
    }

    #[test]
    fn none_is_null() {
        let mut value: Option<u32> = None;
        assert!(Reference::is_null(&value));
        assert!(value.target_mut().is_none());
    }

    #[test]
    fn debug_output() {
        let boxed: &dyn Reflect = &Box::new(Some(3_i8));
        assert_eq!(format!("{boxed:?}"), "Some(3)");

        let none: &dyn Reflect = &None::<i8>;
        assert_eq!(format!("{none:?}"), "None");
    }
}
