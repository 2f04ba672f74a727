use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

/// Implement `Reflect` for leaf types that are `PartialEq + Debug`.
macro_rules! impl_opaque_reflect {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                $crate::reflection::impl_reflect_cast_fn!(Opaque);

                fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                    if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                        Some(PartialEq::eq(self, value))
                    } else {
                        Some(false)
                    }
                }

                #[inline]
                fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

impl_opaque_reflect!(bool, char, ());
impl_opaque_reflect!(i8, i16, i32, i64, i128, isize);
impl_opaque_reflect!(u8, u16, u32, u64, u128, usize);
impl_opaque_reflect!(f32, f64);
impl_opaque_reflect!(String, &'static str, Cow<'static, str>, Box<str>);

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::ReflectKind;

    #[test]
    fn scalars_are_opaque() {
        let values: [&dyn Reflect; 4] = [&1_u8, &true, &"str", &Cow::Borrowed("cow")];
        for value in values {
            assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        }
    }

    #[test]
    fn equality_is_type_strict() {
        assert_eq!(1_u8.reflect_partial_eq(&1_u8), Some(true));
        assert_eq!(1_u8.reflect_partial_eq(&1_u16), Some(false));
        assert_eq!(String::from("a").reflect_partial_eq(&"a"), Some(false));
        assert_eq!(f64::NAN.reflect_partial_eq(&f64::NAN), Some(false));
    }

    #[test]
    fn debug_uses_std_debug() {
        let value: &dyn Reflect = &String::from("hi");
        assert_eq!(format!("{value:?}"), r#""hi""#);
    }
}
