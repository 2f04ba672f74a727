//! Conversion of a reflected value to another declared type.
//!
//! Assignment through a path only writes values of the exact declared type
//! of the location, so a value of a neighbouring type is first converted
//! with [`convert`]. The accepted conversions are a small explicit table,
//! every other pair is rejected:
//!
//! | target | accepted sources |
//! |--------|------------------|
//! | any type | the same type, unchanged |
//! | integers | any integer whose value fits the target |
//! | `f64` | `f32`, integers with `|v| <= 2^53` |
//! | `f32` | `f64` values that round-trip exactly, integers with `|v| <= 2^24` |
//! | `String`, `Cow<'static, str>`, `Box<str>` | `String`, `&'static str`, `Cow<'static, str>`, `Box<str>`, `char` |
//! | `char` | a string holding exactly one character |
//!
//! Floats never convert to integers, and nothing converts to or from
//! `bool` other than `bool` itself.
//!
//! # Examples
//!
//! ```
//! use jpath_reflect::{Reflect, convert::convert, info::Type};
//!
//! let value = convert(Box::new(300_i64), Type::of::<u16>()).unwrap();
//! assert_eq!(value.take::<u16>().unwrap(), 300);
//!
//! // does not fit
//! let value = convert(Box::new(300_i64), Type::of::<u8>()).unwrap_err();
//! assert_eq!(value.take::<i64>().unwrap(), 300);
//! ```

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::any::TypeId;

use crate::Reflect;
use crate::info::Type;

/// Largest integer magnitude every `f64` can hold exactly.
const F64_EXACT: u128 = 1 << 53;
/// Largest integer magnitude every `f32` can hold exactly.
const F32_EXACT: u128 = 1 << 24;

/// A source value reduced to what the conversion table looks at.
enum Scalar {
    Signed(i128),
    Unsigned(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Text(String),
}

impl Scalar {
    fn classify(value: &dyn Reflect) -> Option<Self> {
        macro_rules! classify_as {
            ($($variant:ident($via:ty): $($ty:ty),+;)*) => {
                $($(
                    if let Some(v) = value.downcast_ref::<$ty>() {
                        return Some(Self::$variant(<$via>::from(*v)));
                    }
                )+)*
            };
        }

        classify_as! {
            Signed(i128): i8, i16, i32, i64, i128;
            Unsigned(u128): u8, u16, u32, u64, u128;
            F32(f32): f32;
            F64(f64): f64;
            Char(char): char;
        }

        if let Some(v) = value.downcast_ref::<isize>() {
            return Some(Self::Signed(*v as i128));
        }
        if let Some(v) = value.downcast_ref::<usize>() {
            return Some(Self::Unsigned(*v as u128));
        }
        if let Some(v) = value.downcast_ref::<String>() {
            return Some(Self::Text(v.clone()));
        }
        if let Some(v) = value.downcast_ref::<&'static str>() {
            return Some(Self::Text(String::from(*v)));
        }
        if let Some(v) = value.downcast_ref::<Cow<'static, str>>() {
            return Some(Self::Text(String::from(v.as_ref())));
        }
        if let Some(v) = value.downcast_ref::<Box<str>>() {
            return Some(Self::Text(String::from(&**v)));
        }
        None
    }

    fn into_target(self, target: TypeId) -> Option<Box<dyn Reflect>> {
        macro_rules! to_int {
            ($($ty:ty),*) => {
                $(
                    if target == TypeId::of::<$ty>() {
                        let converted = match self {
                            Self::Signed(v) => <$ty>::try_from(v).ok(),
                            Self::Unsigned(v) => <$ty>::try_from(v).ok(),
                            _ => None,
                        };
                        return converted.map(Reflect::into_boxed_reflect);
                    }
                )*
            };
        }

        to_int!(i8, i16, i32, i64, i128, isize);
        to_int!(u8, u16, u32, u64, u128, usize);

        if target == TypeId::of::<f64>() {
            let converted = match self {
                Self::F32(v) => Some(f64::from(v)),
                Self::F64(v) => Some(v),
                Self::Signed(v) if v.unsigned_abs() <= F64_EXACT => Some(v as f64),
                Self::Unsigned(v) if v <= F64_EXACT => Some(v as f64),
                _ => None,
            };
            return converted.map(Reflect::into_boxed_reflect);
        }

        if target == TypeId::of::<f32>() {
            let converted = match self {
                Self::F32(v) => Some(v),
                // NaN never compares equal, so it is let through explicitly.
                Self::F64(v) if v.is_nan() || f64::from(v as f32) == v => Some(v as f32),
                Self::Signed(v) if v.unsigned_abs() <= F32_EXACT => Some(v as f32),
                Self::Unsigned(v) if v <= F32_EXACT => Some(v as f32),
                _ => None,
            };
            return converted.map(Reflect::into_boxed_reflect);
        }

        if target == TypeId::of::<char>() {
            let converted = match self {
                Self::Char(c) => Some(c),
                Self::Text(text) => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(c),
                        _ => None,
                    }
                }
                _ => None,
            };
            return converted.map(Reflect::into_boxed_reflect);
        }

        let text = match self {
            Self::Text(text) => text,
            Self::Char(c) => String::from(c),
            _ => return None,
        };

        if target == TypeId::of::<String>() {
            Some(Box::new(text))
        } else if target == TypeId::of::<Cow<'static, str>>() {
            Some(Box::new(Cow::<'static, str>::Owned(text)))
        } else if target == TypeId::of::<Box<str>>() {
            Some(Box::new(text.into_boxed_str()))
        } else {
            None
        }
    }
}

/// Converts `value` to the type `target`.
///
/// A value already of type `target` is returned unchanged. Otherwise the
/// conversion table of this module applies; when it has no row for the
/// pair, or the value does not fit, the original value is given back
/// as the error.
///
/// ```
/// use jpath_reflect::{Reflect, convert::convert, info::Type};
///
/// let value = convert(Box::new('x'), Type::of::<String>()).unwrap();
/// assert_eq!(value.take::<String>().unwrap(), "x");
///
/// assert!(convert(Box::new(1.5_f64), Type::of::<i32>()).is_err());
/// ```
pub fn convert(value: Box<dyn Reflect>, target: Type) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
    if value.ty_id() == target.id() {
        return Ok(value);
    }

    match Scalar::classify(&*value).and_then(|scalar| scalar.into_target(target.id())) {
        Some(converted) => Ok(converted),
        None => Err(value),
    }
}
