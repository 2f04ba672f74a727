use core::fmt;

use crate::Reflect;
use crate::ops::{List, Map, Reference, ReflectRef, Struct};

// -----------------------------------------------------------------------------
// Struct

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `y` is not `Struct`, return `Some(false)`.
/// 2. If the field counts differ, return `Some(false)`.
/// 3. Compare fields of the same name, a missing name is `Some(false)`.
/// 4. The first comparison that is not `Some(true)` is returned.
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.field_len() != y.field_len() {
        return Some(false);
    }

    for (idx, y_field) in y.iter_fields().enumerate() {
        let Some(x_field) = y.name_at(idx).and_then(|name| x.field(name)) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// Writes `TypePath { name: value, .. }` using each field's `reflect_debug`.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_path());

    for (index, field) in dyn_struct.iter_fields().enumerate() {
        debug.field(
            dyn_struct.name_at(index).unwrap_or_default(),
            &field as &dyn fmt::Debug,
        );
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// List

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// `y` must be a list of the same length whose elements compare equal pairwise.
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (x_item, y_item) in x.iter().zip(y.iter()) {
        let result = x_item.reflect_partial_eq(y_item);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Map

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// `y` must be a map of the same length, holding every key of `x` with
/// an equal value.
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (key, x_value) in x.iter() {
        let Some(y_value) = y.get(key) else {
            return Some(false);
        };
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

// -----------------------------------------------------------------------------
// Reference

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// Two null references are equal, a null and a non-null reference are not,
/// otherwise the targets are compared.
pub fn reference_partial_eq(x: &dyn Reference, y: &dyn Reflect) -> Option<bool> {
    let ReflectRef::Reference(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.target(), y.target()) {
        (None, None) => Some(true),
        (Some(x), Some(y)) => x.reflect_partial_eq(y),
        _ => Some(false),
    }
}

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// A non-null reference is transparent, a null one prints `null`.
pub fn reference_debug(dyn_ref: &dyn Reference, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_ref.target() {
        Some(target) => target.reflect_debug(f),
        None => f.write_str("null"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Reflect)]
    struct Other {
        x: i32,
        z: i32,
    }

    #[test]
    fn struct_equality_by_field_name() {
        let a = Point { x: 1, y: 2 };
        let b = Point { x: 1, y: 2 };
        let c = Point { x: 1, y: 3 };
        let d = Other { x: 1, z: 2 };

        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
        assert_eq!(a.reflect_partial_eq(&d), Some(false));
        assert_eq!(a.reflect_partial_eq(&1_i32), Some(false));
    }

    #[test]
    fn map_equality_ignores_order() {
        let a = BTreeMap::from([(String::from("a"), 1_u8), (String::from("b"), 2)]);
        let b = BTreeMap::from([(String::from("b"), 2_u8), (String::from("a"), 1)]);
        let c = BTreeMap::from([(String::from("a"), 1_u8)]);

        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
    }

    #[test]
    fn reference_equality() {
        assert_eq!(Some(1_u8).reflect_partial_eq(&Some(1_u8)), Some(true));
        assert_eq!(None::<u8>.reflect_partial_eq(&None::<u8>), Some(true));
        assert_eq!(None::<u8>.reflect_partial_eq(&Some(1_u8)), Some(false));
        assert_eq!(Box::new(1_u8).reflect_partial_eq(&Some(1_u8)), Some(true));
    }

    #[test]
    fn debug_output() {
        let point: &dyn Reflect = &Point { x: 1, y: -2 };
        let text = format!("{point:?}");
        assert!(text.ends_with("Point { x: 1, y: -2 }"), "{text}");

        let map: &dyn Reflect = &BTreeMap::from([(String::from("k"), vec![Some(true)])]);
        assert_eq!(format!("{map:?}"), r#"{"k": [Some(true)]}"#);
    }
}
