//! Single layer access: applying one [`Segment`] to a value.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::access::{AccessError, AccessErrorKind, Segment};
use crate::info::ReflectKind;
use crate::ops::{Map, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Location

/// The result of resolving a path for writing.
///
/// Besides the value, a location records whether it is *addressable*,
/// that is whether writing to it changes the value the path started from.
/// Map entries are not: maps hand out their values, they do not expose
/// them as stable places. Dereferencing a reference makes the pointee
/// addressable again; fields and elements inherit their parent's state.
pub(crate) struct Location<'r> {
    pub value: &'r mut dyn Reflect,
    pub addressable: bool,
}

impl<'r> Location<'r> {
    #[inline]
    pub const fn root(value: &'r mut dyn Reflect) -> Self {
        Self {
            value,
            addressable: true,
        }
    }
}

// -----------------------------------------------------------------------------
// Map keys

/// Builds a key of `map`'s key type that is equal to `name`.
///
/// `Ok(None)` means no key can equal `name`, so the entry is missing.
fn map_key(map: &dyn Map, name: &str) -> Result<Option<Box<dyn Reflect>>, AccessErrorKind> {
    let key_type = map.key_type();

    if key_type.is::<String>() {
        Ok(Some(Box::new(String::from(name))))
    } else if key_type.is::<Cow<'static, str>>() {
        Ok(Some(Box::new(Cow::<'static, str>::Owned(String::from(name)))))
    } else if key_type.is::<Box<str>>() {
        Ok(Some(Box::new(Box::<str>::from(name))))
    } else if key_type.is::<&'static str>() {
        // A `&'static str` cannot be made from `name`, borrow the map's own.
        let found = map.iter().find_map(|(key, _)| {
            key.downcast_ref::<&'static str>()
                .copied()
                .filter(|key| *key == name)
        });
        Ok(found.map(Reflect::into_boxed_reflect))
    } else {
        Err(AccessErrorKind::UnsupportedKey {
            key_type: key_type.path(),
        })
    }
}

// -----------------------------------------------------------------------------
// List index

fn list_index(name: &str, len: usize) -> Result<usize, AccessErrorKind> {
    let index: i64 = name.parse().map_err(|_| AccessErrorKind::InvalidIndex)?;
    if index < 0 {
        return Err(AccessErrorKind::NegativeIndex);
    }
    match usize::try_from(index) {
        Ok(index) if index < len => Ok(index),
        _ => Err(AccessErrorKind::IndexOutOfRange { len }),
    }
}

// -----------------------------------------------------------------------------
// Segment access

impl<'a> Segment<'a> {
    #[inline(never)]
    fn error(&self, kind: AccessErrorKind, type_path: &'static str) -> AccessError<'a> {
        AccessError::new(kind, self.name_cow(), self.offset(), type_path)
    }

    /// Follows references until a non-reference value is reached.
    fn deref<'r>(&self, mut base: &'r dyn Reflect) -> Result<&'r dyn Reflect, AccessError<'a>> {
        while let ReflectRef::Reference(reference) = base.reflect_ref() {
            base = match reference.target() {
                Some(target) => target,
                None => {
                    return Err(self.error(AccessErrorKind::NullReference, base.reflect_type_path()));
                }
            };
        }
        Ok(base)
    }

    /// Applies this segment to `base`, returning the sub-value it names.
    ///
    /// References are followed first, so a segment never addresses a
    /// reference itself.
    pub(crate) fn access<'r>(&self, base: &'r dyn Reflect) -> Result<&'r dyn Reflect, AccessError<'a>> {
        let base = self.deref(base)?;
        let type_path = base.reflect_type_path();
        let name = self.name();

        let result = match base.reflect_ref() {
            ReflectRef::Struct(value) => value
                .field(name)
                .ok_or(AccessErrorKind::MissingField),
            ReflectRef::List(value) => list_index(name, value.len())
                .and_then(|index| value.get(index).ok_or(AccessErrorKind::IndexOutOfRange { len: value.len() })),
            ReflectRef::Map(value) => map_key(value, name).and_then(|key| {
                key.and_then(|key| value.get(&*key))
                    .ok_or(AccessErrorKind::MissingKey)
            }),
            ReflectRef::Opaque(_) => Err(AccessErrorKind::UnsupportedShape(ReflectKind::Opaque)),
            ReflectRef::Reference(_) => Err(AccessErrorKind::UnsupportedShape(ReflectKind::Reference)),
        };

        match result {
            Ok(value) => {
                log::trace!("resolved segment `{name}` at offset {} in `{type_path}`", self.offset());
                Ok(value)
            }
            Err(kind) => Err(self.error(kind, type_path)),
        }
    }

    /// Mutable version of [`Segment::access`], tracking addressability.
    pub(crate) fn access_mut<'r>(&self, location: Location<'r>) -> Result<Location<'r>, AccessError<'a>> {
        let Location {
            value: mut base,
            mut addressable,
        } = location;

        // The kind is checked first so that `base` is only reborrowed when
        // the reborrow is moved back into it.
        while base.reflect_kind() == ReflectKind::Reference {
            let type_path = base.reflect_type_path();
            let ReflectMut::Reference(reference) = base.reflect_mut() else {
                // `reflect_kind` and `reflect_mut` of a hand-written impl disagree.
                let kind = AccessErrorKind::UnsupportedShape(ReflectKind::Reference);
                return Err(self.error(kind, type_path));
            };
            base = match reference.target_mut() {
                Some(target) => target,
                None => return Err(self.error(AccessErrorKind::NullReference, type_path)),
            };
            addressable = true;
        }

        let type_path = base.reflect_type_path();
        let name = self.name();

        let result = match base.reflect_mut() {
            ReflectMut::Struct(value) => value
                .field_mut(name)
                .ok_or(AccessErrorKind::MissingField),
            ReflectMut::List(value) => {
                let len = value.len();
                list_index(name, len).and_then(|index| {
                    value
                        .get_mut(index)
                        .ok_or(AccessErrorKind::IndexOutOfRange { len })
                })
            }
            ReflectMut::Map(value) => {
                addressable = false;
                match map_key(value, name) {
                    Ok(Some(key)) => value.get_mut(&*key).ok_or(AccessErrorKind::MissingKey),
                    Ok(None) => Err(AccessErrorKind::MissingKey),
                    Err(kind) => Err(kind),
                }
            }
            ReflectMut::Opaque(_) => Err(AccessErrorKind::UnsupportedShape(ReflectKind::Opaque)),
            ReflectMut::Reference(_) => Err(AccessErrorKind::UnsupportedShape(ReflectKind::Reference)),
        };

        match result {
            Ok(value) => {
                log::trace!("resolved segment `{name}` at offset {} in `{type_path}`", self.offset());
                Ok(Location { value, addressable })
            }
            Err(kind) => Err(self.error(kind, type_path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use super::{Location, list_index, map_key};
    use crate::access::{AccessErrorKind, Segment};
    use crate::info::ReflectKind;

    #[test]
    fn index_parsing() {
        assert_eq!(list_index("0", 3), Ok(0));
        assert_eq!(list_index("+2", 3), Ok(2));
        assert_eq!(list_index("3", 3), Err(AccessErrorKind::IndexOutOfRange { len: 3 }));
        assert_eq!(list_index("-1", 3), Err(AccessErrorKind::NegativeIndex));
        assert_eq!(list_index("x", 3), Err(AccessErrorKind::InvalidIndex));
        assert_eq!(list_index("1.0", 3), Err(AccessErrorKind::InvalidIndex));
        assert_eq!(list_index("99999999999999999999", 3), Err(AccessErrorKind::InvalidIndex));
    }

    #[test]
    fn string_like_keys() {
        let map = BTreeMap::from([(Box::<str>::from("a"), 1_u8)]);
        assert!(map_key(&map, "a").unwrap().unwrap().is::<Box<str>>());
        let map = BTreeMap::from([(Cow::<'static, str>::Borrowed("a"), 1_u8)]);
        assert!(map_key(&map, "a").unwrap().unwrap().is::<Cow<'static, str>>());

        let map = BTreeMap::from([(1_u8, 2_u8)]);
        assert_eq!(
            map_key(&map, "1").err(),
            Some(AccessErrorKind::UnsupportedKey { key_type: "u8" })
        );
    }

    #[test]
    fn static_str_keys_are_found_by_content() {
        let map = BTreeMap::from([("cats", 1_u8)]);
        let key = map_key(&map, &String::from("cats")).unwrap().unwrap();
        assert_eq!(key.downcast_ref::<&'static str>(), Some(&"cats"));
        assert!(map_key(&map, "dogs").unwrap().is_none());
    }

    #[test]
    fn references_are_followed_before_a_segment() {
        let value = Some(Box::new(vec![7_u8]));
        let found = Segment::new("0", 0).access(&value).unwrap();
        assert_eq!(found.downcast_ref::<u8>(), Some(&7));

        let none: Option<Box<[u8; 1]>> = None;
        let err = Segment::new("0", 4).access(&none).unwrap_err();
        assert_eq!(err.kind(), AccessErrorKind::NullReference);
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn opaque_values_cannot_be_descended_into() {
        let err = Segment::new("x", 0).access(&1_u8).unwrap_err();
        assert_eq!(err.kind(), AccessErrorKind::UnsupportedShape(ReflectKind::Opaque));
        assert_eq!(err.type_path(), "u8");
    }

    #[test]
    fn map_entries_are_not_addressable() {
        let mut map = BTreeMap::from([(String::from("k"), Some(vec![1_u8]))]);

        let entry = Segment::new("k", 0)
            .access_mut(Location::root(&mut map))
            .unwrap();
        assert!(!entry.addressable);

        // dereferencing the `Option` re-anchors the location
        let element = Segment::new("0", 2).access_mut(entry).unwrap();
        assert!(element.addressable);
    }
}
