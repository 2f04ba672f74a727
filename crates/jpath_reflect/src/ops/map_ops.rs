use alloc::boxed::Box;

use crate::Reflect;
use crate::info::Type;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power [map-like] operations via reflection.
///
/// Keys are passed as `&dyn Reflect` and must be of the map's key type,
/// reported by [`Map::key_type`], to be found.
///
/// # Example
///
/// ```
/// use jpath_reflect::{Reflect, ops::Map};
/// use std::collections::BTreeMap;
///
/// let foo: &dyn Map = &BTreeMap::from([(String::from("k"), 123_u32)]);
/// assert_eq!(foo.len(), 1);
/// assert!(foo.key_type().is::<String>());
///
/// let field: &dyn Reflect = foo.get(&String::from("k")).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
///
/// // a key of another type is never found
/// assert!(foo.get(&"k").is_none());
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns the declared type of the keys.
    fn key_type(&self) -> Type;

    /// Returns a reference to the value associated with the given key.
    ///
    /// If no value is associated with `key`, returns `None`.
    fn get(&self, key: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value associated with the given key.
    ///
    /// If no value is associated with `key`, returns `None`.
    fn get_mut(&mut self, key: &dyn Reflect) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn Reflect, &dyn Reflect)> + '_>;
}
