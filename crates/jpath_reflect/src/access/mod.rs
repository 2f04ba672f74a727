//! Provide path-based access helpers for reflected data.
//!
//! A path is a `/`-separated list of segments, such as `T2/S2/1/M1/cats`.
//! Empty segments are skipped, so `/T2//S1/` is the same path as `T2/S1`,
//! and the empty path addresses the value itself. There is no escaping.
//!
//! Each segment is interpreted by the shape of the value it is applied to:
//!
//! - struct: the exact, case-sensitive field name.
//! - list: a base-10 index, which must be non-negative and in range.
//! - map: a key, for maps whose key type is a string type.
//! - reference: followed first, then the segment applies to the pointee.
//!   A null reference cannot be followed.
//! - opaque: nothing, no segment can descend into a leaf.
//!
//! Two complementary APIs are exposed:
//!
//! - [`ReflectPathAccess`]: implemented for every [`Reflect`] type, splits the
//!   path on each call. Suitable for one-off lookups.
//! - [`PathAccessor`]: a split, reusable path for repeated access.
//!
//! Writing goes through `assign`, which converts the new value to the
//! declared type of the location (see [`convert`](crate::convert)) and
//! refuses to write into map entries, see [`AssignError`].
//!
//! Map entries stay read-only all the way down: a field or a list element
//! of a value stored in a map is not writable either, so `lists/k/0` on a
//! `BTreeMap<String, Vec<i32>>` is rejected as unsupported. Only a
//! reference below the entry, such as a `Box`, makes its pointee writable
//! again, because the pointee has its own place outside the map.
//!
//! # Examples
//!
//! `ReflectPathAccess`:
//!
//! ```
//! use jpath_reflect::{derive::Reflect, access::ReflectPathAccess};
//!
//! #[derive(Reflect)]
//! struct Foo { id: u32, data: Vec<Option<u8>> }
//!
//! let mut foo = Foo { id: 1, data: vec![Some(1), None, Some(3)] };
//!
//! // references are followed transparently
//! assert_eq!(*foo.query_as::<u8>("data/2").unwrap(), 3);
//! assert!(foo.query("data/1/x").unwrap_err().is_not_found());
//!
//! foo.assign("data/0", 9_i64).unwrap();
//! assert_eq!(foo.data[0], Some(9));
//! ```
//!
//! `PathAccessor`:
//!
//! ```
//! use jpath_reflect::{derive::Reflect, access::PathAccessor};
//!
//! #[derive(Reflect)]
//! struct Foo { id: u32, data: Vec<u8> }
//!
//! let mut foo = Foo { id: 1, data: vec![0, 1, 2, 3] };
//! let accessor = PathAccessor::parse_static("data/3");
//!
//! assert_eq!(*accessor.query_as::<u8>(&foo).unwrap(), 3);
//!
//! foo.data = vec![10, 11, 12, 13];
//!
//! // reuse
//! assert_eq!(*accessor.query_as::<u8>(&foo).unwrap(), 13);
//! ```
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod path;
mod path_access;

// -----------------------------------------------------------------------------
// Exports

pub use error::{
    AccessError, AccessErrorKind, AssignError, ErrorKind, Operation, PathAccessError,
    PathAccessErrorCause,
};
pub use path::{AccessPath, Segment};
pub use path_access::{PathAccessor, ReflectPathAccess, assign, assign_boxed, query};
