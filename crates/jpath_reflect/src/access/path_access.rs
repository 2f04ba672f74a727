//! Provide multi-layer path accessing support

use alloc::boxed::Box;
use core::borrow::Borrow;
use core::fmt;

use fastvec::FastVec;

use crate::Reflect;
use crate::access::accessor::Location;
use crate::access::{
    AccessError, AccessPath, AssignError, Operation, PathAccessError, PathAccessErrorCause,
    Segment,
};
use crate::convert::convert;
use crate::info::ReflectKind;
use crate::ops::{List, Map, ReflectMut, Struct};

// -----------------------------------------------------------------------------
// Resolution

fn navigate<'r, 'a, S: Borrow<Segment<'a>>>(
    base: &'r dyn Reflect,
    segments: impl IntoIterator<Item = S>,
) -> Result<&'r dyn Reflect, AccessError<'a>> {
    let mut it = base;
    for segment in segments {
        let segment: &Segment<'a> = segment.borrow();
        it = segment.access(it)?;
    }
    Ok(it)
}

fn navigate_mut<'r, 'a, S: Borrow<Segment<'a>>>(
    base: &'r mut dyn Reflect,
    segments: impl IntoIterator<Item = S>,
) -> Result<Location<'r>, AccessError<'a>> {
    let mut it = Location::root(base);
    for segment in segments {
        let segment: &Segment<'a> = segment.borrow();
        it = segment.access_mut(it)?;
    }
    Ok(it)
}

fn downcast<T: Reflect>(value: &dyn Reflect) -> Result<&T, PathAccessErrorCause<'static>> {
    match value.downcast_ref::<T>() {
        Some(value) => Ok(value),
        None => Err(PathAccessErrorCause::InvalidDowncast {
            found: value.reflect_type_path(),
            expected: core::any::type_name::<T>(),
        }),
    }
}

/// Writes `value` into a resolved location.
///
/// A terminal reference is dereferenced one level, so that assigning to an
/// `Option<i32>` holding `Some` writes the `i32`.
fn write(location: Location<'_>, value: Box<dyn Reflect>) -> Result<(), AssignError> {
    let Location {
        value: mut target,
        mut addressable,
    } = location;

    if target.reflect_kind() == ReflectKind::Reference {
        let type_path = target.reflect_type_path();
        let ReflectMut::Reference(reference) = target.reflect_mut() else {
            log::debug!("rejected assign: `{type_path}` reports a reference but is not one");
            return Err(AssignError::NotSettable { type_path });
        };
        target = match reference.target_mut() {
            Some(pointee) => pointee,
            None => {
                log::debug!("rejected assign: `{type_path}` is a null reference");
                return Err(AssignError::NotSettable { type_path });
            }
        };
        addressable = true;
    }

    if !addressable {
        log::debug!(
            "rejected assign: `{}` was reached through a map entry",
            target.reflect_type_path()
        );
        return Err(AssignError::MapEntry);
    }

    let ty = target.reflect_type();
    let value = convert(value, ty).map_err(|value| {
        let from = value.reflect_type_path();
        log::debug!("rejected assign: cannot convert `{from}` to `{ty}`");
        AssignError::Conversion { from, to: ty.path() }
    })?;

    // `convert` returned a value of exactly `ty`, so `set` accepts it.
    target.set(value).map_err(|value| AssignError::Conversion {
        from: value.reflect_type_path(),
        to: ty.path(),
    })?;

    log::trace!("assigned value of type `{ty}`");
    Ok(())
}

fn assign_segments<'a, S: Borrow<Segment<'a>>>(
    root: &mut dyn Reflect,
    segments: impl IntoIterator<Item = S>,
    value: Box<dyn Reflect>,
) -> Result<(), PathAccessError<'a>> {
    let location = navigate_mut(root, segments)
        .map_err(|err| PathAccessError::access(Operation::Assign, err))?;
    write(location, value).map_err(PathAccessError::assign)
}

// -----------------------------------------------------------------------------
// Reusable Multi-layer accessor

/// Reusable path accessor, a thin wrapper over `Box<[Segment]>`.
///
/// Unlike [`ReflectPathAccess`], this container splits the path only once.
/// For non-static strings, the segments are copied for storage.
///
/// # Examples
///
/// ```
/// use jpath_reflect::{derive::Reflect, access::PathAccessor};
///
/// #[derive(Reflect)]
/// struct Foo {
///     id: u32,
///     data: Vec<u8>,
/// }
///
/// let mut foo = Foo { id: 1, data: vec![1, 2, 3, 4] };
///
/// let accessor = PathAccessor::parse_static("data/3");
/// assert_eq!(*accessor.query_as::<u8>(&foo).unwrap(), 4);
///
/// foo.data = vec![10, 11, 12, 13];
/// assert_eq!(*accessor.query_as::<u8>(&foo).unwrap(), 13);
///
/// accessor.assign(&mut foo, 20_u64).unwrap();
/// assert_eq!(foo.data[3], 20);
/// ```
#[expect(
    clippy::len_without_is_empty,
    reason = "an empty accessor is valid and addresses the root"
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAccessor(Box<[Segment<'static>]>);

impl PathAccessor {
    /// Splits the path and creates a [`PathAccessor`].
    ///
    /// Every segment is copied into a `String`. For `&'static str`,
    /// consider using [`parse_static`](Self::parse_static).
    ///
    /// ```
    /// # use jpath_reflect::access::PathAccessor;
    /// let s = String::from("T2//S1/1");
    /// let accessor = PathAccessor::parse(s.as_str());
    /// assert_eq!(accessor.to_string(), "T2/S1/1");
    /// ```
    pub fn parse<'a>(path: impl AccessPath<'a>) -> Self {
        let mut vec: FastVec<Segment, 8> = FastVec::new();
        let data = vec.get();

        for segment in path.segments() {
            data.push(segment.into_owned());
        }

        Self(vec.into_boxed_slice())
    }

    /// Splits the path and creates a [`PathAccessor`] that borrows the
    /// segment names instead of copying them.
    pub fn parse_static(path: impl AccessPath<'static>) -> Self {
        let mut vec: FastVec<Segment, 8> = FastVec::new();
        let data = vec.get();

        for segment in path.segments() {
            data.push(segment);
        }

        Self(vec.into_boxed_slice())
    }

    /// Returns the number of segments.
    ///
    /// ```
    /// # use jpath_reflect::access::PathAccessor;
    /// assert_eq!(PathAccessor::parse_static("/a/b//c/").len(), 3);
    /// assert_eq!(PathAccessor::parse_static("").len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment<'static>] {
        &self.0
    }

    /// Returns a reference to the value specified by the path.
    ///
    /// The accessor itself will not change and can be reused.
    pub fn query<'r>(&self, base: &'r dyn Reflect) -> Result<&'r dyn Reflect, PathAccessError<'static>> {
        navigate(base, self.0.iter()).map_err(|err| PathAccessError::access(Operation::Query, err))
    }

    /// Returns a typed reference to the value specified by the path.
    #[inline]
    pub fn query_as<'r, T: Reflect>(&self, base: &'r dyn Reflect) -> Result<&'r T, PathAccessError<'static>> {
        let it = self.query(base)?;
        downcast(it).map_err(|cause| PathAccessError::new(Operation::Query, cause))
    }

    /// Converts `value` to the type of the location and writes it there.
    #[inline]
    pub fn assign(&self, root: &mut dyn Reflect, value: impl Reflect) -> Result<(), PathAccessError<'static>> {
        self.assign_boxed(root, value.into_boxed_reflect())
    }

    /// Boxed version of [`PathAccessor::assign`].
    pub fn assign_boxed(
        &self,
        root: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError<'static>> {
        assign_segments(root, self.0.iter(), value)
    }

    /// Concat two `PathAccessor`.
    ///
    /// Note that this will not modify the `offset`,
    /// so the error message may not be as expected.
    ///
    /// ```
    /// # use jpath_reflect::access::PathAccessor;
    /// let a1 = PathAccessor::parse_static("T2/S2");
    /// let a2 = PathAccessor::parse_static("1/H1");
    /// let a = a1.concat(a2);
    /// assert_eq!(a.len(), 4);
    /// assert_eq!(a.to_string(), "T2/S2/1/H1");
    /// ```
    pub fn concat(self, other: PathAccessor) -> Self {
        let mut vec: FastVec<Segment, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }
}

impl fmt::Display for PathAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Trait for once multi-layer accessing

/// Provide a single full path access method.
///
/// This splits the path during access, and even if it is not a static
/// string, it does not need to be copied to a `String`.
///
/// If a path needs to be reused, consider using [`PathAccessor`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use jpath_reflect::{derive::Reflect, access::ReflectPathAccess};
///
/// #[derive(Reflect)]
/// struct Foo {
///     id: u32,
///     tags: BTreeMap<String, Vec<u8>>,
/// }
///
/// let mut foo = Foo {
///     id: 1,
///     tags: BTreeMap::from([("a".to_owned(), vec![1, 2, 3])]),
/// };
///
/// let val = foo.query_as::<u8>("tags/a/1").unwrap();
/// assert_eq!(*val, 2);
///
/// foo.assign("id", 7_u8).unwrap();
/// assert_eq!(foo.id, 7);
///
/// // values inside a map entry cannot be written
/// assert!(foo.assign("tags/a/1", 5_u8).unwrap_err().is_unsupported());
/// ```
pub trait ReflectPathAccess {
    /// Returns a reference to the value specified by `path`.
    ///
    /// See [`ReflectPathAccess`]
    fn query<'r, 'p>(&'r self, path: impl AccessPath<'p>) -> Result<&'r dyn Reflect, PathAccessError<'p>>;

    /// Returns a typed reference to the value specified by `path`.
    ///
    /// See [`ReflectPathAccess`]
    fn query_as<'r, 'p, T: Reflect>(&'r self, path: impl AccessPath<'p>) -> Result<&'r T, PathAccessError<'p>>;

    /// Converts `value` to the type of the location specified by `path`
    /// and writes it there. Nothing changes when an error is returned.
    ///
    /// See [`ReflectPathAccess`]
    fn assign<'p>(&mut self, path: impl AccessPath<'p>, value: impl Reflect) -> Result<(), PathAccessError<'p>>;

    /// Boxed version of [`ReflectPathAccess::assign`].
    fn assign_boxed<'p>(
        &mut self,
        path: impl AccessPath<'p>,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError<'p>>;
}

impl ReflectPathAccess for dyn Reflect {
    #[inline(never)]
    fn query<'r, 'p>(&'r self, path: impl AccessPath<'p>) -> Result<&'r dyn Reflect, PathAccessError<'p>> {
        navigate(self, path.segments()).map_err(|err| PathAccessError::access(Operation::Query, err))
    }

    #[inline]
    fn query_as<'r, 'p, T: Reflect>(&'r self, path: impl AccessPath<'p>) -> Result<&'r T, PathAccessError<'p>> {
        // `query` is compiled once per path type, independent of T.
        let it = ReflectPathAccess::query(self, path)?;
        downcast(it).map_err(|cause| PathAccessError::new(Operation::Query, cause))
    }

    #[inline]
    fn assign<'p>(&mut self, path: impl AccessPath<'p>, value: impl Reflect) -> Result<(), PathAccessError<'p>> {
        ReflectPathAccess::assign_boxed(self, path, value.into_boxed_reflect())
    }

    #[inline(never)]
    fn assign_boxed<'p>(
        &mut self,
        path: impl AccessPath<'p>,
        value: Box<dyn Reflect>,
    ) -> Result<(), PathAccessError<'p>> {
        assign_segments(self, path.segments(), value)
    }
}

// -----------------------------------------------------------------------------
// Implemention for reflect type

macro_rules! impl_reflect_path_access {
    () => {
        #[inline(always)]
        fn query<'r, 'p>(&'r self, path: impl AccessPath<'p>) -> Result<&'r dyn Reflect, PathAccessError<'p>> {
            <dyn Reflect as ReflectPathAccess>::query(self, path)
        }

        #[inline(always)]
        fn query_as<'r, 'p, T: Reflect>(&'r self, path: impl AccessPath<'p>) -> Result<&'r T, PathAccessError<'p>> {
            <dyn Reflect as ReflectPathAccess>::query_as::<T>(self, path)
        }

        #[inline(always)]
        fn assign<'p>(&mut self, path: impl AccessPath<'p>, value: impl Reflect) -> Result<(), PathAccessError<'p>> {
            <dyn Reflect as ReflectPathAccess>::assign(self, path, value)
        }

        #[inline(always)]
        fn assign_boxed<'p>(
            &mut self,
            path: impl AccessPath<'p>,
            value: Box<dyn Reflect>,
        ) -> Result<(), PathAccessError<'p>> {
            <dyn Reflect as ReflectPathAccess>::assign_boxed(self, path, value)
        }
    };
    (dyn $name:ident) => {
        impl ReflectPathAccess for dyn $name {
            impl_reflect_path_access!();
        }
    };
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectPathAccess for P {
            impl_reflect_path_access!();
        }
    };
}

impl_reflect_path_access!(T: Reflect);

impl_reflect_path_access!(dyn Struct);
impl_reflect_path_access!(dyn List);
impl_reflect_path_access!(dyn Map);

// -----------------------------------------------------------------------------
// Free functions

/// Returns a reference to the value specified by `path`.
///
/// ```
/// use jpath_reflect::access::query;
///
/// let data = vec![vec![1_u8], vec![2, 3]];
/// let val = query(&data, "1/0").unwrap();
/// assert_eq!(val.downcast_ref::<u8>(), Some(&2));
///
/// // the empty path addresses the value itself
/// assert!(query(&data, "//").unwrap().is::<Vec<Vec<u8>>>());
/// ```
#[inline]
pub fn query<'r, 'p>(value: &'r dyn Reflect, path: impl AccessPath<'p>) -> Result<&'r dyn Reflect, PathAccessError<'p>> {
    value.query(path)
}

/// Converts `value` to the type of the location specified by `path` and
/// writes it there.
///
/// ```
/// use jpath_reflect::access::{assign, ErrorKind};
///
/// let mut data = vec![1.5_f64, 2.5];
/// assign(&mut data, "1", 4_i32).unwrap();
/// assert_eq!(data, [1.5, 4.0]);
///
/// let err = assign(&mut data, "0", "text").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BadArgument);
/// assert_eq!(data, [1.5, 4.0]);
/// ```
#[inline]
pub fn assign<'p>(root: &mut dyn Reflect, path: impl AccessPath<'p>, value: impl Reflect) -> Result<(), PathAccessError<'p>> {
    root.assign(path, value)
}

/// Boxed version of [`assign`].
#[inline]
pub fn assign_boxed<'p>(
    root: &mut dyn Reflect,
    path: impl AccessPath<'p>,
    value: Box<dyn Reflect>,
) -> Result<(), PathAccessError<'p>> {
    root.assign_boxed(path, value)
}

#[cfg(test)]
mod tests {
    use alloc::borrow::ToOwned;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicU8, Ordering};

    use super::{PathAccessor, ReflectPathAccess, assign, assign_boxed, query};
    use crate::Reflect;
    use crate::access::{AccessErrorKind, AssignError, ErrorKind, Operation, PathAccessErrorCause};
    use crate::derive::Reflect;
    use crate::info::ReflectKind;
    use crate::ops::{ReflectMut, ReflectRef};

    #[derive(Reflect, Debug, PartialEq)]
    struct Inner {
        name: String,
        count: i32,
        limit: Option<u8>,
    }

    #[derive(Reflect)]
    struct Outer {
        inner: Inner,
        items: Vec<Inner>,
        table: BTreeMap<String, Inner>,
        boxed: Box<Inner>,
        by_id: BTreeMap<u32, u8>,
    }

    fn inner(name: &str, count: i32) -> Inner {
        Inner {
            name: name.to_owned(),
            count,
            limit: None,
        }
    }

    fn outer() -> Outer {
        Outer {
            inner: inner("a", 1),
            items: vec![inner("b", 2), inner("c", 3)],
            table: BTreeMap::from([("k".to_owned(), inner("d", 4))]),
            boxed: Box::new(inner("e", 5)),
            by_id: BTreeMap::from([(1, 1)]),
        }
    }

    fn cause_of(err: &super::PathAccessError<'_>) -> AccessErrorKind {
        match err.cause() {
            PathAccessErrorCause::Access(err) => err.kind(),
            other => panic!("not an access error: {other:?}"),
        }
    }

    #[test]
    fn query_each_shape() {
        let v = outer();
        assert_eq!(v.query_as::<i32>("inner/count").unwrap(), &1);
        assert_eq!(v.query_as::<String>("items/1/name").unwrap(), "c");
        assert_eq!(v.query_as::<i32>("table/k/count").unwrap(), &4);
        assert_eq!(v.query_as::<i32>("boxed/count").unwrap(), &5);
    }

    #[test]
    fn query_failures() {
        let v = outer();

        let err = v.query("inner/missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.operation(), Operation::Query);
        assert_eq!(cause_of(&err), AccessErrorKind::MissingField);

        assert_eq!(cause_of(&v.query("items/-1").unwrap_err()), AccessErrorKind::NegativeIndex);
        assert_eq!(cause_of(&v.query("items/one").unwrap_err()), AccessErrorKind::InvalidIndex);
        assert_eq!(
            cause_of(&v.query("items/2").unwrap_err()),
            AccessErrorKind::IndexOutOfRange { len: 2 }
        );
        assert!(v.query("items/2").unwrap_err().is_bad_argument());

        assert_eq!(cause_of(&v.query("table/x").unwrap_err()), AccessErrorKind::MissingKey);
        assert!(v.query("by_id/1").unwrap_err().is_unsupported());

        let err = v.query("inner/count/deeper").unwrap_err();
        assert_eq!(cause_of(&err), AccessErrorKind::UnsupportedShape(ReflectKind::Opaque));
        assert!(err.is_not_found());

        assert!(v.query("inner/limit/0").unwrap_err().is_not_found());
    }

    #[test]
    fn error_points_at_the_segment() {
        let v = outer();
        let err = v.query("/items//7/name").unwrap_err();
        let PathAccessErrorCause::Access(access) = err.cause() else {
            panic!("expected an access error");
        };
        assert_eq!(access.segment(), "7");
        assert_eq!(access.offset(), 8);
        assert_eq!(access.type_path(), core::any::type_name::<Vec<Inner>>());
        assert_eq!(
            err.to_string(),
            alloc::format!(
                "query: index out of range (length 2): segment `7` at offset 8 of `{}`",
                core::any::type_name::<Vec<Inner>>()
            )
        );
    }

    #[test]
    fn empty_path_is_the_root() {
        let v = outer();
        for path in ["", "/", "///"] {
            let it = v.query(path).unwrap();
            assert!(core::ptr::eq(it.downcast_ref::<Outer>().unwrap(), &v));
        }
    }

    #[test]
    fn query_composes() {
        let v = outer();
        let whole = v.query("items/1/count").unwrap();
        let step = v.query("items").unwrap().query("1/count").unwrap();
        assert!(core::ptr::addr_eq(whole, step));
    }

    #[test]
    fn query_is_idempotent() {
        let v = outer();

        let first = v.query("table/k/name").unwrap();
        let second = v.query("table/k/name").unwrap();
        assert!(core::ptr::addr_eq(first, second));
        assert_eq!(first.downcast_ref::<String>().unwrap(), "d");

        assert_eq!(v.query("items/9").unwrap_err(), v.query("items/9").unwrap_err());

        assert_eq!(v.inner, inner("a", 1));
        assert_eq!(v.items, [inner("b", 2), inner("c", 3)]);
        assert_eq!(v.table["k"], inner("d", 4));
    }

    #[test]
    fn query_as_checks_the_type() {
        let v = outer();
        let err = v.query_as::<u8>("inner/count").unwrap_err();
        assert!(err.is_bad_argument());
        assert_eq!(
            err.cause(),
            &PathAccessErrorCause::InvalidDowncast {
                found: "i32",
                expected: "u8"
            }
        );
    }

    #[test]
    fn assign_round_trip() {
        let mut v = outer();

        v.assign("inner/count", 10_i64).unwrap();
        assert_eq!(v.inner.count, 10);

        v.assign("items/0/name", 'z').unwrap();
        assert_eq!(v.items[0].name, "z");

        v.assign("boxed/name", "boxed").unwrap();
        assert_eq!(v.boxed.name, "boxed");

        v.assign("items/1", inner("x", 9)).unwrap();
        assert_eq!(v.items[1], inner("x", 9));
        assert_eq!(v.query_as::<i32>("items/1/count").unwrap(), &9);
    }

    #[test]
    fn assign_to_references() {
        let mut v = outer();

        let err = v.assign("inner/limit", 3_u8).unwrap_err();
        assert_eq!(
            err.cause(),
            &PathAccessErrorCause::Assign(AssignError::NotSettable {
                type_path: "core::option::Option<u8>"
            })
        );
        assert!(err.is_bad_argument());

        v.inner.limit = Some(1);
        v.assign("inner/limit", 3_i32).unwrap();
        assert_eq!(v.inner.limit, Some(3));
    }

    #[test]
    fn assign_through_map_entries_fails() {
        let mut v = outer();

        let err = v.assign("table/k/count", 1_i32).unwrap_err();
        assert_eq!(err.cause(), &PathAccessErrorCause::Assign(AssignError::MapEntry));
        assert_eq!(err.operation(), Operation::Assign);

        assert!(v.assign("table/k", inner("y", 0)).unwrap_err().is_unsupported());
        assert!(v.assign("table/missing", inner("y", 0)).is_err());
        assert_eq!(v.table["k"], inner("d", 4));
    }

    #[test]
    fn failed_assign_changes_nothing() {
        let mut v = outer();

        let err = v.assign("inner/count", 1.5_f64).unwrap_err();
        assert_eq!(
            err.cause(),
            &PathAccessErrorCause::Assign(AssignError::Conversion { from: "f64", to: "i32" })
        );
        assert!(v.assign("inner/count", i64::MAX).is_err());
        assert!(v.assign("inner/nope", 1_i32).unwrap_err().is_not_found());
        assert_eq!(v.inner, inner("a", 1));
    }

    #[test]
    fn free_functions() {
        let mut data = vec![1_u8, 2];
        assign(&mut data, "0", 5_u16).unwrap();
        assign_boxed(&mut data, "1", Box::new(6_u32)).unwrap();
        assert_eq!(data, [5, 6]);
        assert_eq!(query(&data, "1").unwrap().downcast_ref::<u8>(), Some(&6));

        let boxed: Box<dyn Reflect> = Box::new(data);
        assert_eq!(boxed.query_as::<u8>("0").unwrap(), &5);
    }

    #[test]
    fn path_accessor_is_reusable() {
        let mut v = outer();
        let path = "items/0/count".to_owned();
        let accessor = PathAccessor::parse(path.as_str());
        drop(path);

        assert_eq!(accessor.len(), 3);
        assert_eq!(accessor.query_as::<i32>(&v).unwrap(), &2);

        accessor.assign(&mut v, 20_u8).unwrap();
        assert_eq!(accessor.query_as::<i32>(&v).unwrap(), &20);

        v.items.clear();
        let err = accessor.query(&v).unwrap_err();
        assert_eq!(cause_of(&err), AccessErrorKind::IndexOutOfRange { len: 0 });
    }

    #[test]
    fn path_accessor_display_and_concat() {
        let accessor = PathAccessor::parse_static("/items//1/");
        assert_eq!(accessor.to_string(), "items/1");
        let names: Vec<&str> = accessor.segments().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["items", "1"]);

        let full = accessor.concat(PathAccessor::parse_static("name"));
        assert_eq!(full.to_string(), "items/1/name");
        assert_eq!(full.query_as::<String>(&outer()).unwrap(), "c");

        assert_eq!(PathAccessor::parse_static("").to_string(), "");
    }

    #[test]
    fn map_entries_stay_read_only_below_the_entry() {
        let mut lists = BTreeMap::from([("k".to_owned(), vec![1_i32, 2])]);
        let err = lists.assign("k/0", 9_i32).unwrap_err();
        assert_eq!(err.cause(), &PathAccessErrorCause::Assign(AssignError::MapEntry));
        assert_eq!(lists["k"], [1, 2]);

        // a box owns its pointee outside the map
        let mut boxes = BTreeMap::from([("b".to_owned(), Box::new(inner("f", 6)))]);
        boxes.assign("b/count", 7_i32).unwrap();
        assert_eq!(boxes["b"].count, 7);
    }

    /// Reports a reference but hands out an opaque view.
    struct Inconsistent(u8);

    impl Reflect for Inconsistent {
        fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Reference
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Opaque(self)
        }
    }

    #[test]
    fn inconsistent_impls_are_errors() {
        let mut value = Inconsistent(1);

        let err = value.assign("", 2_u8).unwrap_err();
        assert_eq!(
            err.cause(),
            &PathAccessErrorCause::Assign(AssignError::NotSettable {
                type_path: core::any::type_name::<Inconsistent>()
            })
        );

        let err = value.assign("x", 2_u8).unwrap_err();
        assert_eq!(cause_of(&err), AccessErrorKind::UnsupportedShape(ReflectKind::Reference));
        assert_eq!(value.0, 1);
    }

    // -------------------------------------------------------------------------
    // derive attributes

    #[derive(Reflect)]
    #[reflect(opaque)]
    struct Handle {
        counter: AtomicU8,
    }

    #[derive(Reflect)]
    struct Pair(u8, #[reflect(ignore)] AtomicU8, String);

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(debug, partial_eq)]
    enum Mode {
        Fast,
        Slow,
    }

    #[derive(Reflect)]
    struct Settings {
        handle: Handle,
        pair: Pair,
        mode: Mode,
        #[reflect(ignore)]
        scratch: AtomicU8,
    }

    fn settings() -> Settings {
        Settings {
            handle: Handle {
                counter: AtomicU8::new(1),
            },
            pair: Pair(7, AtomicU8::new(0), "two".to_owned()),
            mode: Mode::Fast,
            scratch: AtomicU8::new(0),
        }
    }

    #[test]
    fn opaque_structs_are_leaves() {
        let s = settings();

        assert_eq!(s.query("handle").unwrap().reflect_kind(), ReflectKind::Opaque);

        let err = s.query("handle/counter").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(cause_of(&err), AccessErrorKind::UnsupportedShape(ReflectKind::Opaque));
        assert_eq!(s.handle.counter.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn ignored_fields_are_not_addressable() {
        let s = settings();

        assert_eq!(cause_of(&s.query("scratch").unwrap_err()), AccessErrorKind::MissingField);
        assert_eq!(cause_of(&s.query("pair/1").unwrap_err()), AccessErrorKind::MissingField);
        assert_eq!(s.scratch.load(Ordering::Relaxed), 0);
        assert_eq!(s.pair.1.load(Ordering::Relaxed), 0);

        // tuple fields keep their position as name
        assert_eq!(s.query_as::<u8>("pair/0").unwrap(), &7);
        assert_eq!(s.query_as::<String>("pair/2").unwrap(), "two");

        let pair = s.query("pair").unwrap().reflect_ref().as_struct().unwrap();
        assert_eq!(pair.field_len(), 2);
        assert_eq!(pair.name_at(1), Some("2"));

        let fields = s.query("").unwrap().reflect_ref().as_struct().unwrap();
        assert_eq!(fields.field_len(), 3);
    }

    #[test]
    fn enums_are_opaque_with_std_traits() {
        let mut s = settings();

        let mode = s.query("mode").unwrap();
        assert_eq!(mode.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(mode.reflect_partial_eq(&Mode::Fast), Some(true));
        assert_eq!(mode.reflect_partial_eq(&Mode::Slow), Some(false));
        assert_eq!(mode.reflect_partial_eq(&1_u8), Some(false));
        assert_eq!(alloc::format!("{mode:?}"), "Fast");

        s.assign("mode", Mode::Slow).unwrap();
        assert_eq!(s.mode, Mode::Slow);

        assert!(s.assign("mode", 1_u8).unwrap_err().is_bad_argument());
        assert_eq!(s.mode, Mode::Slow);
    }
}
