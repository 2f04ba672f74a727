//! Provide `path` interface for path accessing.

use alloc::borrow::Cow;
use core::fmt;

// -----------------------------------------------------------------------------
// Segment

/// One step of a path, with its position in the original path string.
///
/// How a segment is interpreted depends only on the shape of the value it
/// is applied to: a field name for structs, an index for lists, a key for
/// maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    name: Cow<'a, str>,
    offset: usize,
}

impl<'a> Segment<'a> {
    /// Creates a segment named `name`, found at byte `offset` of its path.
    #[inline]
    pub fn new(name: impl Into<Cow<'a, str>>, offset: usize) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub(crate) fn name_cow(&self) -> Cow<'a, str> {
        self.name.clone()
    }

    /// Byte offset of the segment in the path it was split from.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Converts the segment into one that does not borrow the path.
    pub fn into_owned(self) -> Segment<'static> {
        Segment {
            name: Cow::Owned(self.name.into_owned()),
            offset: self.offset,
        }
    }
}

impl fmt::Display for Segment<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// -----------------------------------------------------------------------------
// AccessPath

/// An interface where the type implementing this trait can be considered
/// as a "Path" for path access.
///
/// This crate provides the implementation for [`&str`]: segments are
/// separated by `/`, empty segments are skipped and there is no escaping.
/// So `"/T2//G2/"` has the two segments `T2` and `G2`, and `""` has none.
///
/// ```
/// use jpath_reflect::access::AccessPath;
///
/// let names: Vec<_> = "/T2//G2/".segments().map(|s| (s.name().to_owned(), s.offset())).collect();
/// assert_eq!(names, [("T2".to_owned(), 1), ("G2".to_owned(), 5)]);
///
/// assert_eq!("//".segments().count(), 0);
/// ```
///
/// [`&str`]: str
pub trait AccessPath<'a> {
    /// Splits the path into its non-empty segments, in order.
    fn segments(&self) -> impl Iterator<Item = Segment<'a>>;
}

impl<'a> AccessPath<'a> for &'a str {
    fn segments(&self) -> impl Iterator<Item = Segment<'a>> {
        let path: &'a str = self;
        let mut offset = 0;
        path.split('/').filter_map(move |name| {
            let start = offset;
            offset += name.len() + 1;
            (!name.is_empty()).then(|| Segment::new(name, start))
        })
    }
}
