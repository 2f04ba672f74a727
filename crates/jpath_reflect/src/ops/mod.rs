//! Provide interfaces for data operation.
//!
//! The following sub-traits of [`Reflect`] give access to the inside of a
//! value, one per [shape](crate::info::ReflectKind):
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`, `A(..)`) .
//! - [`List`]: For list-like (e.g. `Vec<i32>`, `[u8; 4]`) .
//! - [`Map`]: For map-like (e.g. `BTreeMap<String, f32>`) .
//! - [`Reference`]: For nullable indirection (e.g. `Box<T>`, `Option<T>`) .
//!
//! Opaque values have no sub-trait: they can only be compared, printed
//! and replaced as a whole.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod reference_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use reference_ops::Reference;
pub use struct_ops::{Struct, StructFieldIter};
