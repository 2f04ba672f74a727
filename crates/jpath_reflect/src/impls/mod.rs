//! Reflection for standard types, and the helpers shared by all impls.
//!
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//! - `xxx_partial_eq`: Used to implement [`Reflect::reflect_partial_eq`] (e.g. [`list_partial_eq`]).
//!
//! ## Implemented Menu
//!
//! - Opaque:
//!     - `bool`, `char`, `()`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `String`, `&'static str`, `Cow<'static, str>`, `Box<str>`
//! - List: `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - Map:
//!     - `BTreeMap<K, V>`
//!     - `hashbrown::HashMap<K, V, S>`
//!     - `std::collections::HashMap<K, V, S>` ("std" feature)
//! - Reference: `Box<T>`, `Option<T>`
//!
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq

// -----------------------------------------------------------------------------
// Modules

mod helpers;

mod list;
mod map;
mod opaque;
mod reference;

// -----------------------------------------------------------------------------
// Exports

pub use helpers::{list_debug, list_partial_eq};
pub use helpers::{map_debug, map_partial_eq};
pub use helpers::{reference_debug, reference_partial_eq};
pub use helpers::{struct_debug, struct_partial_eq};
