//! Derive macro for `jpath_reflect::Reflect`.
//!
//! See [`Reflect`](derive_reflect).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Reflect` and, depending on the shape of
/// the type, `Struct`:
///
/// - `struct T { .. }`: a `Struct` addressed by field name.
/// - `struct T(..);`: a `Struct` whose field names are `"0"`, `"1"`, ...
/// - `struct T;` and every `enum`: `Opaque`, a leaf that paths cannot descend into.
///
/// Every reflected field must itself implement `Reflect`.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` turns a struct into a leaf even if it has fields.
/// The macro then never looks at the fields, so they need not be `Reflect`.
///
/// ```rust
/// use jpath_reflect::derive::Reflect;
/// use jpath_reflect::access::ReflectPathAccess;
///
/// #[derive(Reflect)]
/// #[reflect(opaque)]
/// struct Secret { handle: std::sync::Mutex<u8> }
///
/// let secret = Secret { handle: std::sync::Mutex::new(0) };
/// assert!(secret.query("handle").unwrap_err().is_not_found());
/// ```
///
/// ## Standard Traits
///
/// The macro cannot see whether a type implements `Debug` or `PartialEq`.
/// Declare them to let `reflect_debug` and `reflect_partial_eq` use them
/// instead of the field-by-field defaults:
///
/// ```rust
/// use jpath_reflect::Reflect;
/// use jpath_reflect::derive::Reflect;
///
/// #[derive(Reflect, Debug, PartialEq)]
/// #[reflect(debug, partial_eq)]
/// enum Mode { Fast, Slow }
///
/// let mode: &dyn Reflect = &Mode::Fast;
/// assert_eq!(mode.reflect_partial_eq(&Mode::Fast), Some(true));
/// assert_eq!(mode.reflect_partial_eq(&Mode::Slow), Some(false));
/// assert_eq!(format!("{mode:?}"), "Fast");
/// ```
///
/// These attributes can only be applied at the type level.
///
/// ## ignore
///
/// `#[reflect(ignore)]` hides a field from reflection: it cannot be
/// addressed by a path and is skipped by `field_len`, debug output and
/// structural equality. The field type need not be `Reflect`, but the
/// struct as a whole must still be `Send + Sync + 'static`.
///
/// ```rust
/// use jpath_reflect::derive::Reflect;
/// use jpath_reflect::access::ReflectPathAccess;
///
/// #[derive(Reflect)]
/// struct Cache {
///     hits: u64,
///     #[reflect(ignore)]
///     scratch: std::sync::Mutex<Vec<u8>>,
/// }
///
/// let cache = Cache { hits: 3, scratch: Default::default() };
/// assert_eq!(*cache.query_as::<u64>("hits").unwrap(), 3);
/// assert!(cache.query("scratch").unwrap_err().is_not_found());
/// ```
///
/// This attribute can only be used on fields.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
