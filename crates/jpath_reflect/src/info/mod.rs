//! Runtime type information: the shape of a value and its type identity.

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod ty;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectKind, ReflectKindError};
pub use ty::Type;
