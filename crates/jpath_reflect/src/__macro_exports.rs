//! Items referred to by code generated from `#[derive(Reflect)]`.
//!
//! Generated code cannot assume the caller's prelude, so it goes through
//! these re-exports instead.

pub use alloc::boxed::Box;
pub use core::option::Option;
pub use core::result::Result;
