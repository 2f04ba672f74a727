#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use jpath_reflect as reflect;

pub use jpath_reflect::Reflect;
pub use jpath_reflect::derive;

pub use jpath_reflect::access::{
    ErrorKind, Operation, PathAccessError, PathAccessor, ReflectPathAccess, assign,
    assign_boxed, query,
};
