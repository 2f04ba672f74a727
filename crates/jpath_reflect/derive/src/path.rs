//! Paths of the items generated code refers to.
//!
//! Kept in one place so that moving an item inside `jpath_reflect`
//! only touches this file.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `jpath_reflect` crate.
///
/// 1. For crates that depend on `jpath_reflect`, `::jpath_reflect` is returned.
/// 2. For crates that depend on `jpath`, `::jpath::reflect` is returned.
/// 3. For other situations, `::jpath_reflect` is returned, but this may be incorrect.
///
/// This reads the caller's manifest, so it is called once per derive.
pub(crate) fn jpath_reflect() -> syn::Path {
    jpath_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jpath_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn macro_exports_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn reflect_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn struct_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::StructFieldIter
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn struct_debug_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::struct_debug
    }
}

#[inline(always)]
pub(crate) fn struct_partial_eq_(reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #reflect_path::impls::struct_partial_eq
    }
}
