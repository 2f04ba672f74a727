use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::impl_trait_reflect;

use crate::derive_data::ReflectMeta;

/// Implement reflect for opaque type.
///
/// Without `#[reflect(partial_eq)]` or `#[reflect(debug)]` the defaults of
/// `Reflect` are kept.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let reflect_eq_tokens = get_opaque_partial_eq_impl(meta);
    let reflect_debug_tokens = get_opaque_debug_impl(meta);

    impl_trait_reflect(meta, quote!(Opaque), reflect_eq_tokens, reflect_debug_tokens)
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_opaque_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    let Some(span) = meta.attrs().partial_eq else {
        return TokenStream::new();
    };

    let reflect_path = meta.reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let macro_exports_ = crate::path::macro_exports_(reflect_path);

    quote_spanned! { span =>
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #macro_exports_::Option<bool> {
            if let #macro_exports_::Option::Some(value) = other.downcast_ref::<Self>() {
                return #macro_exports_::Option::Some(<Self as ::core::cmp::PartialEq>::eq(self, value));
            }
            #macro_exports_::Option::Some(false)
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_opaque_debug_impl(meta: &ReflectMeta) -> TokenStream {
    let Some(span) = meta.attrs().debug else {
        return TokenStream::new();
    };

    quote_spanned! { span =>
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            <Self as ::core::fmt::Debug>::fmt(self, f)
        }
    }
}
