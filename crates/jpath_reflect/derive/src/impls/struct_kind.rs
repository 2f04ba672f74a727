use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};

use super::impl_trait_reflect;

use crate::derive_data::{FieldAccessors, ReflectMeta, ReflectStruct};

/// Implement reflect for struct type, named or tuple.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        quote!(Struct),
        get_struct_partial_eq_impl(meta),
        get_struct_debug_impl(meta),
    );

    quote! {
        #struct_trait_tokens

        #reflect_trait_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let reflect_path = meta.reflect_path();
    let struct_ = crate::path::struct_(reflect_path);
    let reflect_ = crate::path::reflect_(reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(reflect_path);
    let option_ = crate::path::macro_exports_(reflect_path);

    let FieldAccessors {
        fields_ref,
        fields_mut,
        field_indices,
        field_names,
        field_count,
    } = FieldAccessors::new(info);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics();

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Option::Some(#fields_ref),)*
                    _ => #option_::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_::Option<&mut dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Option::Some(#fields_mut),)*
                    _ => #option_::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => #option_::Option::Some(#fields_ref),)*
                    _ => #option_::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> #option_::Option<&str> {
                match index {
                    #(#field_indices => #option_::Option::Some(#field_names),)*
                    _ => #option_::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }
        }
    }
}

/// Generate `Reflect::reflect_partial_eq` implementation tokens.
fn get_struct_partial_eq_impl(meta: &ReflectMeta) -> TokenStream {
    let reflect_path = meta.reflect_path();
    let reflect_ = crate::path::reflect_(reflect_path);
    let option_ = crate::path::macro_exports_(reflect_path);

    if let Some(span) = meta.attrs().partial_eq {
        quote_spanned! { span =>
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #option_::Option<bool> {
                if let #option_::Option::Some(value) = other.downcast_ref::<Self>() {
                    return #option_::Option::Some(<Self as ::core::cmp::PartialEq>::eq(self, value));
                }
                #option_::Option::Some(false)
            }
        }
    } else {
        let struct_partial_eq_ = crate::path::struct_partial_eq_(reflect_path);
        quote! {
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #option_::Option<bool> {
                #struct_partial_eq_(self, other)
            }
        }
    }
}

/// Generate `Reflect::reflect_debug` implementation tokens.
fn get_struct_debug_impl(meta: &ReflectMeta) -> TokenStream {
    if let Some(span) = meta.attrs().debug {
        quote_spanned! { span =>
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                <Self as ::core::fmt::Debug>::fmt(self, f)
            }
        }
    } else {
        let struct_debug_ = crate::path::struct_debug_(meta.reflect_path());
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #struct_debug_(self, f)
            }
        }
    }
}
