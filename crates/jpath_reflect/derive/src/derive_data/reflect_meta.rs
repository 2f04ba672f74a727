use syn::{Generics, Ident, ImplGenerics, Type, TypeGenerics, WhereClause, parse_quote};

use crate::derive_data::TypeAttributes;

/// Type-level data shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: Generics,
    reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &Generics) -> Self {
        let mut generics = generics.clone();
        // `Reflect: Any + Send + Sync`
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(::core::marker::Send));
            param.bounds.push(parse_quote!(::core::marker::Sync));
            param.bounds.push(parse_quote!('static));
        }

        Self {
            attrs,
            ident,
            generics,
            reflect_path: crate::path::jpath_reflect(),
        }
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn reflect_path(&self) -> &syn::Path {
        &self.reflect_path
    }

    /// Requires every type in `bounded` to implement `Reflect`.
    pub(crate) fn add_reflect_bounds<'t>(&mut self, bounded: impl IntoIterator<Item = &'t Type>) {
        let reflect_ = crate::path::reflect_(&self.reflect_path);
        let where_clause = self.generics.make_where_clause();
        for ty in bounded {
            where_clause.predicates.push(parse_quote!(#ty: #reflect_));
        }
    }

    #[inline]
    pub(crate) fn split_generics(&self) -> (ImplGenerics<'_>, TypeGenerics<'_>, Option<&WhereClause>) {
        self.generics.split_for_impl()
    }
}
