use syn::{Data, DeriveInput, Fields};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

/// The reflection shape chosen for a derive input.
pub(crate) enum ReflectDerive<'a> {
    /// Named or tuple struct with at least one field.
    Struct(ReflectStruct<'a>),
    /// Unit struct, enum, or `#[reflect(opaque)]` type.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let is_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new_spanned(
                lifetime,
                "`Reflect` requires `'static` types, lifetime parameters are not supported",
            ));
        }

        match &input.data {
            Data::Struct(data) if !is_opaque => match &data.fields {
                Fields::Unit => Ok(Self::Opaque(meta)),
                fields => Ok(Self::Struct(ReflectStruct::new(meta, fields)?)),
            },
            Data::Struct(_) | Data::Enum(_) => Ok(Self::Opaque(meta)),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
