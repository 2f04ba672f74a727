use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Field, Fields, Index, Member};

use crate::derive_data::{FieldAttributes, ReflectMeta};

/// A struct field as seen by reflection.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// Member used to reach the field, `self.#member`.
    pub member: Member,
    /// Name a path segment uses to address the field.
    pub name: String,
}

/// A struct (named or tuple) with its reflected fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn new(mut meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let mut parsed = Vec::with_capacity(fields.len());

        for (index, data) in fields.iter().enumerate() {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            let (member, name) = match &data.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
                None => (
                    Member::Unnamed(Index {
                        index: index as u32,
                        span: Span::call_site(),
                    }),
                    index.to_string(),
                ),
            };
            parsed.push(StructField {
                data,
                attrs,
                member,
                name,
            });
        }

        meta.add_reflect_bounds(
            parsed
                .iter()
                .filter(|field| field.attrs.ignore.is_none())
                .map(|field| &field.data.ty),
        );

        Ok(Self {
            meta,
            fields: parsed,
        })
    }

    #[inline]
    pub(crate) fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that are not `#[reflect(ignore)]`, in declaration order.
    pub(crate) fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.ignore.is_none())
    }
}

/// Token lists used to generate the `Struct` accessors.
pub(crate) struct FieldAccessors {
    /// `Reflect::as_reflect(&self.field)` per active field.
    pub fields_ref: Vec<TokenStream>,
    /// `Reflect::as_reflect_mut(&mut self.field)` per active field.
    pub fields_mut: Vec<TokenStream>,
    /// Reflection index of each active field.
    pub field_indices: Vec<usize>,
    /// Segment name of each active field.
    pub field_names: Vec<String>,
    /// Number of active fields.
    pub field_count: usize,
}

impl FieldAccessors {
    pub(crate) fn new(info: &ReflectStruct) -> Self {
        let reflect_ = crate::path::reflect_(info.meta().reflect_path());

        let mut this = Self {
            fields_ref: Vec::new(),
            fields_mut: Vec::new(),
            field_indices: Vec::new(),
            field_names: Vec::new(),
            field_count: 0,
        };

        for (index, field) in info.active_fields().enumerate() {
            let member = &field.member;
            this.fields_ref
                .push(quote!(#reflect_::as_reflect(&self.#member)));
            this.fields_mut
                .push(quote!(#reflect_::as_reflect_mut(&mut self.#member)));
            this.field_indices.push(index);
            this.field_names.push(field.name.clone());
            this.field_count += 1;
        }

        this
    }
}
