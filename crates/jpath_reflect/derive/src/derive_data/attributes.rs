//! Parsing of `#[reflect(..)]` attributes.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, meta::ParseNestedMeta};

use crate::REFLECT_ATTRIBUTE_NAME;

const OPAQUE: &str = "opaque";
const DEBUG: &str = "debug";
const PARTIAL_EQ: &str = "partial_eq";
const IGNORE: &str = "ignore";

/// Type-level `#[reflect(..)]` attributes.
///
/// Each flag stores the span it was declared at, so the generated code
/// can point errors at the attribute that enabled it.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`: treat the type as a leaf.
    pub opaque: Option<Span>,
    /// `#[reflect(debug)]`: the type implements `Debug`.
    pub debug: Option<Span>,
    /// `#[reflect(partial_eq)]`: the type implements `PartialEq`.
    pub partial_eq: Option<Span>,
}

/// Field-level `#[reflect(..)]` attributes.
#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`: the field is invisible to reflection.
    pub ignore: Option<Span>,
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate reflect attribute"));
    }
    *flag = Some(meta.path.span());
    Ok(())
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(OPAQUE) {
                    set_flag(&mut this.opaque, &meta)
                } else if meta.path.is_ident(DEBUG) {
                    set_flag(&mut this.debug, &meta)
                } else if meta.path.is_ident(PARTIAL_EQ) {
                    set_flag(&mut this.partial_eq, &meta)
                } else if meta.path.is_ident(IGNORE) {
                    Err(meta.error("`ignore` can only be used on fields"))
                } else {
                    Err(meta.error(format_args!(
                        "unknown type attribute, expected one of `{OPAQUE}`, `{DEBUG}`, `{PARTIAL_EQ}`"
                    )))
                }
            })?;
        }

        Ok(this)
    }
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(IGNORE) {
                    set_flag(&mut this.ignore, &meta)
                } else {
                    Err(meta.error(format_args!(
                        "unknown field attribute, expected `{IGNORE}`"
                    )))
                }
            })?;
        }

        Ok(this)
    }
}
