//! Attribute parsing shared by the derive.

use proc_macro2::Span;
use syn::{Attribute, Fields, Ident};

/// Options from `#[to_ast(...)]` on the deriving type.
#[derive(Default)]
pub struct ContainerOptions {
    pub omit_default: bool,
}

/// Parse every `#[to_ast(...)]` attribute on the container.
pub fn parse_container_options(attrs: &[Attribute]) -> syn::Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("to_ast") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("omit_default") {
                options.omit_default = true;
                Ok(())
            } else {
                Err(meta.error("unknown to_ast option, expected `omit_default`"))
            }
        })?;
    }
    Ok(options)
}

/// Pattern bindings for the fields of a variant: the field names for named
/// fields, `f0, f1, ...` for positional ones.
pub fn field_bindings(fields: &Fields) -> Vec<Ident> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field
                .ident
                .clone()
                .unwrap_or_else(|| Ident::new(&format!("f{i}"), Span::call_site()))
        })
        .collect()
}
