//! `ToAst` derive implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DataEnum, DeriveInput, Fields, Ident, Index};

use crate::utils::{field_bindings, parse_container_options, ContainerOptions};

pub fn derive_to_ast(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_to_ast_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_to_ast_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let options = parse_container_options(&input.attrs)?;

    let body = match &input.data {
        Data::Struct(data) => struct_body(name, &data.fields, &options),
        Data::Enum(data) => {
            if options.omit_default {
                return Err(syn::Error::new_spanned(
                    input,
                    "`omit_default` is only supported on structs",
                ));
            }
            enum_body(name, data)
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "ToAst derive does not support unions",
            ));
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::jq_astgen::ToAst for #name #ty_generics #where_clause {
            fn to_ast(&self) -> ::jq_astgen::syn::Expr {
                #body
            }
        }
    })
}

fn struct_body(name: &Ident, fields: &Fields, options: &ContainerOptions) -> TokenStream2 {
    let type_name = name.to_string();
    match fields {
        Fields::Named(named) => {
            if !options.omit_default {
                let names = named.named.iter().filter_map(|f| f.ident.as_ref());
                let labels = names.clone().map(Ident::to_string);
                return quote! {
                    ::jq_astgen::expr::struct_lit(
                        &[#type_name],
                        ::std::vec![#((#labels, ::jq_astgen::ToAst::to_ast(&self.#names))),*],
                        false,
                    )
                };
            }

            let pushes = named.named.iter().filter_map(|field| {
                let ident = field.ident.as_ref()?;
                let label = ident.to_string();
                let ty = &field.ty;
                Some(quote! {
                    if self.#ident == <#ty as ::core::default::Default>::default() {
                        rest = true;
                    } else {
                        fields.push((#label, ::jq_astgen::ToAst::to_ast(&self.#ident)));
                    }
                })
            });
            quote! {
                let mut fields = ::std::vec::Vec::new();
                let mut rest = false;
                #(#pushes)*
                ::jq_astgen::expr::struct_lit(&[#type_name], fields, rest)
            }
        }
        Fields::Unnamed(unnamed) => {
            let indices = (0..unnamed.unnamed.len()).map(Index::from);
            quote! {
                ::jq_astgen::expr::call(
                    &[#type_name],
                    ::std::vec![#(::jq_astgen::ToAst::to_ast(&self.#indices)),*],
                )
            }
        }
        Fields::Unit => quote! {
            ::jq_astgen::expr::path(&[#type_name])
        },
    }
}

fn enum_body(name: &Ident, data: &DataEnum) -> TokenStream2 {
    let type_name = name.to_string();
    let arms = data.variants.iter().map(|variant| {
        let ident = &variant.ident;
        let variant_name = ident.to_string();
        let bindings = field_bindings(&variant.fields);
        match &variant.fields {
            Fields::Named(_) => {
                let labels = bindings.iter().map(Ident::to_string);
                quote! {
                    Self::#ident { #(#bindings),* } => ::jq_astgen::expr::struct_lit(
                        &[#type_name, #variant_name],
                        ::std::vec![#((#labels, ::jq_astgen::ToAst::to_ast(#bindings))),*],
                        false,
                    ),
                }
            }
            Fields::Unnamed(_) => quote! {
                Self::#ident(#(#bindings),*) => ::jq_astgen::expr::call(
                    &[#type_name, #variant_name],
                    ::std::vec![#(::jq_astgen::ToAst::to_ast(#bindings)),*],
                ),
            },
            Fields::Unit => quote! {
                Self::#ident => ::jq_astgen::expr::path(&[#type_name, #variant_name]),
            },
        }
    });

    quote! {
        match self {
            #(#arms)*
        }
    }
}
