//! Procedural macros for `jq_astgen`.
//!
//! # `ToAst` derive
//!
//! Generates a `jq_astgen::ToAst` implementation that rebuilds the value as a
//! Rust expression: structs become struct literals, tuple structs and tuple
//! variants become calls, unit variants become paths.
//!
//! ```text
//! #[derive(ToAst)]
//! #[to_ast(omit_default)]
//! pub struct Index {
//!     pub name: Option<String>,
//!     pub is_slice: bool,
//! }
//!
//! // Index { name: Some("a".into()), is_slice: false }.to_ast() renders as
//! // Index { name: Some(String::from("a")), ..Default::default() }
//! ```
//!
//! The generated code names the type by its bare identifier, so the consumer
//! of the emitted source must have it in scope.

mod to_ast;
mod utils;

use proc_macro::TokenStream;

/// Derive `jq_astgen::ToAst`.
///
/// # Container attributes
/// - `#[to_ast(omit_default)]` - structs only. Fields equal to their
///   `Default` are left out and the literal ends with `..Default::default()`.
///   Every field type must implement `Default` and `PartialEq`.
#[proc_macro_derive(ToAst, attributes(to_ast))]
pub fn derive_to_ast(input: TokenStream) -> TokenStream {
    to_ast::derive_to_ast(input)
}
