//! Value to Rust-expression builder.
//!
//! [`ToAst`] turns a value into a `syn::Expr` that evaluates back to an equal
//! value. [`build`] does that for a whole value and then factors repeated
//! struct literals out into closure parameters:
//!
//! ```text
//! (|v0, v1| {
//!     return BTreeMap::from([("a", ... v0.clone() ...), ("b", ...)]);
//! })(Term { ... }, Query { ... })
//! ```
//!
//! [`printer::render`] produces the canonical single-line source text of the
//! expressions this crate builds.
//!
//! Derive [`ToAst`](macro@ToAst) for your own types; the generated impls refer
//! to this crate as `::jq_astgen`.

// Derives inside this crate's tests expand to `::jq_astgen::...` paths.
#[cfg(test)]
extern crate self as jq_astgen;

pub mod expr;
pub mod printer;
mod share;
mod to_ast;

pub use jq_macros::ToAst;
pub use share::{build, PARAM_PREFIX};
pub use syn;
pub use to_ast::ToAst;
