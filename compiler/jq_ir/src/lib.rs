//! Syntax tree of the jq expression language.
//!
//! Produced by `jq_parse`, embedded into generated Rust source by `jqgen`, and
//! read back at run time by `jq_builtins`. With the `astgen` feature every node
//! implements `jq_astgen::ToAst`.

mod ast;
mod operator;

pub use ast::{
    Bind, Foreach, Func, FuncDef, If, IfElif, Index, Label, ObjectEntry, ObjectKey, Query, Reduce,
    Suffix, Term, TermKind, Try, Unary,
};
pub use operator::Operator;
