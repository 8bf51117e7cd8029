//! Syntax tree nodes.
//!
//! The tree is owned and boxed rather than arena-allocated: it is built once
//! by the parser and then either serialized into generated code or compared
//! structurally, so there is nothing to gain from interning.
//!
//! A pipeline `a | b` is a [`Query`] with `left`, `op` and `right` set; a
//! single term is a [`Query`] with only `term` set. Function definitions that
//! prefix a pipeline (`def f: ...; body`) live in `func_defs` of the query they
//! scope over.

use crate::Operator;

/// A jq program or sub-expression.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst), to_ast(omit_default))]
pub struct Query {
    pub func_defs: Vec<FuncDef>,
    pub term: Option<Box<Term>>,
    pub left: Option<Box<Query>>,
    pub op: Operator,
    pub right: Option<Box<Query>>,
}

impl Query {
    /// A query consisting of a single term.
    pub fn from_term(term: Term) -> Self {
        Query {
            term: Some(Box::new(term)),
            ..Query::default()
        }
    }

    /// `left op right`.
    pub fn binary(left: Query, op: Operator, right: Query) -> Self {
        Query {
            left: Some(Box::new(left)),
            op,
            right: Some(Box::new(right)),
            ..Query::default()
        }
    }

    /// True for a query that only defines functions, like a builtin module.
    pub fn is_definitions_only(&self) -> bool {
        !self.func_defs.is_empty() && self.term.is_none() && self.left.is_none()
    }
}

/// `def name(params): body;`
///
/// Parameters keep their sigil: `$x` is a value parameter, `f` a closure.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct FuncDef {
    pub name: String,
    pub params: Vec<String>,
    pub body: Box<Query>,
}

/// A primary expression followed by its suffixes (`.a[0]?`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst), to_ast(omit_default))]
pub struct Term {
    pub kind: TermKind,
    pub suffixes: Vec<Suffix>,
}

impl Term {
    pub fn new(kind: TermKind) -> Self {
        Term {
            kind,
            suffixes: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub enum TermKind {
    /// `.`
    #[default]
    Identity,
    /// `..`
    Recurse,
    Null,
    True,
    False,
    Number(f64),
    String(String),
    /// `@base64`, stored with its `@`.
    Format(String),
    /// `.foo`, `.[e]`, `.[a:b]`
    Index(Index),
    Func(Func),
    /// `$name`, stored with its `$`.
    Var(String),
    Object(Vec<ObjectEntry>),
    Array(Option<Box<Query>>),
    /// Parenthesized query.
    Query(Box<Query>),
    Unary(Unary),
    If(If),
    Try(Try),
    Reduce(Reduce),
    Foreach(Foreach),
    Label(Label),
    /// `break $name`
    Break(String),
}

/// Field, element, or slice access. A slice has `is_slice` set and either
/// bound may be absent (`.[2:]`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst), to_ast(omit_default))]
pub struct Index {
    pub name: Option<String>,
    pub start: Option<Box<Query>>,
    pub end: Option<Box<Query>>,
    pub is_slice: bool,
}

impl Index {
    pub fn field(name: impl Into<String>) -> Self {
        Index {
            name: Some(name.into()),
            ..Index::default()
        }
    }
}

/// Function call; arguments are separated by `;` in source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Func {
    pub name: String,
    pub args: Vec<Query>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct ObjectEntry {
    pub key: ObjectKey,
    /// Absent for shorthand entries such as `{a}` or `{$x}`.
    pub value: Option<Box<Query>>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub enum ObjectKey {
    Ident(String),
    Var(String),
    String(String),
    /// `(expr): value`
    Query(Box<Query>),
}

/// `-term` or `+term`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Unary {
    pub op: Operator,
    pub term: Box<Term>,
}

/// `if cond then a elif c then b else d end`; `else` is optional.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct If {
    pub cond: Box<Query>,
    pub then: Box<Query>,
    pub elif: Vec<IfElif>,
    pub otherwise: Option<Box<Query>>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct IfElif {
    pub cond: Query,
    pub then: Query,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Try {
    pub body: Box<Query>,
    pub catch: Option<Box<Query>>,
}

/// `reduce source as $x (start; update)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Reduce {
    pub source: Box<Term>,
    pub pattern: String,
    pub start: Box<Query>,
    pub update: Box<Query>,
}

/// `foreach source as $x (start; update; extract)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Foreach {
    pub source: Box<Term>,
    pub pattern: String,
    pub start: Box<Query>,
    pub update: Box<Query>,
    pub extract: Option<Box<Query>>,
}

/// `label $name | body`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Label {
    pub name: String,
    pub body: Box<Query>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub enum Suffix {
    Index(Index),
    /// `[]`
    Iter,
    /// `?`
    Optional,
    Bind(Bind),
}

/// `as $name | body`, binding extends to the end of the enclosing pipe.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
pub struct Bind {
    pub pattern: String,
    pub body: Box<Query>,
}
