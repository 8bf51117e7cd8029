//! Typed view of the builder's output.
//!
//! [`jq_astgen::build`] returns a plain `syn::Expr`. The generator reads
//! exactly one shape out of it,
//!
//! ```text
//! (|v0, v1| { return BTreeMap::from([entry, ...]); })(arg0, arg1)
//! ```
//!
//! and converts it once, up front, into [`CallWithHoistedArgs`]. Everything
//! downstream works on the typed fields and never matches on syntax again.

use jq_astgen::printer::render;
use quote::ToTokens;
use syn::{Expr, ExprPath, Ident, Pat, Stmt};

use crate::GenError;

/// A constructor call taking one array of entries: `BTreeMap::from([...])`.
#[derive(Clone, Debug)]
pub struct CompositeLit {
    pub constructor: ExprPath,
    pub entries: Vec<Expr>,
}

/// The builder's closure call, taken apart.
///
/// `params[k]` names the shared subtree `args[k]`; the lengths always
/// match.
#[derive(Clone, Debug)]
pub struct CallWithHoistedArgs {
    pub params: Vec<Ident>,
    pub args: Vec<Expr>,
    pub body_return_value: CompositeLit,
}

fn unexpected_expr(kind: &'static str, node: &Expr) -> GenError {
    GenError::UnexpectedAst {
        kind,
        node: render(node),
    }
}

fn unexpected_tokens(kind: &'static str, node: &impl ToTokens) -> GenError {
    GenError::UnexpectedAst {
        kind,
        node: node.to_token_stream().to_string(),
    }
}

fn param_ident(pat: &Pat) -> Option<&Ident> {
    match pat {
        Pat::Ident(binding) if binding.subpat.is_none() => Some(&binding.ident),
        Pat::Type(typed) => param_ident(&typed.pat),
        _ => None,
    }
}

impl TryFrom<Expr> for CompositeLit {
    type Error = GenError;

    fn try_from(expr: Expr) -> Result<Self, GenError> {
        const KIND: &str = "a composite literal `Path::from([...])`";
        let call = match expr {
            Expr::Call(call) => call,
            other => return Err(unexpected_expr(KIND, &other)),
        };
        let constructor = match &*call.func {
            Expr::Path(path) => path.clone(),
            _ => return Err(unexpected_expr(KIND, &Expr::Call(call.clone()))),
        };
        let entries = match call.args.first() {
            Some(Expr::Array(array)) if call.args.len() == 1 => {
                array.elems.iter().cloned().collect()
            }
            _ => return Err(unexpected_expr(KIND, &Expr::Call(call.clone()))),
        };
        Ok(CompositeLit {
            constructor,
            entries,
        })
    }
}

impl TryFrom<Expr> for CallWithHoistedArgs {
    type Error = GenError;

    fn try_from(expr: Expr) -> Result<Self, GenError> {
        let call = match expr {
            Expr::Call(call) => call,
            other => return Err(unexpected_expr("a call expression", &other)),
        };
        let closure = match &*call.func {
            Expr::Paren(paren) => match &*paren.expr {
                Expr::Closure(closure) => closure,
                other => return Err(unexpected_expr("a closure", other)),
            },
            other => return Err(unexpected_expr("a parenthesized closure", other)),
        };

        let mut params = Vec::with_capacity(closure.inputs.len());
        for input in &closure.inputs {
            let ident = param_ident(input)
                .ok_or_else(|| unexpected_tokens("a named closure parameter", input))?;
            params.push(ident.clone());
        }
        if params.len() != call.args.len() {
            return Err(unexpected_expr(
                "one argument per closure parameter",
                &Expr::Call(call.clone()),
            ));
        }

        let Expr::Block(body) = &*closure.body else {
            return Err(unexpected_expr("a block body", &closure.body));
        };
        let [stmt] = body.block.stmts.as_slice() else {
            return Err(unexpected_tokens("exactly one statement", &body.block));
        };
        let Stmt::Expr(Expr::Return(ret), _) = stmt else {
            return Err(unexpected_tokens("a return statement", stmt));
        };
        let value = match ret.expr.as_deref() {
            Some(tuple @ Expr::Tuple(_)) => {
                return Err(unexpected_expr("a single return value", tuple));
            }
            Some(value) => value.clone(),
            None => return Err(unexpected_tokens("a return value", ret)),
        };
        let body_return_value = CompositeLit::try_from(value)?;

        Ok(CallWithHoistedArgs {
            params,
            args: call.args.into_iter().collect(),
            body_return_value,
        })
    }
}
