//! Spelling operator ordinals through their named constants.
//!
//! The derived builder writes an operator as its raw ordinal, `Operator(3)`.
//! Before printing, every `op: Operator(n)` field whose ordinal lies in
//! [`Operator::SYMBOLIZED`] becomes `op: Operator::ADD` and so on. Matching is
//! on syntax, not text: only a field named `op` holding a call of `Operator`
//! with one integer literal qualifies, so numbers anywhere else in the tree
//! are left alone.

use jq_astgen::expr;
use jq_ir::Operator;
use jq_stack::ensure_sufficient_stack;
use syn::visit_mut::{self, VisitMut};
use syn::{Expr, FieldValue, Lit, Member};
use tracing::debug;

use crate::shape::CallWithHoistedArgs;

/// Name of the struct field that holds an operator.
pub const OP_FIELD: &str = "op";

/// Rewrites in-range `op` fields; counts what it changed.
#[derive(Default)]
pub struct OperatorSymbolizer {
    pub rewritten: usize,
}

impl OperatorSymbolizer {
    /// Symbolize the hoisted arguments and the entries of `call`.
    pub fn symbolize(&mut self, call: &mut CallWithHoistedArgs) {
        for arg in &mut call.args {
            self.visit_expr_mut(arg);
        }
        for entry in &mut call.body_return_value.entries {
            self.visit_expr_mut(entry);
        }
        debug!(rewritten = self.rewritten, "symbolized operators");
    }
}

impl VisitMut for OperatorSymbolizer {
    fn visit_expr_mut(&mut self, node: &mut Expr) {
        ensure_sufficient_stack(|| visit_mut::visit_expr_mut(self, node));
    }

    fn visit_field_value_mut(&mut self, field: &mut FieldValue) {
        let is_op_field = matches!(&field.member, Member::Named(ident) if ident == OP_FIELD);
        if is_op_field {
            if let Some(name) = raw_operator(&field.expr)
                .filter(|op| op.is_symbolized())
                .and_then(Operator::name)
            {
                field.expr = expr::path(&["Operator", name]);
                self.rewritten += 1;
                return;
            }
        }
        visit_mut::visit_field_value_mut(self, field);
    }
}

/// `Operator(<integer>)` as written by the builder.
fn raw_operator(expr: &Expr) -> Option<Operator> {
    let Expr::Call(call) = expr else {
        return None;
    };
    let Expr::Path(func) = &*call.func else {
        return None;
    };
    if !func.path.is_ident("Operator") || call.args.len() != 1 {
        return None;
    }
    match call.args.first()? {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse().ok().map(Operator),
            _ => None,
        },
        _ => None,
    }
}
