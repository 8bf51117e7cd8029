//! Canonical source text for built expressions.
//!
//! Everything is printed on one line with the spacing rustfmt would use for
//! the same expression: `Some(Box::new(Term { kind: TermKind::Null }))`.
//! Callers that want one entry per line do their own line breaking around
//! the pieces they print.
//!
//! Only the expression forms [`ToAst`](crate::ToAst) and [`build`](crate::build)
//! produce get dedicated handling. Anything else falls back to the token
//! stream's own rendering, which is valid Rust but unevenly spaced.

use jq_stack::ensure_sufficient_stack;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprStruct, FieldValue, Member, Path, UnOp};

/// Render an expression as canonical source text.
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Render a path such as `BTreeMap::from`.
pub fn render_path(path: &Path) -> String {
    let mut out = String::new();
    write_path(&mut out, path);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| match expr {
        Expr::Struct(lit) => write_struct(out, lit),
        Expr::Call(call) => {
            write_expr(out, &call.func);
            out.push('(');
            write_list(out, &call.args);
            out.push(')');
        }
        Expr::Path(path) if path.qself.is_none() => write_path(out, &path.path),
        Expr::Lit(lit) => out.push_str(&lit.lit.to_token_stream().to_string()),
        Expr::Array(array) => {
            out.push('[');
            write_list(out, &array.elems);
            out.push(']');
        }
        Expr::Tuple(tuple) => {
            out.push('(');
            write_list(out, &tuple.elems);
            if tuple.elems.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Expr::MethodCall(call) if call.turbofish.is_none() => {
            write_expr(out, &call.receiver);
            out.push('.');
            out.push_str(&call.method.to_string());
            out.push('(');
            write_list(out, &call.args);
            out.push(')');
        }
        Expr::Unary(unary) => {
            match unary.op {
                UnOp::Neg(_) => out.push('-'),
                UnOp::Not(_) => out.push('!'),
                UnOp::Deref(_) => out.push('*'),
                _ => out.push_str(&unary.op.to_token_stream().to_string()),
            }
            write_expr(out, &unary.expr);
        }
        Expr::Paren(paren) => {
            out.push('(');
            write_expr(out, &paren.expr);
            out.push(')');
        }
        Expr::Reference(reference) => {
            out.push('&');
            if reference.mutability.is_some() {
                out.push_str("mut ");
            }
            write_expr(out, &reference.expr);
        }
        other => out.push_str(&other.to_token_stream().to_string()),
    });
}

fn write_list<P>(out: &mut String, items: &Punctuated<Expr, P>) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(out, item);
    }
}

fn write_struct(out: &mut String, lit: &ExprStruct) {
    write_path(out, &lit.path);
    if lit.fields.is_empty() && lit.rest.is_none() {
        out.push_str(" {}");
        return;
    }
    out.push_str(" { ");
    for (i, field) in lit.fields.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_field(out, field);
    }
    if let Some(rest) = &lit.rest {
        if !lit.fields.is_empty() {
            out.push_str(", ");
        }
        out.push_str("..");
        write_expr(out, rest);
    }
    out.push_str(" }");
}

fn write_field(out: &mut String, field: &FieldValue) {
    match &field.member {
        Member::Named(ident) => out.push_str(&ident.to_string()),
        Member::Unnamed(index) => out.push_str(&index.index.to_string()),
    }
    if field.colon_token.is_some() {
        out.push_str(": ");
        write_expr(out, &field.expr);
    }
}

fn write_path(out: &mut String, path: &Path) {
    if path.leading_colon.is_some() {
        out.push_str("::");
    }
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        out.push_str(&segment.ident.to_string());
        if !segment.arguments.is_none() {
            out.push_str(&segment.arguments.to_token_stream().to_string());
        }
    }
}
