//! The `ToAst` trait and its implementations for standard types.

use std::collections::BTreeMap;

use jq_stack::ensure_sufficient_stack;
use proc_macro2::{Literal, Span};
use syn::{parse_quote, Expr, ExprLit, Lit, LitBool, LitChar, LitFloat, LitInt};

use crate::expr;

/// Rebuild a value as a Rust expression.
///
/// Evaluating the returned expression, with the value's types in scope,
/// yields a value equal to `self`.
pub trait ToAst {
    fn to_ast(&self) -> Expr;
}

fn lit(lit: Lit) -> Expr {
    Expr::Lit(ExprLit {
        attrs: Vec::new(),
        lit,
    })
}

fn int_lit(digits: &str) -> Expr {
    lit(Lit::Int(LitInt::new(digits, Span::call_site())))
}

impl<T: ToAst + ?Sized> ToAst for &T {
    fn to_ast(&self) -> Expr {
        (**self).to_ast()
    }
}

impl ToAst for str {
    fn to_ast(&self) -> Expr {
        expr::str_lit(self)
    }
}

impl ToAst for String {
    fn to_ast(&self) -> Expr {
        expr::call(&["String", "from"], vec![expr::str_lit(self)])
    }
}

impl ToAst for bool {
    fn to_ast(&self) -> Expr {
        lit(Lit::Bool(LitBool::new(*self, Span::call_site())))
    }
}

impl ToAst for char {
    fn to_ast(&self) -> Expr {
        lit(Lit::Char(LitChar::new(*self, Span::call_site())))
    }
}

macro_rules! unsigned_to_ast {
    ($($ty:ty),*) => {$(
        impl ToAst for $ty {
            fn to_ast(&self) -> Expr {
                int_lit(&self.to_string())
            }
        }
    )*};
}

macro_rules! signed_to_ast {
    ($($ty:ty),*) => {$(
        impl ToAst for $ty {
            fn to_ast(&self) -> Expr {
                let magnitude = int_lit(&self.unsigned_abs().to_string());
                if *self < 0 {
                    expr::neg(magnitude)
                } else {
                    magnitude
                }
            }
        }
    )*};
}

unsigned_to_ast!(u8, u16, u32, u64, usize);
signed_to_ast!(i8, i16, i32, i64, isize);

impl ToAst for f64 {
    fn to_ast(&self) -> Expr {
        if self.is_nan() {
            return expr::path(&["f64", "NAN"]);
        }
        let magnitude = if self.is_infinite() {
            expr::path(&["f64", "INFINITY"])
        } else {
            lit(Lit::Float(LitFloat::from(Literal::f64_unsuffixed(
                self.abs(),
            ))))
        };
        if self.is_sign_negative() {
            expr::neg(magnitude)
        } else {
            magnitude
        }
    }
}

impl<T: ToAst> ToAst for Option<T> {
    fn to_ast(&self) -> Expr {
        match self {
            Some(value) => expr::call(&["Some"], vec![value.to_ast()]),
            None => expr::path(&["None"]),
        }
    }
}

impl<T: ToAst + ?Sized> ToAst for Box<T> {
    fn to_ast(&self) -> Expr {
        let inner = ensure_sufficient_stack(|| (**self).to_ast());
        expr::call(&["Box", "new"], vec![inner])
    }
}

impl<T: ToAst> ToAst for Vec<T> {
    fn to_ast(&self) -> Expr {
        if self.is_empty() {
            return expr::call(&["Vec", "new"], Vec::new());
        }
        let elems = self.iter().map(ToAst::to_ast);
        let func = expr::path(&["Vec", "from"]);
        parse_quote!(#func([#(#elems),*]))
    }
}

impl<A: ToAst, B: ToAst> ToAst for (A, B) {
    fn to_ast(&self) -> Expr {
        let (a, b) = (self.0.to_ast(), self.1.to_ast());
        parse_quote!((#a, #b))
    }
}

/// Always `BTreeMap::from([...])`, empty maps included, so a map is
/// recognizable as a composite literal by its shape alone.
impl<K: ToAst, V: ToAst> ToAst for BTreeMap<K, V> {
    fn to_ast(&self) -> Expr {
        let entries = self.iter().map(|(key, value)| {
            let key = key.to_ast();
            let value = value.to_ast();
            let entry: Expr = parse_quote!((#key, #value));
            entry
        });
        let func = expr::path(&["BTreeMap", "from"]);
        parse_quote!(#func([#(#entries),*]))
    }
}
