//! Constructors for the expression shapes `ToAst` produces.
//!
//! Derived impls call into this module so the generated code stays small.

use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::{parse_quote, Expr, ExprPath, Ident, LitStr, Path, PathSegment};

fn make_path(segments: &[&str]) -> Path {
    let mut path = Path {
        leading_colon: None,
        segments: Punctuated::new(),
    };
    for segment in segments {
        path.segments
            .push(PathSegment::from(Ident::new(segment, Span::call_site())));
    }
    path
}

/// `a::b::c`
pub fn path(segments: &[&str]) -> Expr {
    Expr::Path(ExprPath {
        attrs: Vec::new(),
        qself: None,
        path: make_path(segments),
    })
}

/// `a::b(args...)`
pub fn call(segments: &[&str], args: Vec<Expr>) -> Expr {
    let func = path(segments);
    parse_quote!(#func(#(#args),*))
}

/// `a::B { field: value, ... }`, closed with `..Default::default()` when
/// `rest` is set.
pub fn struct_lit(segments: &[&str], fields: Vec<(&str, Expr)>, rest: bool) -> Expr {
    let path = make_path(segments);
    let names = fields
        .iter()
        .map(|(name, _)| Ident::new(name, Span::call_site()));
    let values = fields.iter().map(|(_, value)| value);
    if rest {
        parse_quote!(#path { #(#names: #values,)* ..Default::default() })
    } else {
        parse_quote!(#path { #(#names: #values),* })
    }
}

/// A string literal expression, `"text"`.
pub fn str_lit(value: &str) -> Expr {
    let lit = LitStr::new(value, Span::call_site());
    parse_quote!(#lit)
}

/// `receiver.method()`
pub fn method_call(receiver: Expr, method: &str) -> Expr {
    let method = Ident::new(method, Span::call_site());
    parse_quote!(#receiver.#method())
}

/// `-operand`
pub fn neg(operand: Expr) -> Expr {
    parse_quote!(-#operand)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::printer::render;

    #[test]
    fn builds_paths_and_calls() {
        assert_eq!(render(&path(&["Operator", "ADD"])), "Operator::ADD");
        assert_eq!(
            render(&call(&["Some"], vec![str_lit("x")])),
            r#"Some("x")"#
        );
        assert_eq!(render(&call(&["Vec", "new"], Vec::new())), "Vec::new()");
    }

    #[test]
    fn struct_literal_with_and_without_rest() {
        let closed = struct_lit(&["Point"], vec![("x", str_lit("1"))], false);
        assert_eq!(render(&closed), r#"Point { x: "1" }"#);

        let open = struct_lit(&["Point"], vec![("x", str_lit("1"))], true);
        assert_eq!(render(&open), r#"Point { x: "1", ..Default::default() }"#);

        let empty = struct_lit(&["Point"], Vec::new(), true);
        assert_eq!(render(&empty), "Point { ..Default::default() }");
    }

    #[test]
    fn method_call_and_negation() {
        assert_eq!(render(&method_call(path(&["v0"]), "clone")), "v0.clone()");
        assert_eq!(render(&neg(path(&["f64", "INFINITY"]))), "-f64::INFINITY");
    }
}
