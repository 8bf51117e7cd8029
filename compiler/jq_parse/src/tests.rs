use jq_ir::{
    Bind, Foreach, Func, FuncDef, If, Index, Label, ObjectEntry, ObjectKey, Operator, Query,
    Reduce, Suffix, Term, TermKind, Try, Unary,
};
use jq_lexer::{LexError, StringError};
use pretty_assertions::assert_eq;

use super::*;

fn ok(source: &str) -> Query {
    match parse(source) {
        Ok(query) => query,
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn term(kind: TermKind) -> Query {
    Query::from_term(Term::new(kind))
}

fn num(n: f64) -> Query {
    term(TermKind::Number(n))
}

fn func(name: &str, args: Vec<Query>) -> Query {
    term(TermKind::Func(Func {
        name: name.to_string(),
        args,
    }))
}

fn field(name: &str) -> Query {
    term(TermKind::Index(Index::field(name)))
}

fn identity() -> Query {
    term(TermKind::Identity)
}

#[test]
fn empty_program() {
    assert_eq!(ok(""), Query::default());
    assert_eq!(ok("  # only a comment\n"), Query::default());
}

#[test]
fn unary_plus_and_minus() {
    assert_eq!(
        ok("+1"),
        term(TermKind::Unary(Unary {
            op: Operator::ADD,
            term: Box::new(Term::new(TermKind::Number(1.0))),
        }))
    );
    assert_eq!(
        ok("-.x"),
        term(TermKind::Unary(Unary {
            op: Operator::SUB,
            term: Box::new(Term::new(TermKind::Index(Index::field("x")))),
        }))
    );
}

#[test]
fn precedence_and_associativity() {
    // 1 + 2 * 3
    assert_eq!(
        ok("1 + 2 * 3"),
        Query::binary(
            num(1.0),
            Operator::ADD,
            Query::binary(num(2.0), Operator::MUL, num(3.0)),
        )
    );
    // Left associative subtraction.
    assert_eq!(
        ok("1 - 2 - 3"),
        Query::binary(
            Query::binary(num(1.0), Operator::SUB, num(2.0)),
            Operator::SUB,
            num(3.0),
        )
    );
    // Right associative alternative.
    assert_eq!(
        ok(".a // .b // 1"),
        Query::binary(
            field("a"),
            Operator::ALT,
            Query::binary(field("b"), Operator::ALT, num(1.0)),
        )
    );
    // Pipe is loosest and right associative; comma binds tighter.
    assert_eq!(
        ok("1, 2 | . | 3"),
        Query::binary(
            Query::binary(num(1.0), Operator::COMMA, num(2.0)),
            Operator::PIPE,
            Query::binary(identity(), Operator::PIPE, num(3.0)),
        )
    );
    assert_eq!(
        ok(".a and .b or .c"),
        Query::binary(
            Query::binary(field("a"), Operator::AND, field("b")),
            Operator::OR,
            field("c"),
        )
    );
}

#[test]
fn update_operators() {
    assert_eq!(
        ok(".a |= . + 1"),
        Query::binary(
            field("a"),
            Operator::MODIFY,
            Query::binary(identity(), Operator::ADD, num(1.0)),
        )
    );
    assert_eq!(
        ok(".a //= 0"),
        Query::binary(field("a"), Operator::UPDATE_ALT, num(0.0))
    );
}

#[test]
fn comparisons_do_not_chain() {
    assert_eq!(
        parse("1 == 2 == 3"),
        Err(ParseError::NonAssociative {
            offset: 7,
            op: Operator::EQ,
        })
    );
    assert!(matches!(
        parse(".a = 1 = 2"),
        Err(ParseError::NonAssociative { .. })
    ));
    assert!(parse("1 == 2 and 3 == 4").is_ok());
}

#[test]
fn definitions_scope_over_the_body() {
    let expected = Query {
        func_defs: vec![FuncDef {
            name: "f".to_string(),
            params: vec!["g".to_string(), "$x".to_string()],
            body: Box::new(Query::binary(
                func("g", Vec::new()),
                Operator::PIPE,
                term(TermKind::Var("$x".to_string())),
            )),
        }],
        ..func("f", vec![identity(), num(1.0)])
    };
    assert_eq!(ok("def f(g; $x): g | $x; f(.; 1)"), expected);
}

#[test]
fn definitions_only_program() {
    let query = ok("def a: 1; def b: a;");
    assert!(query.is_definitions_only());
    let names: Vec<_> = query.func_defs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn nested_definitions_after_pipe() {
    let query = ok(". | def f: 1; f");
    let right = query.right.as_deref().cloned().unwrap_or_default();
    assert_eq!(right.func_defs.len(), 1);
    assert_eq!(right.term, func("f", Vec::new()).term);
}

#[test]
fn indexes_slices_and_iteration() {
    let query = ok(".a.b[0][]?");
    let Some(head) = query.term else {
        panic!("expected a term");
    };
    assert_eq!(head.kind, TermKind::Index(Index::field("a")));
    assert_eq!(
        head.suffixes,
        vec![
            Suffix::Index(Index::field("b")),
            Suffix::Index(Index {
                start: Some(Box::new(num(0.0))),
                ..Index::default()
            }),
            Suffix::Iter,
            Suffix::Optional,
        ]
    );

    assert_eq!(
        ok(".[]"),
        Query::from_term(Term {
            kind: TermKind::Identity,
            suffixes: vec![Suffix::Iter],
        })
    );
    assert_eq!(
        ok(".[1:]"),
        term(TermKind::Index(Index {
            start: Some(Box::new(num(1.0))),
            is_slice: true,
            ..Index::default()
        }))
    );
    assert_eq!(
        ok(".[:2]"),
        term(TermKind::Index(Index {
            end: Some(Box::new(num(2.0))),
            is_slice: true,
            ..Index::default()
        }))
    );
    assert_eq!(ok(r#"."a b""#), field("a b"));
}

#[test]
fn objects_and_arrays() {
    assert_eq!(
        ok(r#"{a, $x, "s": 1, if: 2, (.k): .v | tostring}"#),
        term(TermKind::Object(vec![
            ObjectEntry {
                key: ObjectKey::Ident("a".to_string()),
                value: None,
            },
            ObjectEntry {
                key: ObjectKey::Var("$x".to_string()),
                value: None,
            },
            ObjectEntry {
                key: ObjectKey::String("s".to_string()),
                value: Some(Box::new(num(1.0))),
            },
            ObjectEntry {
                key: ObjectKey::Ident("if".to_string()),
                value: Some(Box::new(num(2.0))),
            },
            ObjectEntry {
                key: ObjectKey::Query(Box::new(field("k"))),
                value: Some(Box::new(Query::binary(
                    field("v"),
                    Operator::PIPE,
                    func("tostring", Vec::new()),
                ))),
            },
        ]))
    );
    assert_eq!(ok("[]"), term(TermKind::Array(None)));
    assert_eq!(ok("{}"), term(TermKind::Object(Vec::new())));
}

#[test]
fn control_flow_terms() {
    assert_eq!(
        ok("if . then 1 elif .a then 2 end"),
        term(TermKind::If(If {
            cond: Box::new(identity()),
            then: Box::new(num(1.0)),
            elif: vec![jq_ir::IfElif {
                cond: field("a"),
                then: num(2.0),
            }],
            otherwise: None,
        }))
    );
    assert_eq!(
        ok("try error catch ."),
        term(TermKind::Try(Try {
            body: Box::new(func("error", Vec::new())),
            catch: Some(Box::new(identity())),
        }))
    );
    assert_eq!(
        ok("reduce .[] as $x (0; . + $x)"),
        term(TermKind::Reduce(Reduce {
            source: Box::new(Term {
                kind: TermKind::Identity,
                suffixes: vec![Suffix::Iter],
            }),
            pattern: "$x".to_string(),
            start: Box::new(num(0.0)),
            update: Box::new(Query::binary(
                identity(),
                Operator::ADD,
                term(TermKind::Var("$x".to_string())),
            )),
        }))
    );
    let Some(foreach) = ok("foreach .[] as $x (0; 1; 2)").term else {
        panic!("expected a term");
    };
    assert!(matches!(
        foreach.kind,
        TermKind::Foreach(Foreach { extract: Some(_), .. })
    ));
    assert_eq!(
        ok("label $out | break $out"),
        term(TermKind::Label(Label {
            name: "$out".to_string(),
            body: Box::new(term(TermKind::Break("$out".to_string()))),
        }))
    );
}

#[test]
fn binding_runs_to_end_of_pipeline() {
    assert_eq!(
        ok(". as $x | $x, 1"),
        Query::from_term(Term {
            kind: TermKind::Identity,
            suffixes: vec![Suffix::Bind(Bind {
                pattern: "$x".to_string(),
                body: Box::new(Query::binary(
                    term(TermKind::Var("$x".to_string())),
                    Operator::COMMA,
                    num(1.0),
                )),
            })],
        })
    );
}

#[test]
fn error_reporting() {
    assert_eq!(
        parse("1 +"),
        Err(ParseError::UnexpectedEof {
            offset: 3,
            expected: "a term",
        })
    );
    assert_eq!(
        parse("(1"),
        Err(ParseError::UnexpectedEof {
            offset: 2,
            expected: "`)`",
        })
    );
    assert_eq!(
        parse("1 )"),
        Err(ParseError::UnexpectedToken {
            offset: 2,
            found: ")".to_string(),
            expected: "end of input",
        })
    );
    assert_eq!(
        parse("1 ^ 2"),
        Err(ParseError::Lex(LexError::InvalidToken {
            offset: 2,
            text: "^".to_string(),
        }))
    );
    assert_eq!(
        parse(r#""a\(.)""#),
        Err(ParseError::InvalidString {
            offset: 0,
            source: StringError::Interpolation { offset: 2 },
        })
    );
    assert_eq!(
        parse("def : 1;").map_err(|e| e.offset()),
        Err(4)
    );
}

#[test]
fn deeply_nested_input_does_not_overflow() {
    let depth = 1_000;
    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    assert!(parse(&source).is_ok());
}
