//! The compiled-in table equals a fresh parse of every definition.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use jq_builtins::{builtin_funcs, lookup};
use jq_ir::{Operator, Query, TermKind};
use jqgen::BUILTIN_FUNC_DEFINITIONS;
use pretty_assertions::assert_eq;

#[test]
fn every_definition_round_trips() {
    for &(name, source) in BUILTIN_FUNC_DEFINITIONS {
        let expected = jq_parse::parse(source).expect("definition parses");
        assert_eq!(lookup(name), Some(&expected), "`{name}`");
    }
}

#[test]
fn table_has_exactly_the_defined_names() {
    let mut names: Vec<&str> = BUILTIN_FUNC_DEFINITIONS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    let keys: Vec<&str> = builtin_funcs().keys().copied().collect();
    assert_eq!(keys, names);
}

#[test]
fn unknown_names_are_absent() {
    assert_eq!(lookup("length"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn shared_subtrees_are_independent_copies() {
    let map = lookup("map").expect("map is defined");
    assert!(map.is_definitions_only());
    let def = &map.func_defs[0];
    assert_eq!(def.name, "map");
    assert_eq!(def.params, ["f"]);

    let mut copy: Query = map.clone();
    copy.func_defs[0].name.push('2');
    assert_eq!(lookup("map").map(|q| q.func_defs[0].name.as_str()), Some("map"));
}

#[test]
fn operators_survive_symbolization() {
    let abs = lookup("abs").expect("abs is defined");
    let body = &abs.func_defs[0].body;
    let Some(TermKind::If(cond)) = body.term.as_ref().map(|term| &term.kind) else {
        panic!("abs is an if: {body:?}");
    };
    assert_eq!(cond.cond.op, Operator::AND);
}
