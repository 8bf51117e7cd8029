//! jq builtins written in jq, parsed ahead of time.
//!
//! The table is produced by `jqgen` from its build script, so no parsing
//! happens at run time. It is built on first access and shared afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use jq_ir::Query;

#[allow(
    clippy::all,
    clippy::pedantic,
    unused_imports,
    reason = "Generated code"
)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/builtin_funcs.rs"));
}

static BUILTIN_FUNCS: OnceLock<BTreeMap<&'static str, Query>> = OnceLock::new();

/// Every builtin, keyed by name.
pub fn builtin_funcs() -> &'static BTreeMap<&'static str, Query> {
    BUILTIN_FUNCS.get_or_init(generated::init_builtin_funcs)
}

/// The definitions of builtin `name`, if it is written in jq.
///
/// A single entry may define several arities of `name` and private helpers.
pub fn lookup(name: &str) -> Option<&'static Query> {
    builtin_funcs().get(name)
}
