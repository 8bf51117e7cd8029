//! Structural sharing for built expressions.
//!
//! A struct literal that occurs more than once in the tree is emitted once as
//! an argument of a synthetic closure call and referenced through the
//! matching closure parameter everywhere else:
//!
//! ```text
//! (|v0| { return Vec::from([v0.clone(), v0.clone()]); })(Term { kind: TermKind::Null })
//! ```
//!
//! Identity is structural: two literals are the same subtree when their
//! canonical renderings are equal. Parameters are numbered in the order the
//! subtrees are first met in a depth-first, left-to-right walk, so the output
//! is a function of the input value alone.
//!
//! Only the outermost repeated literal is hoisted. Repeats nested inside a
//! hoisted argument stay written out in full within that argument, so small
//! literals such as `Term { ..Default::default() }` can still appear many
//! times in the output.

use jq_stack::ensure_sufficient_stack;
use proc_macro2::Span;
use rustc_hash::FxHashMap;
use syn::visit::{self, Visit};
use syn::visit_mut::{self, VisitMut};
use syn::{parse_quote, Expr, ExprStruct, Ident};
use tracing::{debug, trace};

use crate::printer::render;
use crate::{expr, ToAst};

/// Prefix of the closure parameters naming hoisted subtrees (`v0`, `v1`, ...).
pub const PARAM_PREFIX: &str = "v";

const PLACEHOLDER_PREFIX: &str = "__shared_";

/// Build `value` as a closure call whose parameters are its repeated subtrees.
///
/// The closure body is a single `return` of the value's own expression. With
/// no repeated subtrees the closure takes no parameters and the call has no
/// arguments.
#[tracing::instrument(level = "debug", skip_all)]
pub fn build<T: ToAst + ?Sized>(value: &T) -> Expr {
    let mut body = value.to_ast();

    let mut counter = SubtreeCounter::default();
    counter.visit_expr(&body);
    let repeated = counter.counts.values().filter(|&&n| n > 1).count();
    debug!(
        distinct = counter.counts.len(),
        repeated, "counted struct literals"
    );

    let mut hoister = Hoister {
        counts: &counter.counts,
        slot_of: FxHashMap::default(),
        slots: Vec::new(),
    };
    hoister.visit_expr_mut(&mut body);
    let slots = hoister.slots;

    // A subtree whose other occurrences all sat inside a bigger hoisted
    // subtree ends up with a single use; it goes back where it was.
    let mut params = Vec::new();
    let mut args = Vec::new();
    let mut replacements = Vec::with_capacity(slots.len());
    for slot in slots {
        if slot.uses > 1 {
            let param = Ident::new(
                &format!("{PARAM_PREFIX}{}", params.len()),
                Span::call_site(),
            );
            replacements.push(expr::method_call(expr::path(&[&param.to_string()]), "clone"));
            params.push(param);
            args.push(slot.expr);
        } else {
            replacements.push(slot.expr);
        }
    }
    debug!(hoisted = params.len(), "resolved shared subtrees");

    Resolver {
        replacements: &replacements,
    }
    .visit_expr_mut(&mut body);

    parse_quote!((|#(#params),*| { return #body; })(#(#args),*))
}

/// Occurrences of each struct literal, keyed by canonical rendering.
#[derive(Default)]
struct SubtreeCounter {
    counts: FxHashMap<String, usize>,
}

impl<'ast> Visit<'ast> for SubtreeCounter {
    fn visit_expr_struct(&mut self, node: &'ast ExprStruct) {
        let key = render(&Expr::Struct(node.clone()));
        *self.counts.entry(key).or_default() += 1;
        ensure_sufficient_stack(|| visit::visit_expr_struct(self, node));
    }
}

struct Slot {
    expr: Expr,
    uses: usize,
}

/// Replaces repeated struct literals, outermost first, by placeholders.
struct Hoister<'a> {
    counts: &'a FxHashMap<String, usize>,
    slot_of: FxHashMap<String, usize>,
    slots: Vec<Slot>,
}

impl VisitMut for Hoister<'_> {
    fn visit_expr_mut(&mut self, node: &mut Expr) {
        if let Expr::Struct(_) = node {
            let key = render(node);
            if self.counts.get(&key).copied().unwrap_or(0) > 1 {
                let index = match self.slot_of.get(&key) {
                    Some(&index) => index,
                    None => {
                        let index = self.slots.len();
                        trace!(slot = index, subtree = %key, "new shared subtree");
                        self.slots.push(Slot {
                            expr: node.clone(),
                            uses: 0,
                        });
                        self.slot_of.insert(key, index);
                        index
                    }
                };
                self.slots[index].uses += 1;
                *node = placeholder(index);
                return;
            }
        }
        ensure_sufficient_stack(|| visit_mut::visit_expr_mut(self, node));
    }
}

fn placeholder(index: usize) -> Expr {
    expr::path(&[&format!("{PLACEHOLDER_PREFIX}{index}")])
}

fn placeholder_index(node: &Expr) -> Option<usize> {
    let Expr::Path(path) = node else {
        return None;
    };
    path.path
        .get_ident()?
        .to_string()
        .strip_prefix(PLACEHOLDER_PREFIX)?
        .parse()
        .ok()
}

/// Swaps placeholders for either a parameter reference or the inlined
/// subtree.
struct Resolver<'a> {
    replacements: &'a [Expr],
}

impl VisitMut for Resolver<'_> {
    fn visit_expr_mut(&mut self, node: &mut Expr) {
        if let Some(replacement) = placeholder_index(node)
            .and_then(|index| self.replacements.get(index))
        {
            *node = replacement.clone();
            // An inlined subtree never contains placeholders: the hoister
            // does not descend into the literals it takes.
            return;
        }
        ensure_sufficient_stack(|| visit_mut::visit_expr_mut(self, node));
    }
}
