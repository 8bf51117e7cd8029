//! Binary and unary operator kinds.
//!
//! Operators are stored as their ordinal (`Operator(3)` is `+`). The ordinals
//! are stable within a build but are not a public contract, so generated code
//! spells them through the associated constants (`Operator::ADD`) wherever
//! [`Operator::SYMBOLIZED`] covers them.

use std::fmt;
use std::ops::RangeInclusive;

/// Operator kind of a [`Query`](crate::Query) or [`Unary`](crate::Unary) node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "astgen", derive(jq_astgen::ToAst))]
#[repr(transparent)]
pub struct Operator(pub u8);

impl Operator {
    /// No operator: the query is a plain term.
    pub const NONE: Operator = Operator(0);
    pub const PIPE: Operator = Operator(1);
    pub const COMMA: Operator = Operator(2);
    pub const ADD: Operator = Operator(3);
    pub const SUB: Operator = Operator(4);
    pub const MUL: Operator = Operator(5);
    pub const DIV: Operator = Operator(6);
    pub const MOD: Operator = Operator(7);
    pub const EQ: Operator = Operator(8);
    pub const NE: Operator = Operator(9);
    pub const GT: Operator = Operator(10);
    pub const LT: Operator = Operator(11);
    pub const GE: Operator = Operator(12);
    pub const LE: Operator = Operator(13);
    pub const AND: Operator = Operator(14);
    pub const OR: Operator = Operator(15);
    /// Alternative operator `//`.
    pub const ALT: Operator = Operator(16);
    pub const ASSIGN: Operator = Operator(17);
    /// Update-assignment `|=`.
    pub const MODIFY: Operator = Operator(18);
    pub const UPDATE_ADD: Operator = Operator(19);
    pub const UPDATE_SUB: Operator = Operator(20);
    pub const UPDATE_MUL: Operator = Operator(21);
    pub const UPDATE_DIV: Operator = Operator(22);
    pub const UPDATE_MOD: Operator = Operator(23);
    pub const UPDATE_ALT: Operator = Operator(24);

    /// Ordinals that generated code spells symbolically, `ADD` through `ALT`.
    pub const SYMBOLIZED: RangeInclusive<u8> = Self::ADD.0..=Self::ALT.0;

    const NAMES: [&'static str; 25] = [
        "NONE",
        "PIPE",
        "COMMA",
        "ADD",
        "SUB",
        "MUL",
        "DIV",
        "MOD",
        "EQ",
        "NE",
        "GT",
        "LT",
        "GE",
        "LE",
        "AND",
        "OR",
        "ALT",
        "ASSIGN",
        "MODIFY",
        "UPDATE_ADD",
        "UPDATE_SUB",
        "UPDATE_MUL",
        "UPDATE_DIV",
        "UPDATE_MOD",
        "UPDATE_ALT",
    ];

    const SYMBOLS: [&'static str; 25] = [
        "", "|", ",", "+", "-", "*", "/", "%", "==", "!=", ">", "<", ">=", "<=", "and", "or",
        "//", "=", "|=", "+=", "-=", "*=", "/=", "%=", "//=",
    ];

    /// Name of the associated constant for this ordinal, if there is one.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMES.get(usize::from(self.0)).copied()
    }

    /// Source spelling in jq, if this ordinal is a known operator.
    pub fn symbol(self) -> Option<&'static str> {
        match self.0 {
            0 => None,
            n => Self::SYMBOLS.get(usize::from(n)).copied(),
        }
    }

    /// Whether generated code spells this operator through its constant.
    pub fn is_symbolized(self) -> bool {
        Self::SYMBOLIZED.contains(&self.0)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => write!(f, "Operator({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_constants() {
        assert_eq!(Operator::ADD.name(), Some("ADD"));
        assert_eq!(Operator::ALT.name(), Some("ALT"));
        assert_eq!(Operator::UPDATE_ALT.name(), Some("UPDATE_ALT"));
        assert_eq!(Operator(25).name(), None);
    }

    #[test]
    fn symbolized_range_is_add_through_alt() {
        assert!(!Operator::PIPE.is_symbolized());
        assert!(!Operator::COMMA.is_symbolized());
        assert!(Operator::ADD.is_symbolized());
        assert!(Operator::OR.is_symbolized());
        assert!(Operator::ALT.is_symbolized());
        assert!(!Operator::ASSIGN.is_symbolized());
        assert!(!Operator::MODIFY.is_symbolized());
    }

    #[test]
    fn displays_jq_spelling() {
        assert_eq!(Operator::ALT.to_string(), "//");
        assert_eq!(Operator::UPDATE_ALT.to_string(), "//=");
        assert_eq!(Operator::AND.to_string(), "and");
        assert_eq!(Operator::NONE.to_string(), "Operator(0)");
        assert_eq!(Operator(200).to_string(), "Operator(200)");
    }
}
