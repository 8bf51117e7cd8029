//! Grammar productions.
//!
//! - `mod.rs`: program, pipelines, function definitions, binary operators
//! - `term.rs`: primaries, suffixes, and the keyword-introduced terms

mod term;

use jq_ir::{FuncDef, Operator, Query};
use jq_lexer::Token;
use jq_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

/// Binding power of the binary operators; higher binds tighter.
mod prec {
    pub const COMMA: u8 = 1;
    pub const ALT: u8 = 2;
    pub const ASSIGN: u8 = 3;
    pub const OR: u8 = 4;
    pub const AND: u8 = 5;
    pub const COMPARE: u8 = 6;
    pub const ADDITIVE: u8 = 7;
    pub const MULTIPLICATIVE: u8 = 8;
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
    None,
}

fn binary_op(token: Token<'_>) -> Option<(Operator, u8, Assoc)> {
    let op = match token {
        Token::Comma => (Operator::COMMA, prec::COMMA, Assoc::Left),
        Token::SlashSlash => (Operator::ALT, prec::ALT, Assoc::Right),
        Token::Eq => (Operator::ASSIGN, prec::ASSIGN, Assoc::None),
        Token::PipeEq => (Operator::MODIFY, prec::ASSIGN, Assoc::None),
        Token::PlusEq => (Operator::UPDATE_ADD, prec::ASSIGN, Assoc::None),
        Token::MinusEq => (Operator::UPDATE_SUB, prec::ASSIGN, Assoc::None),
        Token::StarEq => (Operator::UPDATE_MUL, prec::ASSIGN, Assoc::None),
        Token::SlashEq => (Operator::UPDATE_DIV, prec::ASSIGN, Assoc::None),
        Token::PercentEq => (Operator::UPDATE_MOD, prec::ASSIGN, Assoc::None),
        Token::SlashSlashEq => (Operator::UPDATE_ALT, prec::ASSIGN, Assoc::None),
        Token::Or => (Operator::OR, prec::OR, Assoc::Left),
        Token::And => (Operator::AND, prec::AND, Assoc::Left),
        Token::EqEq => (Operator::EQ, prec::COMPARE, Assoc::None),
        Token::NotEq => (Operator::NE, prec::COMPARE, Assoc::None),
        Token::Gt => (Operator::GT, prec::COMPARE, Assoc::None),
        Token::Lt => (Operator::LT, prec::COMPARE, Assoc::None),
        Token::GtEq => (Operator::GE, prec::COMPARE, Assoc::None),
        Token::LtEq => (Operator::LE, prec::COMPARE, Assoc::None),
        Token::Plus => (Operator::ADD, prec::ADDITIVE, Assoc::Left),
        Token::Minus => (Operator::SUB, prec::ADDITIVE, Assoc::Left),
        Token::Star => (Operator::MUL, prec::MULTIPLICATIVE, Assoc::Left),
        Token::Slash => (Operator::DIV, prec::MULTIPLICATIVE, Assoc::Left),
        Token::Percent => (Operator::MOD, prec::MULTIPLICATIVE, Assoc::Left),
        _ => return None,
    };
    Some(op)
}

/// Put `defs` in front of the definitions `query` already scopes over.
fn prepend_defs(mut defs: Vec<FuncDef>, query: &mut Query) {
    if defs.is_empty() {
        return;
    }
    defs.append(&mut query.func_defs);
    query.func_defs = defs;
}

impl Parser<'_> {
    /// Parse the whole input. A program made only of definitions has no
    /// body.
    pub fn parse_program(&mut self) -> Result<Query, ParseError> {
        let mut defs = Vec::new();
        while self.cursor.check(&Token::Def) {
            defs.push(self.parse_func_def()?);
        }
        let mut query = if self.cursor.is_at_end() {
            Query::default()
        } else {
            self.parse_pipe()?
        };
        if !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected("end of input"));
        }
        prepend_defs(defs, &mut query);
        Ok(query)
    }

    /// Parse a pipeline, including leading definitions scoped over it.
    pub(crate) fn parse_pipe(&mut self) -> Result<Query, ParseError> {
        ensure_sufficient_stack(|| self.parse_pipe_inner())
    }

    fn parse_pipe_inner(&mut self) -> Result<Query, ParseError> {
        if self.cursor.check(&Token::Def) {
            let mut defs = Vec::new();
            while self.cursor.check(&Token::Def) {
                defs.push(self.parse_func_def()?);
            }
            let mut body = self.parse_pipe()?;
            prepend_defs(defs, &mut body);
            return Ok(body);
        }

        let left = self.parse_binary(prec::COMMA)?;
        if self.cursor.eat(&Token::Pipe) {
            let right = self.parse_pipe()?;
            return Ok(Query::binary(left, Operator::PIPE, right));
        }
        Ok(left)
    }

    /// `def name(params): body;`
    fn parse_func_def(&mut self) -> Result<FuncDef, ParseError> {
        self.cursor.expect(&Token::Def, "`def`")?;
        let name = match self.cursor.peek() {
            Some(Token::Ident(name)) => name.to_string(),
            _ => return Err(self.cursor.unexpected("function name")),
        };
        self.cursor.advance();
        trace!(name = %name, "parse_func_def");

        let mut params = Vec::new();
        if self.cursor.eat(&Token::LParen) {
            loop {
                match self.cursor.peek() {
                    Some(Token::Ident(param) | Token::Variable(param)) => {
                        params.push(param.to_string());
                        self.cursor.advance();
                    }
                    _ => return Err(self.cursor.unexpected("parameter name")),
                }
                if !self.cursor.eat(&Token::Semicolon) {
                    break;
                }
            }
            self.cursor.expect(&Token::RParen, "`;` or `)`")?;
        }

        self.cursor.expect(&Token::Colon, "`:`")?;
        let body = self.parse_pipe()?;
        self.cursor.expect(&Token::Semicolon, "`;` after function body")?;
        Ok(FuncDef {
            name,
            params,
            body: Box::new(body),
        })
    }

    /// Precedence climbing over the binary operators binding at least as
    /// tightly as `min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Query, ParseError> {
        let mut left = Query::from_term(self.parse_term(true)?);
        let mut chained_nonassoc = None;
        while let Some((op, prec, assoc)) = self.cursor.peek().and_then(binary_op) {
            if prec < min_prec {
                break;
            }
            if chained_nonassoc == Some(prec) {
                return Err(ParseError::NonAssociative {
                    offset: self.cursor.offset(),
                    op,
                });
            }
            self.cursor.advance();
            let next_min = if assoc == Assoc::Right { prec } else { prec + 1 };
            let right = self.parse_binary(next_min)?;
            left = Query::binary(left, op, right);
            chained_nonassoc = (assoc == Assoc::None).then_some(prec);
        }
        Ok(left)
    }

    /// Object values: terms chained by `|`, without `,`.
    fn parse_object_value(&mut self) -> Result<Query, ParseError> {
        let mut value = self.parse_binary(prec::ALT)?;
        while self.cursor.eat(&Token::Pipe) {
            let right = self.parse_binary(prec::ALT)?;
            value = Query::binary(value, Operator::PIPE, right);
        }
        Ok(value)
    }
}
