//! Terms: primaries with their postfix suffixes.

use jq_ir::{
    Bind, Foreach, Func, If, IfElif, Index, Label, ObjectEntry, ObjectKey, Operator, Query,
    Reduce, Suffix, Term, TermKind, Try, Unary,
};
use jq_lexer::{unescape, Token};
use jq_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a term and its suffixes. `allow_bind` is off where a following
    /// `as` belongs to an enclosing construct (`reduce`, `foreach`).
    pub(crate) fn parse_term(&mut self, allow_bind: bool) -> Result<Term, ParseError> {
        ensure_sufficient_stack(|| {
            let mut term = self.parse_primary(allow_bind)?;
            self.parse_suffixes(&mut term, allow_bind)?;
            Ok(term)
        })
    }

    fn parse_primary(&mut self, allow_bind: bool) -> Result<Term, ParseError> {
        let offset = self.cursor.offset();
        let Some(lexeme) = self.cursor.advance() else {
            return Err(self.cursor.unexpected("a term"));
        };
        trace!(offset, token = %lexeme.token, "parse_primary");

        let kind = match lexeme.token {
            Token::Dot => return self.parse_dot(),
            Token::DotDot => TermKind::Recurse,
            Token::Field(field) => TermKind::Index(Index::field(&field[1..])),
            Token::Null => TermKind::Null,
            Token::True => TermKind::True,
            Token::False => TermKind::False,
            Token::Number(text) => TermKind::Number(text.parse().map_err(|_| {
                ParseError::InvalidNumber {
                    offset,
                    text: text.to_string(),
                }
            })?),
            Token::String(raw) => TermKind::String(string_value(raw, offset)?),
            Token::Format(name) => TermKind::Format(name.to_string()),
            Token::Variable(name) => TermKind::Var(name.to_string()),
            Token::Ident(name) => TermKind::Func(self.parse_call(name)?),
            Token::LParen => {
                let query = self.parse_pipe()?;
                self.cursor.expect(&Token::RParen, "`)`")?;
                TermKind::Query(Box::new(query))
            }
            Token::LBracket => {
                if self.cursor.eat(&Token::RBracket) {
                    TermKind::Array(None)
                } else {
                    let query = self.parse_pipe()?;
                    self.cursor.expect(&Token::RBracket, "`]`")?;
                    TermKind::Array(Some(Box::new(query)))
                }
            }
            Token::LBrace => TermKind::Object(self.parse_object()?),
            Token::Plus | Token::Minus => {
                let op = if lexeme.token == Token::Plus {
                    Operator::ADD
                } else {
                    Operator::SUB
                };
                let term = self.parse_term(allow_bind)?;
                TermKind::Unary(Unary {
                    op,
                    term: Box::new(term),
                })
            }
            Token::If => TermKind::If(self.parse_if()?),
            Token::Try => {
                let body = self.parse_term(true)?;
                let catch = if self.cursor.eat(&Token::Catch) {
                    Some(Box::new(Query::from_term(self.parse_term(true)?)))
                } else {
                    None
                };
                TermKind::Try(Try {
                    body: Box::new(Query::from_term(body)),
                    catch,
                })
            }
            Token::Reduce => TermKind::Reduce(self.parse_reduce()?),
            Token::Foreach => TermKind::Foreach(self.parse_foreach()?),
            Token::Label => {
                let name = self.expect_variable()?;
                self.cursor.expect(&Token::Pipe, "`|` after label")?;
                let body = self.parse_pipe()?;
                TermKind::Label(Label {
                    name,
                    body: Box::new(body),
                })
            }
            Token::Break => TermKind::Break(self.expect_variable()?),
            token => {
                return Err(ParseError::UnexpectedToken {
                    offset,
                    found: token.to_string(),
                    expected: "a term",
                });
            }
        };
        Ok(Term::new(kind))
    }

    /// After a lone `.`: identity, `."name"`, `.[...]`.
    fn parse_dot(&mut self) -> Result<Term, ParseError> {
        match self.cursor.peek() {
            Some(Token::String(raw)) => {
                let offset = self.cursor.offset();
                self.cursor.advance();
                Ok(Term::new(TermKind::Index(Index::field(string_value(
                    raw, offset,
                )?))))
            }
            Some(Token::LBracket) => {
                self.cursor.advance();
                Ok(match self.parse_bracket()? {
                    Some(index) => Term::new(TermKind::Index(index)),
                    None => Term {
                        kind: TermKind::Identity,
                        suffixes: vec![Suffix::Iter],
                    },
                })
            }
            _ => Ok(Term::new(TermKind::Identity)),
        }
    }

    /// The inside of `[...]` after the opening bracket; `None` for `[]`.
    fn parse_bracket(&mut self) -> Result<Option<Index>, ParseError> {
        if self.cursor.eat(&Token::RBracket) {
            return Ok(None);
        }
        if self.cursor.eat(&Token::Colon) {
            let end = self.parse_pipe()?;
            self.cursor.expect(&Token::RBracket, "`]`")?;
            return Ok(Some(Index {
                end: Some(Box::new(end)),
                is_slice: true,
                ..Index::default()
            }));
        }
        let start = Some(Box::new(self.parse_pipe()?));
        if self.cursor.eat(&Token::Colon) {
            let end = if self.cursor.check(&Token::RBracket) {
                None
            } else {
                Some(Box::new(self.parse_pipe()?))
            };
            self.cursor.expect(&Token::RBracket, "`]`")?;
            return Ok(Some(Index {
                start,
                end,
                is_slice: true,
                ..Index::default()
            }));
        }
        self.cursor.expect(&Token::RBracket, "`]` or `:`")?;
        Ok(Some(Index {
            start,
            ..Index::default()
        }))
    }

    fn parse_suffixes(&mut self, term: &mut Term, allow_bind: bool) -> Result<(), ParseError> {
        loop {
            let suffix = match (self.cursor.peek(), self.cursor.peek_nth(1)) {
                (Some(Token::Field(field)), _) => {
                    self.cursor.advance();
                    Suffix::Index(Index::field(&field[1..]))
                }
                (Some(Token::Dot), Some(Token::String(raw))) => {
                    self.cursor.advance();
                    let offset = self.cursor.offset();
                    self.cursor.advance();
                    Suffix::Index(Index::field(string_value(raw, offset)?))
                }
                (Some(Token::Dot), Some(Token::LBracket)) | (Some(Token::LBracket), _) => {
                    // `.[` and `[` both open an index here.
                    self.cursor.eat(&Token::Dot);
                    self.cursor.advance();
                    match self.parse_bracket()? {
                        Some(index) => Suffix::Index(index),
                        None => Suffix::Iter,
                    }
                }
                (Some(Token::Question), _) => {
                    self.cursor.advance();
                    Suffix::Optional
                }
                (Some(Token::As), _) if allow_bind => {
                    self.cursor.advance();
                    let pattern = self.expect_variable()?;
                    self.cursor.expect(&Token::Pipe, "`|` after binding")?;
                    let body = self.parse_pipe()?;
                    term.suffixes.push(Suffix::Bind(Bind {
                        pattern,
                        body: Box::new(body),
                    }));
                    // The binding body runs to the end of the pipeline.
                    return Ok(());
                }
                _ => return Ok(()),
            };
            term.suffixes.push(suffix);
        }
    }

    /// `name` or `name(arg; ...)`, after the name.
    fn parse_call(&mut self, name: &str) -> Result<Func, ParseError> {
        let mut args = Vec::new();
        if self.cursor.eat(&Token::LParen) {
            loop {
                args.push(self.parse_pipe()?);
                if !self.cursor.eat(&Token::Semicolon) {
                    break;
                }
            }
            self.cursor.expect(&Token::RParen, "`;` or `)`")?;
        }
        Ok(Func {
            name: name.to_string(),
            args,
        })
    }

    fn parse_object(&mut self) -> Result<Vec<ObjectEntry>, ParseError> {
        let mut entries = Vec::new();
        if self.cursor.eat(&Token::RBrace) {
            return Ok(entries);
        }
        loop {
            entries.push(self.parse_object_entry()?);
            if !self.cursor.eat(&Token::Comma) {
                break;
            }
        }
        self.cursor.expect(&Token::RBrace, "`,` or `}`")?;
        Ok(entries)
    }

    fn parse_object_entry(&mut self) -> Result<ObjectEntry, ParseError> {
        let offset = self.cursor.offset();
        let key = match self.cursor.peek() {
            Some(Token::Ident(name)) => ObjectKey::Ident(name.to_string()),
            Some(Token::Variable(name)) => ObjectKey::Var(name.to_string()),
            Some(Token::String(raw)) => ObjectKey::String(string_value(raw, offset)?),
            Some(Token::LParen) => {
                self.cursor.advance();
                let query = self.parse_pipe()?;
                self.cursor.expect(&Token::RParen, "`)`")?;
                self.cursor.expect(&Token::Colon, "`:` after computed key")?;
                let value = self.parse_object_value()?;
                return Ok(ObjectEntry {
                    key: ObjectKey::Query(Box::new(query)),
                    value: Some(Box::new(value)),
                });
            }
            Some(token) => match token.keyword() {
                Some(keyword) => ObjectKey::Ident(keyword.to_string()),
                None => return Err(self.cursor.unexpected("object key")),
            },
            None => return Err(self.cursor.unexpected("object key")),
        };
        self.cursor.advance();

        let value = if self.cursor.eat(&Token::Colon) {
            Some(Box::new(self.parse_object_value()?))
        } else {
            None
        };
        Ok(ObjectEntry { key, value })
    }

    /// `if` has been consumed.
    fn parse_if(&mut self) -> Result<If, ParseError> {
        let cond = self.parse_pipe()?;
        self.cursor.expect(&Token::Then, "`then`")?;
        let then = self.parse_pipe()?;

        let mut elif = Vec::new();
        while self.cursor.eat(&Token::Elif) {
            let cond = self.parse_pipe()?;
            self.cursor.expect(&Token::Then, "`then`")?;
            let then = self.parse_pipe()?;
            elif.push(IfElif { cond, then });
        }

        let otherwise = if self.cursor.eat(&Token::Else) {
            Some(Box::new(self.parse_pipe()?))
        } else {
            None
        };
        self.cursor.expect(&Token::End, "`elif`, `else`, or `end`")?;
        Ok(If {
            cond: Box::new(cond),
            then: Box::new(then),
            elif,
            otherwise,
        })
    }

    /// `reduce` has been consumed.
    fn parse_reduce(&mut self) -> Result<Reduce, ParseError> {
        let source = self.parse_term(false)?;
        self.cursor.expect(&Token::As, "`as`")?;
        let pattern = self.expect_variable()?;
        self.cursor.expect(&Token::LParen, "`(`")?;
        let start = self.parse_pipe()?;
        self.cursor.expect(&Token::Semicolon, "`;`")?;
        let update = self.parse_pipe()?;
        self.cursor.expect(&Token::RParen, "`)`")?;
        Ok(Reduce {
            source: Box::new(source),
            pattern,
            start: Box::new(start),
            update: Box::new(update),
        })
    }

    /// `foreach` has been consumed.
    fn parse_foreach(&mut self) -> Result<Foreach, ParseError> {
        let source = self.parse_term(false)?;
        self.cursor.expect(&Token::As, "`as`")?;
        let pattern = self.expect_variable()?;
        self.cursor.expect(&Token::LParen, "`(`")?;
        let start = self.parse_pipe()?;
        self.cursor.expect(&Token::Semicolon, "`;`")?;
        let update = self.parse_pipe()?;
        let extract = if self.cursor.eat(&Token::Semicolon) {
            Some(Box::new(self.parse_pipe()?))
        } else {
            None
        };
        self.cursor.expect(&Token::RParen, "`;` or `)`")?;
        Ok(Foreach {
            source: Box::new(source),
            pattern,
            start: Box::new(start),
            update: Box::new(update),
            extract,
        })
    }

    fn expect_variable(&mut self) -> Result<String, ParseError> {
        match self.cursor.peek() {
            Some(Token::Variable(name)) => {
                self.cursor.advance();
                Ok(name.to_string())
            }
            _ => Err(self.cursor.unexpected("variable")),
        }
    }
}

fn string_value(raw: &str, offset: usize) -> Result<String, ParseError> {
    unescape(raw).map_err(|source| ParseError::InvalidString { offset, source })
}
