//! Token definitions.

use std::fmt;

use logos::Logos;

/// A jq token. Slices borrow from the source text.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"([ \t\r\n]+|#[^\n]*)")]
pub enum Token<'src> {
    // === Keywords ===
    #[token("def")]
    Def,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("end")]
    End,
    #[token("as")]
    As,
    #[token("reduce")]
    Reduce,
    #[token("foreach")]
    Foreach,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("label")]
    Label,
    #[token("break")]
    Break,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Paths and names ===
    /// `.name`, slice includes the dot.
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Field(&'src str),
    /// `$name`, slice includes the `$`.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*(::[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice())]
    Variable(&'src str),
    /// `@name`, slice includes the `@`.
    #[regex(r"@[a-zA-Z0-9_]+", |lex| lex.slice())]
    Format(&'src str),
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(::[a-zA-Z_][a-zA-Z0-9_]*)*", |lex| lex.slice())]
    Ident(&'src str),

    // === Literals ===
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    Number(&'src str),
    /// A double-quoted string, quotes and escapes included.
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    String(&'src str),

    // === Punctuation ===
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,
    #[token("//")]
    SlashSlash,
    #[token("=")]
    Eq,
    #[token("|=")]
    PipeEq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("//=")]
    SlashSlashEq,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Field(s)
            | Token::Variable(s)
            | Token::Format(s)
            | Token::Ident(s)
            | Token::Number(s)
            | Token::String(s) => *s,
            Token::Dot => ".",
            Token::DotDot => "..",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Pipe => "|",
            Token::Question => "?",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Gt => ">",
            Token::Lt => "<",
            Token::GtEq => ">=",
            Token::LtEq => "<=",
            Token::SlashSlash => "//",
            Token::Eq => "=",
            Token::PipeEq => "|=",
            Token::PlusEq => "+=",
            Token::MinusEq => "-=",
            Token::StarEq => "*=",
            Token::SlashEq => "/=",
            Token::PercentEq => "%=",
            Token::SlashSlashEq => "//=",
            keyword => keyword.keyword().unwrap_or_default(),
        };
        f.write_str(text)
    }
}

impl Token<'_> {
    /// Keywords that may still be used as object keys (`{if: 1}`).
    pub fn keyword(&self) -> Option<&'static str> {
        Some(match self {
            Token::Def => "def",
            Token::If => "if",
            Token::Then => "then",
            Token::Elif => "elif",
            Token::Else => "else",
            Token::End => "end",
            Token::As => "as",
            Token::Reduce => "reduce",
            Token::Foreach => "foreach",
            Token::Try => "try",
            Token::Catch => "catch",
            Token::Label => "label",
            Token::Break => "break",
            Token::And => "and",
            Token::Or => "or",
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            _ => return None,
        })
    }
}
