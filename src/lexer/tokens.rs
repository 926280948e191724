use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, sync::Arc};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("if", TokenKind::If);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Unknown,

    // Literals
    Identifier,
    Integer,
    Float,
    String,
    Char,
    True,
    False,

    // Arithmetic
    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Caret,

    // Comparison
    Equals,    // ==
    NotEquals, // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    // Logical
    And,
    Or,

    Assignment, // =

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,

    // Reserved
    If,
    Elsif,
    Else,
}

impl TokenKind {
    /// Whether a token of this kind is a literal leaf in the AST.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Char
                | TokenKind::True
                | TokenKind::False
        )
    }
}

impl TokenKind {
    /// The fixed source text of this kind, if it has one.
    pub fn lexeme(&self) -> Option<&'static str> {
        let lexeme = match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Assignment => "=",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::If => "if",
            TokenKind::Elsif => "elsif",
            TokenKind::Else => "else",
            _ => return None,
        };

        Some(lexeme)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.lexeme() {
            Some(lexeme) => write!(f, "{}", lexeme),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Byte offset of the first character of this token.
    pub fn offset(&self) -> u32 {
        self.span.start.0
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String => write!(f, "\"{}\"", self.value),
            TokenKind::Char => write!(f, "'{}'", self.value),
            _ => write!(f, "{}", self.value),
        }
    }
}

/// Anything the parser can pull tokens from.
///
/// `current` is the lookahead token. `advance` returns that token and moves
/// on; once the end of input is reached every further call yields an `EOF`
/// token again.
pub trait TokenSource {
    fn current(&self) -> &Token;
    fn advance(&mut self) -> Token;
}

/// A token source over tokens that were already scanned.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Appends an `EOF` token if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = match tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Arc::new(String::from("shell"))),
            };

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        TokenStream { tokens, pos: 0 }
    }
}

impl TokenSource for TokenStream {
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
