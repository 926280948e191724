use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Produces a token from the matched text, or `None` when the text is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Tried in order, so longer operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \\t\\r\\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^'[^']*'").unwrap(), handler: quoted_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: quoted_handler },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^=<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "=<") },
        RegexPattern { regex: Regex::new("^=>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, "=>") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
    ];
}

/// A pull-based scanner. Tokens are produced one at a time as the parser
/// advances; characters no pattern accepts come out as `Unknown` tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Arc<String>,
    current: Token,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file = Arc::new(file.unwrap_or_else(|| String::from("shell")));

        let mut lexer = Lexer {
            source: source.into(),
            pos: 0,
            current: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: Position(0, Arc::clone(&file)),
                    end: Position(0, Arc::clone(&file)),
                }
            ),
            file,
        };
        lexer.current = lexer.next_token();
        lexer
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Arc::clone(&self.file)),
            end: Position(end as u32, Arc::clone(&self.file)),
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    self.span(self.pos, self.pos)
                );
            }

            let remainder = &self.source[self.pos..];
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    if let Some(token) = handler(self, &text) {
                        return token;
                    }
                }
                None => {
                    let ch = remainder.chars().next().unwrap_or('\0');
                    let start = self.pos;
                    self.advance_n(ch.len_utf8());

                    return MK_TOKEN!(TokenKind::Unknown, ch.to_string(), self.span(start, self.pos));
                }
            }
        }
    }
}

impl TokenSource for Lexer {
    fn current(&self) -> &Token {
        &self.current
    }

    fn advance(&mut self) -> Token {
        let next = self.next_token();
        std::mem::replace(&mut self.current, next)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    lexer.advance_n(matched.len());
    None
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let start = lexer.pos;
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(kind, matched.to_string(), lexer.span(start, lexer.pos)))
}

// 'x' is a char, anything else between quotes is a string
fn quoted_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let inner = &matched[1..matched.len() - 1];
    let kind = if matched.starts_with('\'') && inner.chars().count() == 1 {
        TokenKind::Char
    } else {
        TokenKind::String
    };

    let start = lexer.pos;
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(kind, inner.to_string(), lexer.span(start, lexer.pos)))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.pos;
    lexer.advance_n(matched.len());
    Some(MK_TOKEN!(kind, matched.to_string(), lexer.span(start, lexer.pos)))
}

/// Scans the whole source up front.
///
/// The returned vector always ends with an `EOF` token. Fails on the first
/// character no pattern accepts.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.advance();
        match token.kind {
            TokenKind::Unknown => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: token.value },
                    token.span.start,
                ));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
