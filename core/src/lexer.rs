//! Source text to tokens.
//!
//! A single-pass hand-written scanner. The only subtlety worth a comment
//! is the end-of-input boundary: identifier/number scanning and `peek`
//! must stop exactly at `index == len`, never reading or advancing past
//! it, which this scanner ensures by checking `self.index < self.chars.len()`
//! before every read.

use core::fmt;

use crate::{Box, String, Vec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Int(i64),
    Ident(Box<str>),

    Let,
    Fun,
    If,
    Else,
    While,
    Return,
    Nil,
    Print,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,

    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

/// Lexical errors: an unrecognized character. Everything else the
/// scanner sees is either a valid token or rolled into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub line: u32,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexError {}

pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    line: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            index: 0,
            line: 1,
        }
    }

    fn at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        if self.index < self.chars.len() {
            Some(self.chars[self.index])
        } else {
            None
        }
    }

    fn advance(&mut self) -> Option<char> {
        if self.index < self.chars.len() {
            let c = self.chars[self.index];
            self.index += 1;
            if c == '\n' {
                self.line += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Scan the entire source into a token stream terminated by `Eof`.
    /// Stops at the first unrecognized character.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            if self.at_end() {
                break;
            }
            let line = self.line;
            let c = self.advance().expect("checked not at end");
            let kind = match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '%' => TokenKind::Percent,
                '!' => {
                    if self.matches('=') {
                        TokenKind::BangEqual
                    } else {
                        TokenKind::Bang
                    }
                }
                '=' => {
                    if self.matches('=') {
                        TokenKind::EqualEqual
                    } else {
                        TokenKind::Equal
                    }
                }
                '<' => {
                    if self.matches('=') {
                        TokenKind::LessEqual
                    } else {
                        TokenKind::Less
                    }
                }
                '>' => {
                    if self.matches('=') {
                        TokenKind::GreaterEqual
                    } else {
                        TokenKind::Greater
                    }
                }
                c if c.is_ascii_digit() => {
                    self.index -= 1;
                    TokenKind::Int(self.scan_number(line)?)
                }
                c if is_ident_start(c) => {
                    self.index -= 1;
                    self.scan_identifier_or_keyword()
                }
                other => {
                    return Err(LexError {
                        message: alloc::format!("unexpected character '{}'", other),
                        line,
                    });
                }
            };
            tokens.push(Token { kind, line });
        }
        tokens.push(Token {
            kind: TokenKind::Eof,
            line: self.line,
        });
        Ok(tokens)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.index + 1 < self.chars.len() && self.chars[self.index + 1] == '/' => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_number(&mut self, line: u32) -> Result<i64, LexError> {
        let start = self.index;
        while self.index < self.chars.len() && self.chars[self.index].is_ascii_digit() {
            self.index += 1;
        }
        let text: String = self.chars[start..self.index].iter().collect();
        text.parse().map_err(|_| LexError {
            message: alloc::format!("integer literal '{}' out of range", text),
            line,
        })
    }

    fn scan_identifier_or_keyword(&mut self) -> TokenKind {
        let start = self.index;
        while self.index < self.chars.len() && is_ident_continue(self.chars[self.index]) {
            self.index += 1;
        }
        let text: String = self.chars[start..self.index].iter().collect();
        match text.as_str() {
            "let" => TokenKind::Let,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "return" => TokenKind::Return,
            "nil" => TokenKind::Nil,
            "print" => TokenKind::Print,
            _ => TokenKind::Ident(text.into_boxed_str()),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .scan()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scans_arithmetic_expression() {
        assert_eq!(
            kinds("1 + 2 * 3;"),
            crate::vec![
                TokenKind::Int(1),
                TokenKind::Plus,
                TokenKind::Int(2),
                TokenKind::Star,
                TokenKind::Int(3),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn scans_keywords_and_identifiers() {
        assert_eq!(
            kinds("let x = nil;"),
            crate::vec![
                TokenKind::Let,
                TokenKind::Ident("x".into()),
                TokenKind::Equal,
                TokenKind::Nil,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators_are_not_split() {
        assert_eq!(
            kinds("a != b == c <= d >= e"),
            crate::vec![
                TokenKind::Ident("a".into()),
                TokenKind::BangEqual,
                TokenKind::Ident("b".into()),
                TokenKind::EqualEqual,
                TokenKind::Ident("c".into()),
                TokenKind::LessEqual,
                TokenKind::Ident("d".into()),
                TokenKind::GreaterEqual,
                TokenKind::Ident("e".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn tracks_line_numbers_across_newlines() {
        let tokens = Lexer::new("1;\n2;\n3;").scan().unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, crate::vec![1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("1 // a trailing comment\n+ 2"),
            crate::vec![TokenKind::Int(1), TokenKind::Plus, TokenKind::Int(2), TokenKind::Eof]
        );
    }

    #[test]
    fn identifier_at_end_of_input_is_not_over_read() {
        // Regression test for the off-by-one scan bug noted in the
        // module docs: an identifier as the very last characters of the
        // source must not cause the scanner to read past the end.
        assert_eq!(
            kinds("foo"),
            crate::vec![TokenKind::Ident("foo".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn digit_at_end_of_input_is_not_over_read() {
        assert_eq!(kinds("42"), crate::vec![TokenKind::Int(42), TokenKind::Eof]);
    }

    #[test]
    fn unknown_character_is_an_error() {
        let err = Lexer::new("1 + @").scan().unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn integer_literal_exceeding_i64_is_a_lex_error_not_a_panic() {
        let err = Lexer::new("print 99999999999999999999;").scan().unwrap_err();
        assert_eq!(err.line, 1);
    }
}
