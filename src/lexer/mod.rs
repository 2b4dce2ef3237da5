// Author: Dustin Pilgrim
// License: MIT

use std::str::Lines;
use crate::IniError;

mod scanner;
mod tokenizer;

pub(crate) use scanner::{needs_quoting, quote};

/// One classified line of INI text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Blank,
    Comment(String),
    /// `[name]`, name trimmed.
    Section(String),
    /// `key = value` or `key[] = value`; the value is already unquoted.
    Assign {
        key: String,
        append: bool,
        value: String,
    },
    Eof,
}

pub struct Lexer<'a> {
    input: Lines<'a>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.strip_prefix('\u{feff}').unwrap_or(input).lines(),
            line: 0,
        }
    }

    /// Number of the line most recently returned, 1-based.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Token, IniError> {
        match self.input.next() {
            Some(raw) => {
                self.line += 1;
                tokenizer::classify_line(raw, self.line)
            }
            None => Ok(Token::Eof),
        }
    }
}
