use crate::lexer::{Lexer, Token};
use crate::IniError;
use crate::ast::Document;

mod array;
mod document;
mod name;

pub use array::parse_array;
pub use name::validate_item_name;
pub(crate) use name::ensure_valid_name;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Option<Token>,
    peek_line: usize,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, IniError> {
        let mut lexer = Lexer::new(input);
        let peek = Some(lexer.next_token()?);
        let peek_line = lexer.line();
        Ok(Self {
            lexer,
            peek,
            peek_line,
            line: 0,
        })
    }

    pub(crate) fn bump(&mut self) -> Result<Token, IniError> {
        let curr = self.peek.take().unwrap_or(Token::Eof);
        self.line = self.peek_line;
        if curr != Token::Eof {
            self.peek = Some(self.lexer.next_token()?);
            self.peek_line = self.lexer.line();
        }
        Ok(curr)
    }

    /// Line of the token most recently returned by `bump`.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub fn parse_document(&mut self) -> Result<Document, IniError> {
        document::parse_document(self)
    }
}

/// Parse INI text into a [`Document`].
///
/// Empty or whitespace-only input gives an empty document. Any other input
/// must be fully valid: the first bad line or name fails the whole parse.
///
/// # Examples
/// ```
/// use ini_cfg::{parse_ini_string, Value};
///
/// let doc = parse_ini_string("[server]\nport = 8080\n").unwrap();
/// assert_eq!(doc.get("server", "port"), Some(&Value::Integer(8080)));
/// ```
pub fn parse_ini_string(input: &str) -> Result<Document, IniError> {
    if input.trim().is_empty() {
        return Ok(Document::new());
    }

    let document = Parser::new(input)?.parse_document()?;
    tracing::debug!(sections = document.len(), "Parsed INI text");
    Ok(document)
}
