//! Token types for the date pattern lexer.

use crate::ast::DateField;

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A recognized date/time token such as `yyyy` or `MM`
    Field(DateField),
    /// A run the tokenizer matched that has no renderer, e.g. `mmss` or `a`
    Unknown(String),
    /// A `"..."` or `'...'` run; holds the text between the quotes
    Quoted(String),
    /// Any character the tokenizer does not match
    Literal(char),

    // End of input
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
