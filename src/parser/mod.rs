//! Parser for date pattern strings.

pub mod lexer;
pub mod tokens;

use crate::ast::{DatePattern, PatternPart};
use lexer::Lexer;
use tokens::Token;

/// Parse a pattern string into a DatePattern.
///
/// Adjacent literal characters are merged into one `PatternPart::Literal`.
pub fn parse(pattern: &str) -> DatePattern {
    let mut parts = Vec::new();
    let mut literal = String::new();

    for spanned in Lexer::new(pattern).tokenize() {
        if let Token::Literal(ch) = spanned.token {
            literal.push(ch);
            continue;
        }

        if !literal.is_empty() {
            parts.push(PatternPart::Literal(std::mem::take(&mut literal)));
        }

        match spanned.token {
            Token::Field(field) => parts.push(PatternPart::Field(field)),
            Token::Unknown(token) => parts.push(PatternPart::Unknown {
                token,
                position: spanned.start,
            }),
            Token::Quoted(content) => parts.push(PatternPart::Quoted(content)),
            Token::Literal(_) | Token::Eof => {}
        }
    }

    DatePattern::from_parts(parts)
}
