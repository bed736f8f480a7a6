//! Lexer for tokenizing date pattern strings.
//!
//! At every position the lexer tries, in priority order:
//! - the literal `yyyy`
//! - the pairs `dd`, `MM` and `HH`
//! - a single `a` or `A`
//! - a run of `w`
//! - the longest run of characters from `yMdHmsw`
//! - a `"..."` or `'...'` quoted run, when the closing quote exists
//!
//! Anything else is a literal character. Matched runs that are not one of the
//! seven known tokens come out as `Token::Unknown`, so `mmss` is a single
//! unknown token rather than `mm` followed by `ss`.

use crate::ast::DateField;
use crate::parser::tokens::{SpannedToken, Token};

/// Fixed two-character tokens tried after `yyyy`, in order.
const PAIRS: [&str; 3] = ["dd", "MM", "HH"];

/// Returns true for characters that may form a date token run.
fn is_field_char(c: char) -> bool {
    matches!(c, 'y' | 'M' | 'd' | 'H' | 'm' | 's' | 'w')
}

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> SpannedToken {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            };
        };

        let token = if self.remaining().starts_with("yyyy") {
            self.position += 4;
            Token::Field(DateField::Year4)
        } else if let Some(pair) = PAIRS.iter().find(|p| self.remaining().starts_with(**p)) {
            self.position += pair.len();
            self.classify(start)
        } else {
            match ch {
                'a' | 'A' => {
                    self.advance();
                    Token::Unknown(ch.to_string())
                }
                'w' => {
                    self.count_run(|c| c == 'w');
                    self.classify(start)
                }
                c if is_field_char(c) => {
                    self.count_run(is_field_char);
                    self.classify(start)
                }
                '"' | '\'' => match self.lex_quoted(ch) {
                    Some(token) => token,
                    None => {
                        self.advance();
                        Token::Literal(ch)
                    }
                },
                _ => {
                    self.advance();
                    Token::Literal(ch)
                }
            }
        };

        SpannedToken {
            token,
            start,
            end: self.position,
        }
    }

    /// Looks up the text consumed since `start` in the token table.
    fn classify(&self, start: usize) -> Token {
        let text = &self.input[start..self.position];
        match DateField::from_token(text) {
            Some(field) => Token::Field(field),
            None => Token::Unknown(text.to_string()),
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the remaining input as a string slice.
    fn remaining(&self) -> &str {
        &self.input[self.position..]
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive characters matching the predicate.
    fn count_run<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if predicate(ch) {
                count += 1;
                self.advance();
            } else {
                break;
            }
        }
        count
    }

    /// Lexes a quoted run. Returns `None` and consumes nothing when the quote is
    /// never closed.
    fn lex_quoted(&mut self, quote: char) -> Option<Token> {
        let body = &self.remaining()[quote.len_utf8()..];
        let close = body.find(quote)?;
        let content = body[..close].to_string();
        self.position += quote.len_utf8() * 2 + close;
        Some(Token::Quoted(content))
    }

    /// Returns all remaining tokens as a vector, ending with `Eof`.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().token, Token::Eof);
    }

    #[test]
    fn test_year_then_leftover() {
        assert_eq!(
            kinds("yyyyy"),
            vec![
                Token::Field(DateField::Year4),
                Token::Unknown("y".into()),
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_spans_cover_multibyte_literals() {
        let tokens = Lexer::new("MM月").tokenize();
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!(tokens[1].token, Token::Literal('月'));
        assert_eq!((tokens[1].start, tokens[1].end), (2, 5));
    }

    #[test]
    fn test_unclosed_quote_is_literal() {
        assert_eq!(
            kinds("'dd"),
            vec![
                Token::Literal('\''),
                Token::Field(DateField::Day2),
                Token::Eof
            ]
        );
    }
}
