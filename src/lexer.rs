//! Lexer module for EDTF expressions
//!
//! Tokenization is handled entirely by logos. The grammar engine needs the
//! byte span of every token: syntax errors are reported as byte offsets and
//! the free-text season qualifier is sliced straight out of the source.
//!
//! Characters that are not part of the EDTF alphabet are not dropped. They
//! come through as [`Token::Other`] so the grammar can reject them at the
//! right offset.

pub mod tokens;

use logos::Logos;
use std::ops::Range;

pub use tokens::Token;

/// Token paired with its byte range in the source
pub type TokenSpan = (Token, Range<usize>);

/// Convenience function to tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .map(|result| result.unwrap_or(Token::Other))
        .collect()
}

/// Convenience function to tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<TokenSpan> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.unwrap_or(Token::Other), lexer.span()));
    }

    tokens
}
