//! Token definitions for EDTF expressions
//!
//! This module defines all the tokens that can be produced by the EDTF lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//!
//! Digits are never merged into numbers here. Every numeric field in EDTF has a
//! fixed width (years are four digits, months two, and so on), and the grammar
//! enforces those widths itself by looking at single digit tokens.
use logos::Logos;

/// All possible tokens in an EDTF expression
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[regex("[0-9]", |lex| lex.slice().as_bytes()[0] - b'0')]
    Digit(u8),

    // Separators
    #[token("-")]
    Dash,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token(":")]
    Colon,
    #[token("T")]
    TimeSeparator,
    #[token("Z")]
    Zulu,

    // Qualification indicators
    #[token("?")]
    Question,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,

    // Digit replacement markers
    #[token("u")]
    Unspecified,
    #[token("x")]
    Masked,

    // Long year notation: y<digits>, y<mantissa>e<exponent>p<precision>
    #[token("y")]
    LongYearMarker,
    #[token("e")]
    Exponent,
    #[token("p")]
    Precision,

    // Interval endpoint keywords
    #[token("unknown")]
    Unknown,
    #[token("open")]
    Open,

    /// Anything the grammar has no use for (season qualifier text, stray input)
    Other,
}

impl Token {
    /// Check if this token is a decimal digit
    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Digit(_))
    }
}
