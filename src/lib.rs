//! # edtf
//!
//! A parser for the Extended Date/Time Format (EDTF), levels 0 and 1.
//!
//! The input goes through two stages:
//!
//! - [`lexer`]: logos tokenization into single-character tokens with byte spans
//! - [`parser`]: an ordered-choice recursive descent grammar over those tokens,
//!   producing an [`Edtf`] result tree or a [`SyntaxError`] at the furthest
//!   offset any alternative reached
//!
//! ```text
//! parse("2004-06~-11")  -> Date, year and month approximate, day exact
//! parse("1984?~")       -> Date, year uncertain and approximate
//! parse("y17101e4p3")   -> Date, exponential long year
//! parse("2001-21")      -> Season, spring 2001
//! parse("2004/open")    -> Interval with an open end
//! ```
//!
//! Around the grammar engine sit the pieces used by the `edtf` binary:
//! [`config`] for layered TOML configuration, [`formats`] for rendering
//! results, and [`processor`] for working through expressions and files.

pub mod ast;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod trace;

pub use ast::Edtf;
pub use error::{ProcessingError, SyntaxError};
pub use parser::{parse, parse_level0, parse_level1, EdtfParser, Level, ParseOptions, Traced};
pub use trace::TraceEvent;
