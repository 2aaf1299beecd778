//! Lexical analysis for the query language.
//!
//! Tokenization runs in two passes:
//!
//! - the splitter cuts the query into raw lexemes, merging two-character
//!   operators and chunking runs of `[a-zA-Z0-9_]`
//! - the lexer classifies each lexeme as a keyword, operator, number or
//!   identifier
//!
//! Classification tables live in [`tokens`] and are built once per process.

pub mod lexer;
pub mod options;
pub mod splitter;
pub mod tokens;
