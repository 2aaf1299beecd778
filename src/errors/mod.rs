//! Error types for lexical analysis.
//!
//! Every failure the lexer can raise is a value of [`errors::Error`],
//! carrying the failure kind, the offending text, and the byte position
//! where it was found. Nothing in this crate aborts the process.

pub mod errors;
