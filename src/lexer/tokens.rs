use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, stored uppercase. Matching is case-insensitive.
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("SELECT");
        set.insert("FROM");
        set.insert("WHERE");
        set.insert("DELETE");
        set.insert("TABLE");
        set
    };

    /// Every lexeme classified as an operator or punctuation. Case-sensitive.
    pub static ref OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("+");
        set.insert("-");
        set.insert("*");
        set.insert("/");
        set.insert("!");
        set.insert("(");
        set.insert(")");
        set.insert(",");
        set.insert("<");
        set.insert("<>");
        set.insert("<=");
        set.insert(">");
        set.insert(">=");
        set.insert("==");
        set.insert("&&");
        set.insert("||");
        set
    };

    /// Characters that end the current run and always form a lexeme of their own.
    pub static ref SYMBOL_CHARS: HashSet<char> = {
        let mut set = HashSet::new();
        set.insert('+');
        set.insert('-');
        set.insert('*');
        set.insert('/');
        set.insert('!');
        set.insert(')');
        set.insert('(');
        set.insert(',');
        set
    };

    pub static ref NUMBER_LITERAL: Regex = Regex::new("^[0-9]+$").unwrap();
}

/// Returns the normalized (uppercase) keyword if `text` is one.
pub fn as_keyword(text: &str) -> Option<String> {
    let upper = text.to_ascii_uppercase();

    if KEYWORDS.contains(upper.as_str()) {
        Some(upper)
    } else {
        None
    }
}

pub fn is_operator(text: &str) -> bool {
    OPERATORS.contains(text)
}

/// Characters accumulated into a run: `[a-zA-Z0-9_]`.
pub fn is_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Op,
    Num,
    Id,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Op => "OP",
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
