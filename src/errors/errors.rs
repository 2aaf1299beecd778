use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at position {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The text the error was raised on: the whole lexeme for classification
    /// failures, the single character for splitter failures.
    pub fn get_lexeme(&self) -> String {
        match &self.internal_error {
            ErrorImpl::MalformedNumericLexeme { lexeme } => lexeme.clone(),
            ErrorImpl::InternalClassificationGap { lexeme } => lexeme.clone(),
            ErrorImpl::UnterminatedDoubledOperator { operator, .. } => operator.to_string(),
            ErrorImpl::UnrecognisedCharacter { character } => character.to_string(),
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedNumericLexeme { .. } => "MalformedNumericLexeme",
            ErrorImpl::UnterminatedDoubledOperator { .. } => "UnterminatedDoubledOperator",
            ErrorImpl::InternalClassificationGap { .. } => "InternalClassificationGap",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedNumericLexeme { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, numbers may only contain digits",
                lexeme
            )),
            ErrorImpl::UnterminatedDoubledOperator { operator, found } => {
                let found = match found {
                    Some(c) => format!("`{}`", c.escape_default()),
                    None => String::from("end of input"),
                };
                ErrorTip::Suggestion(format!(
                    "Expected `{}{}`, found `{}` followed by {}",
                    operator, operator, operator, found
                ))
            }
            ErrorImpl::InternalClassificationGap { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the query language",
                character.escape_default()
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("malformed numeric lexeme: {lexeme:?}")]
    MalformedNumericLexeme { lexeme: String },
    #[error("unterminated doubled operator {operator:?}, found {found:?}")]
    UnterminatedDoubledOperator { operator: char, found: Option<char> },
    #[error("lexeme matches no token class: {lexeme:?}")]
    InternalClassificationGap { lexeme: String },
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
}
