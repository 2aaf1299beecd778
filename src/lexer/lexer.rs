use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    options::LexerOptions,
    splitter::{split, split_recovering, Lexeme},
    tokens::{as_keyword, is_identifier_start, is_operator, Token, TokenKind, NUMBER_LITERAL},
};

/// Turns query strings into token sequences.
///
/// A `Lexer` holds only its options; the classification tables are
/// process-wide statics. It is `Copy`, `Send` and `Sync`, and one value can
/// serve any number of threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lexer {
    options: LexerOptions,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Lexer {
        Lexer { options }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    pub fn split(&self, source: &str) -> Result<Vec<Lexeme>, Error> {
        split(source, self.options)
    }

    /// Assigns a kind to one lexeme.
    ///
    /// Keywords win over operators, operators over numbers, numbers over
    /// identifiers. A lexeme matching none of them is an
    /// `InternalClassificationGap`: the splitter never produces one.
    pub fn classify(&self, lexeme: &Lexeme) -> Result<Token, Error> {
        let text = lexeme.text.as_str();

        let token = if let Some(keyword) = as_keyword(text) {
            MK_TOKEN!(TokenKind::Keyword, keyword, lexeme.span)
        } else if is_operator(text) {
            MK_TOKEN!(TokenKind::Op, text.to_string(), lexeme.span)
        } else {
            match text.chars().next() {
                Some(c) if c.is_ascii_digit() => {
                    if !NUMBER_LITERAL.is_match(text) {
                        return Err(Error::new(
                            ErrorImpl::MalformedNumericLexeme {
                                lexeme: text.to_string(),
                            },
                            lexeme.span.start,
                        ));
                    }
                    MK_TOKEN!(TokenKind::Num, text.to_string(), lexeme.span)
                }
                Some(c) if is_identifier_start(c) => {
                    MK_TOKEN!(TokenKind::Id, text.to_string(), lexeme.span)
                }
                _ => {
                    return Err(Error::new(
                        ErrorImpl::InternalClassificationGap {
                            lexeme: text.to_string(),
                        },
                        lexeme.span.start,
                    ))
                }
            }
        };

        trace!(kind = %token.kind, value = %token.value, "classified lexeme");
        Ok(token)
    }

    /// Tokenizes `source`, failing on the first lexical error.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        let tokens = self
            .split(source)?
            .iter()
            .map(|lexeme| self.classify(lexeme))
            .collect::<Result<Vec<Token>, Error>>()?;

        debug!(tokens = tokens.len(), "tokenized query");
        Ok(tokens)
    }

    /// Tokenizes `source`, collecting every lexical error instead of stopping.
    ///
    /// Offending characters and lexemes are skipped; everything else is
    /// tokenized as usual, in source order. Errors are sorted by position.
    pub fn tokenize_recovering(&self, source: &str) -> (Vec<Token>, Vec<Error>) {
        let (lexemes, mut errors) = split_recovering(source, self.options);
        let mut tokens = Vec::with_capacity(lexemes.len());

        for lexeme in &lexemes {
            match self.classify(lexeme) {
                Ok(token) => tokens.push(token),
                Err(error) => errors.push(error),
            }
        }

        errors.sort_by_key(|error| *error.get_position());

        debug!(
            tokens = tokens.len(),
            errors = errors.len(),
            "tokenized query with recovery"
        );
        (tokens, errors)
    }
}

/// Tokenizes `source` with default options.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::default().tokenize(source)
}
