use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN,
};

use super::{
    options::{GreaterThanMode, LexerOptions, LineBreakPolicy, UnknownCharacterPolicy},
    tokens::{is_run_char, SYMBOL_CHARS},
};

/// A raw piece of the query, not yet classified.
///
/// `span` covers the source range the lexeme was read from. For a run that
/// swallowed dropped characters (`a.b` becomes `ab`) the span is wider than
/// the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub text: String,
    pub span: Span,
}

/// Single-pass scanner behind `split`.
///
/// The cursor is private; only `run` moves it.
///
/// ```compile_fail
/// use querylex::lexer::{options::LexerOptions, splitter::Splitter};
///
/// let mut splitter = Splitter::new("é", LexerOptions::default());
/// splitter.advance_n(1);
/// ```
pub struct Splitter<'a> {
    source: &'a str,
    pos: usize,
    run: String,
    run_start: usize,
    lexemes: Vec<Lexeme>,
    options: LexerOptions,
    // Some(..) when recovering: errors are collected instead of returned.
    errors: Option<Vec<Error>>,
}

impl<'a> Splitter<'a> {
    pub fn new(source: &'a str, options: LexerOptions) -> Splitter<'a> {
        Splitter {
            source,
            pos: 0,
            run: String::new(),
            run_start: 0,
            lexemes: vec![],
            options,
            errors: None,
        }
    }

    pub fn recovering(mut self) -> Self {
        self.errors = Some(vec![]);
        self
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, lexeme: Lexeme) {
        trace!(lexeme = %lexeme.text, start = lexeme.span.start.0, "split lexeme");
        self.lexemes.push(lexeme);
    }

    fn emit(&mut self, text: &str) {
        let span = MK_SPAN!(self.pos, text.len());
        self.push(Lexeme {
            text: text.to_string(),
            span,
        });
        self.advance_n(text.len());
    }

    fn flush(&mut self) {
        if !self.run.is_empty() {
            let text = std::mem::take(&mut self.run);
            let span = Span::new(self.run_start, self.pos);
            self.push(Lexeme { text, span });
        }
    }

    fn report(&mut self, error: Error) -> Result<(), Error> {
        match &mut self.errors {
            Some(errors) => {
                errors.push(error);
                Ok(())
            }
            None => Err(error),
        }
    }

    fn split_less(&mut self) {
        match self.peek() {
            Some('>') => self.emit("<>"),
            Some('=') => self.emit("<="),
            _ => self.emit("<"),
        }
    }

    fn split_greater(&mut self) {
        let (single, with_equals) = match self.options.greater_than {
            GreaterThanMode::Fixed => (">", ">="),
            GreaterThanMode::Legacy => ("<", "<="),
        };

        match self.peek() {
            Some('=') => self.emit(with_equals),
            _ => self.emit(single),
        }
    }

    fn split_doubled(&mut self, operator: char) -> Result<(), Error> {
        let next = self.peek();

        if next == Some(operator) {
            let doubled: String = [operator, operator].iter().collect();
            self.emit(&doubled);
            return Ok(());
        }

        let position = Position(self.pos as u32);
        self.advance_n(operator.len_utf8());
        self.report(Error::new(
            ErrorImpl::UnterminatedDoubledOperator {
                operator,
                found: next,
            },
            position,
        ))
    }

    fn unknown(&mut self, c: char) -> Result<(), Error> {
        let position = Position(self.pos as u32);
        self.advance_n(c.len_utf8());

        match self.options.unknown_characters {
            UnknownCharacterPolicy::Drop => {
                debug!(character = ?c, position = position.0, "dropping unrecognised character");
                Ok(())
            }
            UnknownCharacterPolicy::Reject => self.report(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: c },
                position,
            )),
        }
    }

    /// Runs the scan to the end of the source.
    ///
    /// Returns the lexemes plus any errors collected while recovering. When
    /// not recovering, the first error is returned instead.
    pub fn run(mut self) -> Result<(Vec<Lexeme>, Vec<Error>), Error> {
        while let Some(c) = self.at() {
            match c {
                ' ' | '\t' => {
                    self.flush();
                    self.advance_n(1);
                }
                '\n' | '\r' | '\x0c' if self.options.line_breaks == LineBreakPolicy::Separate => {
                    self.flush();
                    self.advance_n(1);
                }
                c if SYMBOL_CHARS.contains(&c) => {
                    self.flush();
                    self.emit(c.encode_utf8(&mut [0; 4]));
                }
                c if is_run_char(c) => {
                    if self.run.is_empty() {
                        self.run_start = self.pos;
                    }
                    self.run.push(c);
                    self.advance_n(1);
                }
                '<' => {
                    self.flush();
                    self.split_less();
                }
                '>' => {
                    self.flush();
                    self.split_greater();
                }
                '&' | '|' | '=' => {
                    self.flush();
                    self.split_doubled(c)?;
                }
                _ => self.unknown(c)?,
            }
        }

        self.flush();

        debug_assert!(self.at_eof());
        Ok((self.lexemes, self.errors.unwrap_or_default()))
    }
}

/// Splits `source` into lexemes, stopping at the first error.
pub fn split(source: &str, options: LexerOptions) -> Result<Vec<Lexeme>, Error> {
    let (lexemes, _) = Splitter::new(source, options).run()?;
    Ok(lexemes)
}

/// Splits `source` into lexemes, skipping past every error.
pub fn split_recovering(source: &str, options: LexerOptions) -> (Vec<Lexeme>, Vec<Error>) {
    match Splitter::new(source, options).recovering().run() {
        Ok(result) => result,
        // A recovering splitter reports into its error list and never returns Err.
        Err(error) => (vec![], vec![error]),
    }
}

/// The texts of `split`, without spans.
pub fn split_strings(source: &str, options: LexerOptions) -> Result<Vec<String>, Error> {
    Ok(split(source, options)?
        .into_iter()
        .map(|lexeme| lexeme.text)
        .collect())
}
