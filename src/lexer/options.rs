/// How a `>` at the start of an operator is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreaterThanMode {
    /// `>` and `>=`.
    #[default]
    Fixed,
    /// `<` and `<=`, as older versions of the query lexer produced.
    Legacy,
}

/// What happens to a character that belongs to no lexeme class (`.`, `;`, quotes, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCharacterPolicy {
    /// Discard it without ending the current run.
    #[default]
    Drop,
    /// Fail with `UnrecognisedCharacter`.
    Reject,
}

/// How `\n`, `\r` and form feed are treated. Only space and tab always end a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreakPolicy {
    /// Handled like any other unknown character: see `UnknownCharacterPolicy`.
    #[default]
    Drop,
    /// Treated as whitespace, ending the current run.
    Separate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerOptions {
    pub greater_than: GreaterThanMode,
    pub unknown_characters: UnknownCharacterPolicy,
    pub line_breaks: LineBreakPolicy,
}

impl LexerOptions {
    pub fn strict() -> Self {
        LexerOptions {
            unknown_characters: UnknownCharacterPolicy::Reject,
            ..Default::default()
        }
    }

    pub fn with_greater_than(mut self, mode: GreaterThanMode) -> Self {
        self.greater_than = mode;
        self
    }

    pub fn with_line_breaks(mut self, policy: LineBreakPolicy) -> Self {
        self.line_breaks = policy;
        self
    }

    pub fn with_unknown_characters(mut self, policy: UnknownCharacterPolicy) -> Self {
        self.unknown_characters = policy;
        self
    }
}
