//! User-facing errors produced while compiling a pattern.
//!
//! Anything that goes wrong once a pattern has been accepted as well-formed
//! is an internal invariant violation, not a [`RegexError`] — those are
//! `panic!`s rather than typed errors, since they indicate a bug in the
//! builder or converter rather than a malformed pattern.

use thiserror::Error;

/// Everything that can reject a pattern during [`crate::simplify::simplify`]
/// or [`crate::parser::regex`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    #[error("a character set may not be empty")]
    EmptySet,

    #[error("unmatched '(' in pattern")]
    UnmatchedParen,

    #[error("unmatched '[' in pattern")]
    UnmatchedBracket,

    #[error("unmatched '{{' in pattern")]
    UnmatchedBrace,

    #[error("malformed repetition count '{{{0}}}'")]
    MalformedRepetition(String),

    #[error("repetition bound {m} is smaller than {n}")]
    InvalidRepetitionRange { n: u32, m: u32 },

    #[error("'{0}' has nothing to repeat")]
    DanglingModifier(char),

    #[error("alternation has an empty arm")]
    EmptyAlternationArm,

    #[error("trailing characters after a complete pattern: '{0}'")]
    TrailingInput(String),
}
