//! A small `nom::error::ParseError` implementation that lets the two parsing
//! passes ([`crate::simplify`] and [`crate::parser::regex`]) raise a
//! [`RegexError`] directly from inside a combinator instead of translating a
//! generic [`nom::error::ErrorKind`] after the fact.

use crate::error::RegexError;
use nom::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NomError<'a>(pub RegexError, pub &'a str);

pub type PResult<'a, T> = nom::IResult<&'a str, T, NomError<'a>>;

impl<'a> nom::error::ParseError<&'a str> for NomError<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        NomError(RegexError::TrailingInput(input.to_string()), input)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Raises `err` as a non-backtrackable `nom::Err::Failure`.
pub fn fail<'a, T>(input: &'a str, err: RegexError) -> PResult<'a, T> {
    Err(nom::Err::Failure(NomError(err, input)))
}
