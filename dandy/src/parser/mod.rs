//! # dandy parser
//!
//! This module parses pattern text into a [`crate::regex::Regex`] abstract
//! syntax tree. Patterns are parsed in two passes: [`crate::simplify`]
//! rewrites counted repetition (`{n}`, `{n,}`, `{n,m}`) away at the text
//! level, and [`regex`] (this module's [`regex::full_regex`]) parses the
//! resulting primitive grammar directly into a [`crate::regex::RegexTree`].
//!
//! There are thirteen reserved characters outside of a character set:
//! `^ . * + ? ( ) [ ] { } | \`; inside a `[...]` set only `[ ] \` are
//! reserved. Any reserved character may be used literally by escaping it
//! with `\`. Concatenation is implicit; alternation is `|`; `*`/`+`/`?` are
//! the Kleene operators; `.` matches any character of the alphabet; `(`/`)`
//! group; `[...]`/`[^...]` are character sets.
//!
//! - `(ab)+c` matches one or more repetitions of `ab` followed by `c`
//! - `c(a|b)*c` matches a `c`, then any number of `a`s and `b`s, then a `c`
//!
//! Unlike the table-driven format this crate's ancestor also understood,
//! there is no serialized DFA/NFA file format here — patterns are the only
//! external interface.

pub(crate) mod err;
mod regex;

use crate::error::RegexError;
use crate::regex::Regex;
use crate::simplify::simplify;

/// Parses `input` as a pattern: first desugaring counted repetition, then
/// building the primitive-grammar AST.
pub fn regex(input: &str) -> Result<Regex, RegexError> {
    let simplified = simplify(input)?;
    regex::parse(&simplified)
}
