//! # dandy
//!
//! `dandy` is a regular-expression engine built on the Thompson
//! construction: patterns are desugared, compiled to an NFA, converted to a
//! DFA via subset construction, and executed in input-linear time without
//! backtracking.
//!
//! ## Usage
//!
//! ```rust
//! use dandy::Regex;
//!
//! let re = Regex::compile("a?(b|bc|[de]*)*f+").unwrap();
//! assert!(re.fullmatch("abcdeeff").is_some());
//! assert!(re.match_("abcdeeff").is_some());
//! assert_eq!(re.findall("aff bff").len(), 2);
//! ```
//!
//! ## Pattern syntax
//!
//! See [`parser`] for the grammar and [`simplify`] for how `{n}`, `{n,}` and
//! `{n,m}` counted repetition is desugared before parsing.
//!
//! ## Operations
//!
//! This library supports:
//!
//! * [Compiling patterns](Regex::compile) to [DFAs](dfa::Dfa) via an
//!   intermediate [NFA](nfa::Nfa)
//! * [`match_`](Regex::match_), [`fullmatch`](Regex::fullmatch),
//!   [`search`](Regex::search), [`finditer`](Regex::finditer),
//!   [`findall`](Regex::findall) and [`sub`](Regex::sub)
//! * [Step-by-step evaluation](dfa::Dfa::evaluator) of a string against a
//!   DFA or [NFA](nfa::Nfa::evaluator)

pub mod constants;
pub mod dfa;
pub mod error;
pub mod matcher;
pub mod nfa;
pub mod parser;
pub mod regex;
pub mod simplify;

pub use matcher::{Match, Regex};

#[cfg(test)]
mod tests;
