//! The abstract syntax tree produced by [`crate::parser::regex`] and its
//! translation into an [`crate::nfa::Nfa`] via Thompson construction.

use crate::constants;
use crate::nfa::{Nfa, NfaState};
use std::collections::BTreeSet;

/// One node of a parsed (already-simplified) pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegexTree {
    /// Concatenation of zero or more sub-expressions.
    Sequence(Vec<RegexTree>),
    /// Alternation between two or more sub-expressions.
    Alt(Vec<RegexTree>),
    /// A sub-expression under `*`, `+` or `?`.
    Repeat(Box<RegexTree>, RepeatKind),
    /// A single literal character.
    Char(char),
    /// A character set (`[...]`, `[^...]` or `.`), already resolved to the
    /// concrete set of characters it matches.
    Set(BTreeSet<char>),
    /// The empty pattern, matching only the empty string.
    Epsilon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    Star,
    Plus,
    Optional,
}

/// A parsed pattern, ready to be turned into an NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pub(crate) tree: RegexTree,
}

impl Regex {
    pub fn new(tree: RegexTree) -> Self {
        Regex { tree }
    }

    /// Builds an NFA via Thompson construction, walking the tree with a
    /// running state counter and composing fragments solely through
    /// `patch`-style rewiring of each fragment's accepting state.
    pub fn to_nfa(&self) -> Nfa {
        let mut states = Vec::new();
        let (start, _end) = build(&self.tree, &mut states);
        Nfa::from_parts(states, start)
    }
}

/// Allocates a fresh non-accepting state and returns its index.
fn new_state(states: &mut Vec<NfaState>) -> usize {
    let idx = states.len();
    states.push(NfaState::new(idx));
    idx
}

/// Adds an epsilon edge `from -> to`.
fn epsilon(states: &mut [NfaState], from: usize, to: usize) {
    states[from].epsilon_transitions.push(to);
}

/// Builds the fragment for `tree`, returning `(start, end)` where `end` is
/// the fragment's single accepting state (never flagged accepting itself —
/// callers that need a terminal accept do so once, at the top of
/// [`Regex::to_nfa`]).
fn build(tree: &RegexTree, states: &mut Vec<NfaState>) -> (usize, usize) {
    match tree {
        RegexTree::Epsilon => {
            let s = new_state(states);
            states[s].accepting = true;
            (s, s)
        }
        RegexTree::Char(c) => {
            let start = new_state(states);
            let end = new_state(states);
            states[start].transitions.entry(*c).or_default().push(end);
            states[end].accepting = true;
            (start, end)
        }
        RegexTree::Set(set) => {
            let start = new_state(states);
            let end = new_state(states);
            for c in set {
                states[start].transitions.entry(*c).or_default().push(end);
            }
            states[end].accepting = true;
            (start, end)
        }
        RegexTree::Sequence(parts) => {
            if parts.is_empty() {
                return build(&RegexTree::Epsilon, states);
            }
            let mut iter = parts.iter();
            let (start, mut end) = build(iter.next().unwrap(), states);
            states[end].accepting = false;
            for part in iter {
                let (s2, e2) = build(part, states);
                epsilon(states, end, s2);
                states[end].accepting = false;
                end = e2;
            }
            (start, end)
        }
        RegexTree::Alt(parts) => {
            let start = new_state(states);
            let end = new_state(states);
            for part in parts {
                let (s, e) = build(part, states);
                epsilon(states, start, s);
                states[e].accepting = false;
                epsilon(states, e, end);
            }
            states[end].accepting = true;
            (start, end)
        }
        RegexTree::Repeat(inner, kind) => {
            let (istart, iend) = build(inner, states);
            states[iend].accepting = false;
            let start = new_state(states);
            let end = new_state(states);
            epsilon(states, start, istart);
            epsilon(states, iend, end);
            match kind {
                RepeatKind::Star => {
                    epsilon(states, start, end);
                    epsilon(states, end, start);
                }
                RepeatKind::Plus => {
                    epsilon(states, end, start);
                }
                RepeatKind::Optional => {
                    epsilon(states, start, end);
                }
            }
            states[end].accepting = true;
            (start, end)
        }
    }
}

/// Resolves `.`'s meaning to the full alphabet.
pub(crate) fn wildcard_set() -> BTreeSet<char> {
    constants::alphabet().iter().copied().collect()
}
