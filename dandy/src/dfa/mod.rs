//! # Deterministic Finite Automaton
//!
//! A [`Dfa`] is produced exclusively by [`crate::nfa::Nfa::to_dfa`] (subset
//! construction). Like [`crate::nfa::Nfa`] it is an arena of states
//! addressed by `usize`. Each [`DfaState`]'s transition map is partial
//! (`HashMap<char, usize>`), and any token missing from it resolves to the
//! automaton's dedicated `sink` state — a single trap state that every
//! otherwise-undefined transition lands on, keeping the automaton total
//! without needing an entry for every alphabet character in every state.

pub mod eval;

use std::collections::HashMap;

use crate::nfa::{Nfa, NfaState};

/// A single state of a [`Dfa`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    pub(crate) id: usize,
    pub accepting: bool,
    pub transitions: HashMap<char, usize>,
}

impl DfaState {
    pub(crate) fn new(id: usize, accepting: bool) -> Self {
        DfaState {
            id,
            accepting,
            transitions: HashMap::new(),
        }
    }
}

/// A deterministic finite automaton over `char`, with an explicit sink
/// (trap) state for characters with no defined transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    initial_state: usize,
    sink: usize,
}

impl Dfa {
    pub(crate) fn from_parts(states: Vec<DfaState>, initial_state: usize, sink: usize) -> Self {
        Dfa {
            states,
            initial_state,
            sink,
        }
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn initial_state(&self) -> usize {
        self.initial_state
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn evaluator(&self) -> eval::DfaEvaluator<'_> {
        eval::DfaEvaluator::from(self)
    }

    /// Follows one transition, falling back to the sink when `token` has no
    /// explicit edge from `from`.
    pub fn step(&self, from: usize, token: char) -> usize {
        *self.states[from].transitions.get(&token).unwrap_or(&self.sink)
    }

    /// Returns the length of the longest prefix of `s` accepted by this DFA,
    /// or `None` if no prefix (including the empty one) is accepted. The
    /// result is the right-most index at which the evaluator was in an
    /// accepting state, matching the NFA's contract so the matcher façade
    /// can treat both automata uniformly.
    pub fn accepts(&self, s: &str) -> Option<usize> {
        let mut eval = self.evaluator();
        let mut best = if eval.is_accepting() { Some(0) } else { None };

        for (i, c) in s.chars().enumerate() {
            eval.step(c);
            if eval.is_in_sink() {
                break;
            }
            if eval.is_accepting() {
                best = Some(i + 1);
            }
        }

        best
    }

    /// Converts this DFA back into an equivalent NFA: every transition
    /// becomes a singleton-target NFA transition, the sink state included.
    pub fn to_nfa(&self) -> Nfa {
        let states: Vec<NfaState> = self
            .states
            .iter()
            .map(|s| {
                let mut ns = NfaState::new(s.id);
                ns.accepting = s.accepting;
                for (&c, &target) in &s.transitions {
                    ns.transitions.entry(c).or_default().push(target);
                }
                ns
            })
            .collect();
        Nfa::from_parts(states, self.initial_state)
    }
}
