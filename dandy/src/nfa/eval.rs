//! An incremental NFA evaluator, useful for feeding characters to an NFA one
//! at a time (e.g. from an external stream) rather than handing
//! [`crate::nfa::Nfa::accepts`] a whole `&str` up front.

use crate::nfa::{Nfa, NfaState};
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
pub struct NfaEvaluator<'a> {
    nfa: &'a Nfa,
    current_states: BTreeSet<usize>,
}

impl<'a> NfaEvaluator<'a> {
    pub fn is_accepting(&self) -> bool {
        self.current_states().iter().any(|s| s.accepting)
    }

    pub fn current_states(&self) -> Vec<&NfaState> {
        self.current_states
            .iter()
            .map(|&s| &self.nfa.states()[s])
            .collect()
    }

    pub fn current_states_idx(&self) -> &BTreeSet<usize> {
        &self.current_states
    }

    /// Feeds a single character through the automaton, re-closing over
    /// epsilon transitions afterwards.
    pub fn step(&mut self, c: char) {
        let moved = self.nfa.step(&self.current_states, c);
        self.current_states = self.nfa.closure(moved);
    }

    pub fn step_str(&mut self, s: &str) {
        for c in s.chars() {
            self.step(c);
        }
    }
}

impl<'a> From<&'a Nfa> for NfaEvaluator<'a> {
    fn from(value: &'a Nfa) -> Self {
        let current_states = value.closure([value.initial_state()]);
        NfaEvaluator {
            nfa: value,
            current_states,
        }
    }
}
