//! An incremental DFA evaluator for feeding characters one at a time.

use crate::dfa::{Dfa, DfaState};

#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current_state: usize,
}

impl<'a> DfaEvaluator<'a> {
    pub fn is_accepting(&self) -> bool {
        self.current_state().accepting
    }

    pub fn current_state(&self) -> &DfaState {
        &self.dfa.states()[self.current_state]
    }

    pub fn current_state_idx(&self) -> usize {
        self.current_state
    }

    pub fn is_in_sink(&self) -> bool {
        self.current_state == self.dfa.sink()
    }

    pub fn step(&mut self, c: char) -> &DfaState {
        self.current_state = self.dfa.step(self.current_state, c);
        self.current_state()
    }

    pub fn step_str(&mut self, s: &str) -> &DfaState {
        for c in s.chars() {
            self.step(c);
        }
        self.current_state()
    }
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(value: &'a Dfa) -> Self {
        DfaEvaluator {
            dfa: value,
            current_state: value.initial_state(),
        }
    }
}
