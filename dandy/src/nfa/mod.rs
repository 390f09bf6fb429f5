//! # Nondeterministic Finite Automaton, with or without ε-moves
//!
//! An [`Nfa`] is an arena of [`NfaState`]s addressed by `usize` index —
//! index-based edges side-step the reference-counted-cycle problem a
//! `Rc<RefCell<_>>` graph would otherwise run into, since the loops that
//! implement `*`/`+` make these graphs inherently cyclic. Transitions are
//! keyed directly by `char`, since this crate's automata are always built
//! from regular expressions over a fixed character alphabet (see
//! [`crate::constants::alphabet`]).
//!
//! The only way to build an [`Nfa`] is via [`crate::regex::Regex::to_nfa`]
//! (Thompson construction) or [`Nfa::to_dfa`]'s inverse, [`crate::dfa::Dfa::to_nfa`].

pub mod eval;

use std::collections::{BTreeSet, HashMap};

use crate::dfa::{Dfa, DfaState};

/// A single state of an [`Nfa`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaState {
    pub(crate) id: usize,
    pub accepting: bool,
    pub epsilon_transitions: Vec<usize>,
    pub transitions: HashMap<char, Vec<usize>>,
}

impl NfaState {
    pub(crate) fn new(id: usize) -> Self {
        NfaState {
            id,
            accepting: false,
            epsilon_transitions: Vec::new(),
            transitions: HashMap::new(),
        }
    }
}

/// A nondeterministic finite automaton over `char`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<NfaState>,
    initial_state: usize,
}

impl Nfa {
    pub(crate) fn from_parts(states: Vec<NfaState>, initial_state: usize) -> Self {
        Nfa {
            states,
            initial_state,
        }
    }

    pub fn states(&self) -> &[NfaState] {
        &self.states
    }

    pub fn initial_state(&self) -> usize {
        self.initial_state
    }

    pub fn evaluator(&self) -> eval::NfaEvaluator<'_> {
        eval::NfaEvaluator::from(self)
    }

    /// The iterative epsilon-closure of a set of state indices. Uses a
    /// worklist rather than recursion, since the graph is cyclic for
    /// `*`/`+` and a long chain of epsilon transitions could otherwise
    /// overflow the call stack.
    pub fn closure(&self, start: impl IntoIterator<Item = usize>) -> BTreeSet<usize> {
        let mut seen: BTreeSet<usize> = start.into_iter().collect();
        let mut worklist: Vec<usize> = seen.iter().copied().collect();
        while let Some(s) = worklist.pop() {
            for &next in &self.states[s].epsilon_transitions {
                if seen.insert(next) {
                    worklist.push(next);
                }
            }
        }
        seen
    }

    /// All states reachable from `set` by consuming a single `token`,
    /// *without* re-closing over epsilon transitions — the caller decides
    /// whether and when to close, since some callers (subset construction)
    /// need the pre-closure set to detect a dead/empty move.
    pub fn step(&self, set: &BTreeSet<usize>, token: char) -> BTreeSet<usize> {
        let mut out = BTreeSet::new();
        for &s in set {
            if let Some(targets) = self.states[s].transitions.get(&token) {
                out.extend(targets.iter().copied());
            }
        }
        out
    }

    /// Every `char` that labels at least one outgoing transition from any
    /// state in `set` — used by subset construction to enumerate which
    /// tokens need a DFA transition at all.
    fn outgoing_tokens(&self, set: &BTreeSet<usize>) -> BTreeSet<char> {
        let mut out = BTreeSet::new();
        for &s in set {
            out.extend(self.states[s].transitions.keys().copied());
        }
        out
    }

    fn is_accepting_set(&self, set: &BTreeSet<usize>) -> bool {
        set.iter().any(|&s| self.states[s].accepting)
    }

    /// Returns the length of the longest prefix of `s` accepted by this NFA,
    /// or `None` if no prefix (including the empty one) is accepted: the
    /// right-most index at which the evaluator's active state set contained
    /// an accepting state.
    pub fn accepts(&self, s: &str) -> Option<usize> {
        let mut eval = self.evaluator();
        let mut best = if eval.is_accepting() { Some(0) } else { None };

        for (i, c) in s.chars().enumerate() {
            eval.step(c);
            if eval.current_states_idx().is_empty() {
                break;
            }
            if eval.is_accepting() {
                best = Some(i + 1);
            }
        }

        best
    }

    /// Subset construction: builds an equivalent [`Dfa`] with a dedicated
    /// sink state standing in for the empty/dead subset, so the resulting
    /// automaton is total over every token.
    pub fn to_dfa(&self) -> Dfa {
        let initial_set = self.closure([self.initial_state]);

        let mut dfa_states: Vec<DfaState> = Vec::new();
        let mut set_to_dfa: HashMap<BTreeSet<usize>, usize> = HashMap::new();

        let sink = dfa_states.len();
        dfa_states.push(DfaState::new(sink, false));

        let initial_idx = dfa_states.len();
        dfa_states.push(DfaState::new(initial_idx, self.is_accepting_set(&initial_set)));
        set_to_dfa.insert(initial_set.clone(), initial_idx);

        let mut worklist = vec![initial_set];

        while let Some(set) = worklist.pop() {
            let from_idx = set_to_dfa[&set];
            for token in self.outgoing_tokens(&set) {
                let moved = self.step(&set, token);
                if moved.is_empty() {
                    dfa_states[from_idx].transitions.insert(token, sink);
                    continue;
                }
                let closed = self.closure(moved);
                let to_idx = if let Some(&idx) = set_to_dfa.get(&closed) {
                    idx
                } else {
                    let idx = dfa_states.len();
                    dfa_states.push(DfaState::new(idx, self.is_accepting_set(&closed)));
                    set_to_dfa.insert(closed.clone(), idx);
                    worklist.push(closed);
                    idx
                };
                dfa_states[from_idx].transitions.insert(token, to_idx);
            }
        }

        Dfa::from_parts(dfa_states, initial_idx, sink)
    }
}
