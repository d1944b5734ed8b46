//! Nondeterministic finite automaton built by Thompson's construction.

use crate::automaton::state::StateId;
use crate::automaton::symbol::{EPSILON, Symbol};
use indexmap::IndexSet;

/// A labeled edge: (source, symbol, destination).
pub type Transition = (StateId, Symbol, StateId);

/// An NFA over char-labeled transitions, with a single initial state and a
/// non-empty set of accepting states.
///
/// The transition list is a directed multigraph kept in insertion order, and
/// states iterate in insertion order, so every traversal over the automaton
/// is deterministic.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// States in insertion order.
    states: IndexSet<StateId>,
    /// The designated initial state.
    initial: StateId,
    /// Accepting states, a non-empty subset of `states`.
    finals: IndexSet<StateId>,
    /// Edges in the order they were added.
    transitions: Vec<Transition>,
}

impl Nfa {
    /// The single-state machine: one state that is both initial and final,
    /// no transitions. Seeds the hub of `alternate`.
    pub fn empty() -> Self {
        Self {
            states: IndexSet::from([0]),
            initial: 0,
            finals: IndexSet::from([0]),
            transitions: Vec::new(),
        }
    }

    /// The atomic machine for a single symbol: `0 --symbol--> 1`.
    pub fn atom(symbol: Symbol) -> Self {
        Self {
            states: IndexSet::from([0, 1]),
            initial: 0,
            finals: IndexSet::from([1]),
            transitions: vec![(0, symbol, 1)],
        }
    }

    /// Append a transition. The caller guarantees both endpoints are states
    /// of this automaton.
    pub fn add_transition(&mut self, source: StateId, symbol: Symbol, destination: StateId) {
        self.transitions.push((source, symbol, destination));
    }

    /// Append an epsilon transition.
    pub fn add_epsilon_transition(&mut self, source: StateId, destination: StateId) {
        self.add_transition(source, EPSILON, destination);
    }

    /// Shift every state id by `shift`, preserving insertion order.
    ///
    /// Renumbering by `other.max_state_id() + 1` makes this automaton's id
    /// space disjoint from `other`'s before a merge.
    pub fn renumber(&mut self, shift: StateId) {
        self.initial += shift;
        self.states = self.states.iter().map(|&s| s + shift).collect();
        self.finals = self.finals.iter().map(|&s| s + shift).collect();
        for (source, _, destination) in &mut self.transitions {
            *source += shift;
            *destination += shift;
        }
    }

    /// The largest state id in use, 0 for the single-state machine.
    pub fn max_state_id(&self) -> StateId {
        self.states.iter().copied().max().unwrap_or(0)
    }

    /// The initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Iterate over all states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Iterate over the accepting states in insertion order.
    pub fn finals(&self) -> impl Iterator<Item = StateId> + '_ {
        self.finals.iter().copied()
    }

    /// Check if a state is accepting.
    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    /// The transition list in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Get the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Sequence `first` before `second`.
    ///
    /// `second` is renumbered past `first`'s ids, then every final of
    /// `first` gets an epsilon bridge to `second`'s initial. The result
    /// starts at `first`'s initial and accepts at `second`'s finals.
    pub fn concatenate(first: Nfa, mut second: Nfa) -> Nfa {
        let mut machine = first;
        second.renumber(machine.max_state_id() + 1);

        machine.states.extend(second.states);
        machine.transitions.extend(second.transitions);

        let bridges: Vec<StateId> = machine.finals.iter().copied().collect();
        for from in bridges {
            machine.add_epsilon_transition(from, second.initial);
        }

        machine.finals = second.finals;
        machine
    }

    /// Accept either `first` or `second`.
    ///
    /// A fresh hub state 0 becomes the sole initial state, with epsilon
    /// edges to each operand's (renumbered) initial. Finals are the union
    /// of the operands' finals; the hub itself does not accept.
    pub fn alternate(mut first: Nfa, mut second: Nfa) -> Nfa {
        first.renumber(1);
        second.renumber(first.max_state_id() + 1);

        let first_initial = first.initial;
        let second_initial = second.initial;

        let mut machine = Nfa::empty();
        machine.states.extend(first.states);
        machine.states.extend(second.states);

        machine.finals = first.finals;
        machine.finals.extend(second.finals);

        machine.transitions = first.transitions;
        machine.transitions.extend(second.transitions);

        machine.add_epsilon_transition(0, first_initial);
        machine.add_epsilon_transition(0, second_initial);

        machine
    }

    /// Kleene closure of `operand`.
    ///
    /// A machine whose single final state is its initial state already
    /// accepts zero repetitions of everything it matches, so closure is a
    /// no-op on it. Otherwise a fresh hub state 0 becomes both the initial
    /// and the sole final state, with an epsilon edge into the operand's
    /// initial and an epsilon edge from each operand final back to the hub.
    pub fn kleene(mut operand: Nfa) -> Nfa {
        operand.renumber(1);
        if operand.finals.len() == 1 && operand.finals.contains(&operand.initial) {
            return operand;
        }

        let operand_initial = operand.initial;
        let loop_backs: Vec<StateId> = operand.finals.iter().copied().collect();

        let mut machine = Nfa {
            states: std::iter::once(0).chain(operand.states).collect(),
            initial: 0,
            finals: IndexSet::from([0]),
            transitions: operand.transitions,
        };
        machine.add_epsilon_transition(0, operand_initial);
        for from in loop_backs {
            machine.add_epsilon_transition(from, 0);
        }

        machine
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::empty()
    }
}
