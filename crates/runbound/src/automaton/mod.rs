//! Automaton data structures for Thompson's construction.
//!
//! This module provides:
//! - State ids and bitset-backed state sets
//! - Char symbols with a distinguished epsilon marker
//! - An NFA multigraph with the Thompson combinators
//!   (atom, concatenation, alternation, Kleene closure)

mod nfa;
mod state;
mod symbol;

pub use nfa::{Nfa, Transition};
pub use state::{StateId, StateSet};
pub use symbol::{EPSILON, LITERALS, Symbol, is_epsilon, is_literal};
