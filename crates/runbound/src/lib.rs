//! Postfix regular expression to NFA compiler with a repetition-bound
//! analyzer.
//!
//! A postfix pattern over the alphabet `{a, b, c}` (with `1` as the epsilon
//! atom, `.` concatenation, `+` alternation, `*` closure) is compiled into
//! an NFA via Thompson's construction. The analyzer then reports the
//! maximum number of consecutive edges labeled with a chosen symbol along
//! any acyclic walk through the automaton, or that the maximum is
//! unbounded.

pub mod automaton;
pub mod postfix;
pub mod repetition;

pub use automaton::{EPSILON, Nfa, StateId, StateSet, Symbol};
pub use postfix::{InvalidPatternError, compile, parse, validate};
pub use repetition::{RunLength, max_run};
