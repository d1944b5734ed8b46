//! Postfix regular expression validation and stack-machine compilation.

use crate::automaton::{Nfa, is_epsilon, is_literal};
use thiserror::Error;

/// Binary concatenation operator token.
pub const CONCAT: char = '.';
/// Binary alternation operator token.
pub const ALTERNATE: char = '+';
/// Unary Kleene closure operator token.
pub const CLOSURE: char = '*';

/// A postfix pattern rejected by [`validate`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid regular expression.")]
pub struct InvalidPatternError;

/// Check that `pattern` is a well-formed postfix expression.
///
/// Runs an operand-count simulation: atoms push one operand, closure is net
/// zero, the binary operators consume two operands and produce one. The
/// pattern is valid iff the count never drops below 1 after any token and
/// ends at exactly 1. Any token outside the grammar fails immediately.
pub fn validate(pattern: &str) -> bool {
    let mut operands: i64 = 0;
    for token in pattern.chars() {
        match token {
            t if is_literal(t) || is_epsilon(t) => operands += 1,
            CONCAT | ALTERNATE => operands -= 1,
            CLOSURE => {}
            _ => return false,
        }
        if operands < 1 {
            return false;
        }
    }
    operands == 1
}

/// Evaluate a validated postfix pattern into its Thompson NFA.
///
/// The empty pattern compiles to the single-state machine. For anything
/// else the pattern must have passed [`validate`]; feeding an unvalidated
/// pattern here is a programming error and aborts.
pub fn compile(pattern: &str) -> Nfa {
    if pattern.is_empty() {
        return Nfa::empty();
    }
    assert!(
        validate(pattern),
        "compile called on a pattern the validator rejects"
    );

    let mut machines: Vec<Nfa> = Vec::new();
    for token in pattern.chars() {
        match token {
            t if is_literal(t) || is_epsilon(t) => machines.push(Nfa::atom(t)),
            CLOSURE => {
                let operand = machines.pop().expect("closure with no operand");
                machines.push(Nfa::kleene(operand));
            }
            ALTERNATE => {
                let right = machines.pop().expect("alternation with no right operand");
                let left = machines.pop().expect("alternation with no left operand");
                machines.push(Nfa::alternate(left, right));
            }
            CONCAT => {
                let right = machines.pop().expect("concatenation with no right operand");
                let left = machines.pop().expect("concatenation with no left operand");
                machines.push(Nfa::concatenate(left, right));
            }
            _ => unreachable!("validator admits no other tokens"),
        }
    }

    assert_eq!(
        machines.len(),
        1,
        "postfix evaluation must end with exactly one machine"
    );
    machines.pop().expect("stack checked non-empty above")
}

/// Validate and compile `pattern` in one step.
pub fn parse(pattern: &str) -> Result<Nfa, InvalidPatternError> {
    if validate(pattern) {
        Ok(compile(pattern))
    } else {
        Err(InvalidPatternError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::EPSILON;

    #[test]
    fn test_validate_accepts_grammar() {
        assert!(validate("a"));
        assert!(validate("1"));
        assert!(validate("aa."));
        assert!(validate("a*"));
        assert!(validate("ab+"));
        assert!(validate("ab.*"));
        assert!(validate("bc.ab.+*"));
    }

    #[test]
    fn test_validate_rejects_operator_underflow() {
        assert!(!validate(".*"));
        assert!(!validate("*"));
        assert!(!validate("a+"));
        assert!(!validate("ab.."));
    }

    #[test]
    fn test_validate_rejects_leftover_operands() {
        assert!(!validate("ab"));
        assert!(!validate("abc"));
        assert!(!validate("ab.c"));
    }

    #[test]
    fn test_validate_rejects_foreign_tokens() {
        assert!(!validate("d"));
        assert!(!validate("a b."));
        assert!(!validate("a2."));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(!validate(""));
    }

    #[test]
    fn test_compile_empty_pattern() {
        let nfa = compile("");
        assert_eq!(nfa.state_count(), 1);
        assert!(nfa.is_final(nfa.initial()));
    }

    #[test]
    fn test_compile_single_atom() {
        let nfa = compile("a");
        assert_eq!(nfa.state_count(), 2);
        assert_eq!(nfa.transitions(), &[(0, 'a', 1)]);
    }

    #[test]
    fn test_compile_epsilon_atom() {
        let nfa = compile("1");
        assert_eq!(nfa.transitions(), &[(0, EPSILON, 1)]);
    }

    #[test]
    fn test_compile_pops_right_operand_first() {
        // "ab." must sequence a before b, not the other way around
        let nfa = compile("ab.");
        assert!(nfa.transitions().contains(&(0, 'a', 1)));
        assert!(nfa.transitions().contains(&(2, 'b', 3)));
        assert!(nfa.transitions().contains(&(1, EPSILON, 2)));
    }

    #[test]
    fn test_compile_nested_expression() {
        // (bc)|(ab) starred
        let nfa = compile("bc.ab.+*");
        let finals: Vec<_> = nfa.finals().collect();
        assert_eq!(finals, vec![0]);
        assert_eq!(nfa.state_count(), 10);
    }

    #[test]
    fn test_parse_rejects_with_diagnostic() {
        let err = parse(".*").unwrap_err();
        assert_eq!(err.to_string(), "Invalid regular expression.");
    }

    #[test]
    fn test_parse_accepts_valid_pattern() {
        assert!(parse("ab+").is_ok());
    }
}
