// 🧱 Bracket Validation - Challenge 4
// Stack-based scan over (), {} and []
//
// Only the six bracket characters are accepted. Any other character makes the
// whole input invalid, even if the brackets around it balance.

use crate::error::{ChallengeError, Result};
use serde_json::Value;

// ============================================================================
// SYMBOLS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Paren,
    Brace,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Open(Bracket),
    Close(Bracket),
}

impl Symbol {
    /// Classify a character; `None` for anything outside the six brackets
    pub fn classify(ch: char) -> Option<Symbol> {
        match ch {
            '(' => Some(Symbol::Open(Bracket::Paren)),
            ')' => Some(Symbol::Close(Bracket::Paren)),
            '{' => Some(Symbol::Open(Bracket::Brace)),
            '}' => Some(Symbol::Close(Bracket::Brace)),
            '[' => Some(Symbol::Open(Bracket::Square)),
            ']' => Some(Symbol::Close(Bracket::Square)),
            _ => None,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check that every opening bracket is closed by its pair, in order
pub fn is_valid(text: &str) -> bool {
    // Holds exactly the unmatched openings seen so far
    let mut stack: Vec<Bracket> = Vec::new();

    for ch in text.chars() {
        match Symbol::classify(ch) {
            Some(Symbol::Open(kind)) => stack.push(kind),
            Some(Symbol::Close(kind)) => {
                if stack.pop() != Some(kind) {
                    return false;
                }
            }
            None => return false,
        }
    }

    stack.is_empty()
}

/// Host-value entry point: input must be a string
pub fn is_valid_value(text: &Value) -> Result<bool> {
    let text = text
        .as_str()
        .ok_or_else(|| ChallengeError::type_error("text must be a string"))?;
    Ok(is_valid(text))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    /// Hand-rolled reference: repeatedly strip adjacent pairs
    fn reduce_pairs(text: &str) -> bool {
        let mut current = text.to_string();
        loop {
            let next = current.replace("()", "").replace("{}", "").replace("[]", "");
            if next == current {
                return current.is_empty();
            }
            current = next;
        }
    }

    #[test]
    fn test_examples() {
        assert!(is_valid("{[()]}"));
        assert!(!is_valid("{[(])}"));
        assert!(!is_valid("{{[[(]]}}"));
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(is_valid(""));
    }

    #[test]
    fn test_unmatched() {
        assert!(!is_valid("("));
        assert!(!is_valid(")"));
        assert!(!is_valid("(()"));
        assert!(!is_valid("())"));
        assert!(is_valid("()[]{}"));
    }

    #[test]
    fn test_disallowed_character_is_invalid() {
        assert!(!is_valid("(a)"));
        assert!(!is_valid("{[()]} "));
        assert!(!is_valid("<>"));
    }

    #[test]
    fn test_agrees_with_pair_reduction() {
        let alphabet = ['(', ')', '{', '}', '[', ']'];
        // Every string of length 0..=4 over the six symbols
        let mut inputs = vec![String::new()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for s in &inputs {
                for ch in alphabet {
                    next.push(format!("{}{}", s, ch));
                }
            }
            for s in &next {
                assert_eq!(is_valid(s), reduce_pairs(s), "mismatch for {:?}", s);
            }
            inputs = next;
        }
    }

    #[test]
    fn test_value_type_error() {
        let err = is_valid_value(&json!(123)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(is_valid_value(&json!("{[()]}")).unwrap());
    }
}
