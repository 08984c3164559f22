// 🔁 Palindrome - Challenge 2
// Strict word comparison, case-insensitive only (spaces and punctuation count)

use crate::error::{ChallengeError, Result};
use serde_json::Value;

/// Check whether `word` reads the same backwards, ignoring letter case
pub fn is_palindrome(word: &str) -> bool {
    let folded: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
    folded.iter().eq(folded.iter().rev())
}

/// Host-value entry point: input must be a string
pub fn is_palindrome_value(word: &Value) -> Result<bool> {
    let word = word
        .as_str()
        .ok_or_else(|| ChallengeError::type_error("word must be a string"))?;
    Ok(is_palindrome(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_examples() {
        assert!(is_palindrome("arara"));
        assert!(is_palindrome("ovo"));
        assert!(!is_palindrome("casa"));
    }

    #[test]
    fn test_ignores_case() {
        assert!(is_palindrome("Arara"));
        assert!(is_palindrome("ÉlÉ"));
    }

    #[test]
    fn test_empty_and_single_char() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("x"));
    }

    #[test]
    fn test_spaces_are_significant() {
        assert!(!is_palindrome("a ba"));
    }

    #[test]
    fn test_value_type_error() {
        let err = is_palindrome_value(&json!(123)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(is_palindrome_value(&json!("Ovo")).unwrap());
    }
}
