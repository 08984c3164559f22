// 👯 First Duplicate - Challenge 3
// Single scan with a seen-set; first value hit a second time wins

use crate::error::{ChallengeError, Result};
use serde_json::Value;
use std::collections::HashSet;

/// Return the first number whose repeat is reached during a left-to-right scan
pub fn first_duplicate(numbers: &[i64]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(numbers.len());
    numbers.iter().copied().find(|n| !seen.insert(*n))
}

/// Host-value entry point: input must be a list of integers
pub fn first_duplicate_value(numbers: &Value) -> Result<Option<i64>> {
    let items = numbers
        .as_array()
        .ok_or_else(|| ChallengeError::type_error("numbers must be a list of integers"))?;

    let numbers = items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| ChallengeError::type_error("every element must be an integer"))
        })
        .collect::<Result<Vec<i64>>>()?;

    Ok(first_duplicate(&numbers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_finds_first_repeat() {
        assert_eq!(first_duplicate(&[1, 2, 3, 4, 2, 5]), Some(2));
    }

    #[test]
    fn test_earliest_second_occurrence_wins() {
        // 3 repeats before 1 does
        assert_eq!(first_duplicate(&[1, 3, 3, 1]), Some(3));
    }

    #[test]
    fn test_no_duplicate() {
        assert_eq!(first_duplicate(&[1, 2, 3]), None);
        assert_eq!(first_duplicate(&[]), None);
    }

    #[test]
    fn test_value_type_errors() {
        let err = first_duplicate_value(&json!("123")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = first_duplicate_value(&json!([1, "2", 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = first_duplicate_value(&json!([1, 2.5])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_value_ok() {
        assert_eq!(first_duplicate_value(&json!([4, 5, 4])).unwrap(), Some(4));
        assert_eq!(first_duplicate_value(&json!([])).unwrap(), None);
    }
}
