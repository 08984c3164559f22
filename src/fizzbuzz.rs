// 🔢 FizzBuzz - Challenge 1
// Lines 1..=n with multiples of 3/5/15 replaced

use crate::error::{ChallengeError, Result};
use serde_json::Value;

/// Default upper bound used by the runner
pub const DEFAULT_LIMIT: i64 = 100;

/// Generate the FizzBuzz lines from 1 to `n` (empty when `n < 1`)
pub fn fizzbuzz_lines(n: i64) -> Vec<String> {
    if n < 1 {
        return Vec::new();
    }

    (1..=n).map(fizzbuzz_line).collect()
}

fn fizzbuzz_line(i: i64) -> String {
    // 15 first: divisible by both 3 and 5
    if i % 15 == 0 {
        "FizzBuzz".to_string()
    } else if i % 3 == 0 {
        "Fizz".to_string()
    } else if i % 5 == 0 {
        "Buzz".to_string()
    } else {
        i.to_string()
    }
}

/// Host-value entry point: `n` must be an integer
pub fn fizzbuzz_value(n: &Value) -> Result<Vec<String>> {
    let n = n
        .as_i64()
        .ok_or_else(|| ChallengeError::type_error("n must be an integer"))?;
    Ok(fizzbuzz_lines(n))
}

// ============================================================================
// TESTS
// ============================================================================
