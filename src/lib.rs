// DataViva Challenges - Core Library
// Five introductory exercises, each exposed as a typed function plus a
// host-value (serde_json::Value) entry point that checks input shape.

pub mod error;
pub mod fizzbuzz;
pub mod palindrome;
pub mod duplicates;
pub mod brackets;     // Stack-based bracket validation
pub mod aggregation;  // Sum by category + CSV loading
pub mod runner;

// Re-export commonly used types
pub use error::{ChallengeError, ErrorKind};
pub use fizzbuzz::{fizzbuzz_lines, fizzbuzz_value};
pub use palindrome::{is_palindrome, is_palindrome_value};
pub use duplicates::{first_duplicate, first_duplicate_value};
pub use brackets::{is_valid, is_valid_value, Bracket, Symbol};
pub use aggregation::{
    Transaction, CategoryTotals,
    sum_by_category, sum_by_category_value, load_transactions_csv,
};
pub use runner::{Challenge, RunConfig, run_challenge, run_selected, run_all};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
