// ▶️ Challenge Runner - Runs the five challenges in a fixed order
// Writes banners and results to any io::Write so the binary and tests share it

use crate::aggregation::{sum_by_category, Transaction};
use crate::brackets::is_valid;
use crate::duplicates::first_duplicate;
use crate::fizzbuzz::{fizzbuzz_lines, DEFAULT_LIMIT};
use crate::palindrome::is_palindrome;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, trace};

// ============================================================================
// CHALLENGES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    FizzBuzz,
    Palindrome,
    Duplicates,
    Brackets,
    Aggregation,
}

impl Challenge {
    /// All challenges, in run order
    pub const ALL: [Challenge; 5] = [
        Challenge::FizzBuzz,
        Challenge::Palindrome,
        Challenge::Duplicates,
        Challenge::Brackets,
        Challenge::Aggregation,
    ];

    /// 1-based position in the run order
    pub fn number(&self) -> usize {
        match self {
            Challenge::FizzBuzz => 1,
            Challenge::Palindrome => 2,
            Challenge::Duplicates => 3,
            Challenge::Brackets => 4,
            Challenge::Aggregation => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Challenge::FizzBuzz => "FizzBuzz",
            Challenge::Palindrome => "Palindrome",
            Challenge::Duplicates => "Duplicates",
            Challenge::Brackets => "Bracket Validation",
            Challenge::Aggregation => "Sum by Category",
        }
    }
}

// ============================================================================
// RUN CONFIG
// ============================================================================

/// Inputs fed to each challenge
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub fizzbuzz_limit: i64,
    pub palindrome_words: Vec<String>,
    pub duplicate_numbers: Vec<i64>,
    pub bracket_samples: Vec<String>,
    pub transactions: Vec<Transaction>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            fizzbuzz_limit: DEFAULT_LIMIT,
            palindrome_words: ["arara", "ovo", "casa", "Arara"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            duplicate_numbers: vec![1, 2, 3, 4, 2, 5],
            bracket_samples: ["{[()]}", "{[(])}", "{{[[(]]}}"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            transactions: vec![
                Transaction::new("Alimentação", 10),
                Transaction::new("Transporte", 5),
                Transaction::new("Alimentação", 20),
                Transaction::new("Lazer", 50),
            ],
        }
    }
}

// ============================================================================
// RUNNING
// ============================================================================

/// Run a single challenge and write its output (no banner)
pub fn run_challenge<W: Write>(challenge: Challenge, config: &RunConfig, out: &mut W) -> Result<()> {
    debug!("Running challenge {}: {}", challenge.number(), challenge.title());

    match challenge {
        Challenge::FizzBuzz => {
            for line in fizzbuzz_lines(config.fizzbuzz_limit) {
                writeln!(out, "{}", line)?;
            }
        }
        Challenge::Palindrome => {
            for word in &config.palindrome_words {
                writeln!(out, "{:?} -> {}", word, is_palindrome(word))?;
            }
        }
        Challenge::Duplicates => match first_duplicate(&config.duplicate_numbers) {
            Some(n) => writeln!(out, "{}", n)?,
            None => writeln!(out, "none")?,
        },
        Challenge::Brackets => {
            for sample in &config.bracket_samples {
                writeln!(out, "{} -> {}", sample, is_valid(sample))?;
            }
        }
        Challenge::Aggregation => {
            let totals = sum_by_category(&config.transactions)
                .context("Failed to sum transactions by category")?;

            // HashMap order is arbitrary; sort so the output is stable
            let mut entries: Vec<(&String, &i64)> = totals.iter().collect();
            entries.sort();
            trace!("Category totals: {:?}", entries);

            for (category, total) in entries {
                writeln!(out, "{}: {}", category, total)?;
            }
        }
    }

    Ok(())
}

/// Run the given challenges in order, each under a `=== Challenge N: Title ===` banner
pub fn run_selected<W: Write>(challenges: &[Challenge], config: &RunConfig, out: &mut W) -> Result<()> {
    for (i, challenge) in challenges.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== Challenge {}: {} ===", challenge.number(), challenge.title())?;
        run_challenge(*challenge, config, out)
            .with_context(|| format!("Challenge {} ({}) failed", challenge.number(), challenge.title()))?;
    }

    Ok(())
}

/// Run all five challenges
pub fn run_all<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    run_selected(&Challenge::ALL, config, out)
}

// ============================================================================
// TESTS
// ============================================================================
