// 📊 Sum by Category - Challenge 5
// One fold over the transactions, accumulating an integer total per category

use crate::error::{ChallengeError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

// ============================================================================
// TRANSACTION
// ============================================================================

/// A labeled amount, owned by the caller's input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(category: impl Into<String>, amount: i64) -> Self {
        Transaction {
            category: category.into(),
            amount,
        }
    }
}

/// Totals keyed by category. Key order carries no meaning.
pub type CategoryTotals = HashMap<String, i64>;

// ============================================================================
// AGGREGATION
// ============================================================================

/// Sum amounts per category
///
/// Fails with a value error for an empty category or a total that overflows `i64`.
pub fn sum_by_category(transactions: &[Transaction]) -> Result<CategoryTotals> {
    let mut totals = CategoryTotals::new();

    for tx in transactions {
        if tx.category.is_empty() {
            return Err(ChallengeError::value_error("category must be a non-empty string"));
        }
        accumulate(&mut totals, &tx.category, tx.amount)?;
    }

    Ok(totals)
}

fn accumulate(totals: &mut CategoryTotals, category: &str, amount: i64) -> Result<()> {
    let current = totals.get(category).copied().unwrap_or(0);
    let updated = current.checked_add(amount).ok_or_else(|| {
        ChallengeError::value_error(format!("total for category {:?} overflows", category))
    })?;
    totals.insert(category.to_string(), updated);
    Ok(())
}

// ============================================================================
// HOST VALUES
// ============================================================================

const CATEGORY_KEYS: [&str; 2] = ["category", "categoria"];
const AMOUNT_KEYS: [&str; 2] = ["amount", "valor"];

/// Host-value entry point: a list of records with `category` and `amount`
///
/// Shape problems (not a list, element not a record) are type errors.
/// Field problems (bad category, missing or non-integer amount) are value errors.
pub fn sum_by_category_value(records: &Value) -> Result<CategoryTotals> {
    let items = records
        .as_array()
        .ok_or_else(|| ChallengeError::type_error("transactions must be a list of records"))?;

    let transactions = items
        .iter()
        .map(transaction_from_value)
        .collect::<Result<Vec<Transaction>>>()?;

    sum_by_category(&transactions)
}

fn transaction_from_value(record: &Value) -> Result<Transaction> {
    let fields = record
        .as_object()
        .ok_or_else(|| ChallengeError::type_error("each transaction must be a record"))?;

    let category = match field(fields, &CATEGORY_KEYS).and_then(Value::as_str) {
        Some(category) if !category.is_empty() => category,
        _ => return Err(ChallengeError::value_error("invalid category")),
    };

    // as_i64 is None for fractional numbers, so 2.5 is rejected rather than truncated
    let amount = field(fields, &AMOUNT_KEYS)
        .and_then(Value::as_i64)
        .ok_or_else(|| ChallengeError::value_error("invalid amount (must be an integer)"))?;

    Ok(Transaction::new(category, amount))
}

fn field<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| fields.get(*key))
}

// ============================================================================
// CSV LOADING
// ============================================================================

/// CSV row before validation; amounts stay text until checked
#[derive(Debug, Deserialize)]
struct RawTransaction {
    category: String,
    amount: String,
}

/// Load transactions from a CSV file with a `category,amount` header
pub fn load_transactions_csv(csv_path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut transactions = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // Header is line 1
        let line = index + 2;
        let raw: RawTransaction =
            result.with_context(|| format!("Failed to deserialize transaction on line {}", line))?;

        if raw.category.trim().is_empty() {
            return Err(anyhow::Error::new(ChallengeError::value_error(
                "category must be a non-empty string",
            ))
            .context(format!("Invalid transaction on line {}", line)));
        }

        let amount = raw
            .amount
            .trim()
            .parse::<i64>()
            .map_err(|_| {
                ChallengeError::value_error(format!(
                    "invalid amount {:?} (must be an integer)",
                    raw.amount
                ))
            })
            .with_context(|| format!("Invalid transaction on line {}", line))?;

        transactions.push(Transaction::new(raw.category.trim(), amount));
    }

    debug!(
        "Loaded {} transactions from {:?}",
        transactions.len(),
        csv_path
    );

    Ok(transactions)
}

// ============================================================================
// TESTS
// ============================================================================
