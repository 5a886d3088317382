use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{Error, Money};

/// Raw input row, as parsed from a `name,price,profit` CSV file.
#[derive(Debug, Deserialize)]
pub struct ActionRecord {
    pub name: String,
    pub price: Money,
    pub profit: Money,
}

/// A candidate investment: buy once for `price`, earn `profit`.
///
/// Only valid (tradeable) when `price > 0` and `profit > 0`; anything else is
/// filtered out at [`ActionSet`] build time, never inside a solver.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    pub name: String,
    pub price: Money,
    pub profit: Money,
}

impl Action {
    /// Profit per unit of price, the greedy ranking key.
    pub fn ratio(&self) -> Money {
        self.profit / self.price
    }
}

/// Ordered, validated, immutable collection of candidate actions.
///
/// Input order is preserved; duplicates are legal (they stand for distinct
/// tradeable units). Solvers that need a different order sort a local copy.
#[derive(Debug, Default)]
pub struct ActionSet {
    actions: Vec<Action>,
}

impl ActionSet {
    /// Builds the set from raw records, dropping untradeable ones (empty
    /// name, non-positive price or profit). Never fails on individual bad
    /// records.
    pub fn build(records: impl IntoIterator<Item = ActionRecord>) -> Self {
        let mut actions = Vec::new();
        let mut dropped = 0usize;
        for record in records {
            // Positive check, not a negated one: NaN fails every comparison
            // and must be dropped along with zero and negative values.
            let tradeable =
                !record.name.is_empty() && record.price > 0.0 && record.profit > 0.0;
            if !tradeable {
                debug!(?record, "dropping untradeable record");
                dropped += 1;
                continue;
            }
            actions.push(Action {
                name: record.name,
                price: record.price,
                profit: record.profit,
            });
        }
        info!(kept = actions.len(), dropped, "validated action records");
        Self { actions }
    }

    /// Parses a `name,price,profit` CSV file and builds the set. Fails with
    /// [`Error::Validation`] when the file itself is malformed.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .from_path(path.as_ref())
            .map_err(|e| Error::Validation(e.to_string()))?;
        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: ActionRecord = row.map_err(|e| Error::Validation(e.to_string()))?;
            records.push(record);
        }
        Ok(Self::build(records))
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Largest number of decimal digits across all prices. Upper bound for
    /// the dynamic programming precision: asking for more is a no-op.
    pub fn max_price_decimals(&self) -> u32 {
        self.actions
            .iter()
            .map(|a| decimal_digits(a.price))
            .max()
            .unwrap_or(0)
    }
}

fn decimal_digits(value: Money) -> u32 {
    let text = format!("{value}");
    match text.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len() as u32,
        None => 0,
    }
}
