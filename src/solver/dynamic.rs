use tracing::debug;

use crate::{ActionSet, Error, Money, Portfolio, solver::Solver};

/// Default ceiling on the DP table size, in bytes.
pub const DEFAULT_MEMORY_LIMIT: usize = 1 << 30;

/// Fixed-point scaling of the price axis: prices and the budget are mapped
/// to integers via `round(value * 10^digits)` before the table is built, and
/// selected prices are mapped back afterwards. Profits are never scaled.
#[derive(Clone, Copy, Debug)]
pub struct PrecisionConfig {
    digits: u32,
}

impl PrecisionConfig {
    pub fn new(digits: i32) -> Result<Self, Error> {
        if digits < 0 {
            return Err(Error::InvalidPrecision(digits));
        }
        Ok(Self {
            digits: digits as u32,
        })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }
}

/// Exact 0/1 knapsack via the classic DP table, `O(n * scaled_budget)` time
/// and memory. Precision above what the price data carries is clamped; the
/// memory ceiling turns an over-sized table into a recoverable error.
#[derive(Debug)]
pub struct DynamicProgrammingSolver {
    pub precision: PrecisionConfig,
    pub memory_limit: usize,
}

impl DynamicProgrammingSolver {
    pub fn new(precision: PrecisionConfig) -> Self {
        Self {
            precision,
            memory_limit: DEFAULT_MEMORY_LIMIT,
        }
    }
}

impl Solver for DynamicProgrammingSolver {
    /// Builds `T[i][j]` = best profit using the first `i` actions within
    /// scaled budget `j`, as a flat row-major buffer. Only the price axis is
    /// quantized; profits enter the table at their original values so the
    /// objective is never distorted. Selected prices come back de-scaled,
    /// which callers must tolerate at the precision they chose.
    fn solve(&self, actions: &ActionSet, budget: Money) -> Result<Portfolio, Error> {
        let items = actions.actions();
        let n = items.len();

        let max_digits = actions.max_price_decimals();
        let digits = self.precision.digits().min(max_digits);
        if digits < self.precision.digits() {
            debug!(
                requested = self.precision.digits(),
                max_digits, "clamping precision to the data"
            );
        }
        let scale = 10f64.powi(digits as i32);
        let scaled_prices: Vec<usize> = items
            .iter()
            .map(|a| (a.price * scale).round() as usize)
            .collect();
        let scaled_budget = (budget * scale).round() as usize;

        let width = scaled_budget + 1;
        let cells = (n + 1)
            .checked_mul(width)
            .filter(|&c| c.checked_mul(size_of::<Money>()).is_some_and(|b| b <= self.memory_limit))
            .ok_or_else(|| {
                Error::IntractableInput(format!(
                    "DP table of {} x {width} cells exceeds the memory limit of {} bytes",
                    n + 1,
                    self.memory_limit
                ))
            })?;
        debug!(n, scaled_budget, digits, "building DP table");

        let mut table = vec![0.0 as Money; cells];
        for i in 1..=n {
            let price = scaled_prices[i - 1];
            let profit = items[i - 1].profit;
            let (prev, row) = table.split_at_mut(i * width);
            let prev = &prev[(i - 1) * width..];
            let row = &mut row[..width];
            for j in 0..width {
                row[j] = if price > j {
                    prev[j]
                } else {
                    prev[j].max(prev[j - price] + profit)
                };
            }
        }

        // Walk back from T[n][scaled_budget]; a cell differing from the row
        // above means the action was taken.
        let mut selected = Vec::new();
        let mut i = n;
        let mut j = scaled_budget;
        while i > 0 && j > 0 {
            if table[i * width + j] != table[(i - 1) * width + j] {
                let mut action = items[i - 1].clone();
                action.price = scaled_prices[i - 1] as Money / scale;
                selected.push(action);
                j -= scaled_prices[i - 1];
            }
            i -= 1;
        }
        selected.reverse();
        Ok(Portfolio::new(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::tests::set;

    fn solver(digits: i32) -> DynamicProgrammingSolver {
        DynamicProgrammingSolver::new(PrecisionConfig::new(digits).unwrap())
    }

    #[test]
    fn negative_precision_is_rejected() {
        let err = PrecisionConfig::new(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidPrecision(-1)));
    }

    #[test]
    fn finds_the_optimal_profit() {
        let actions = set(&[
            ("a", 5.0, 10.0),
            ("b", 4.0, 40.0),
            ("c", 6.0, 30.0),
            ("d", 4.0, 50.0),
        ]);
        let portfolio = solver(0).solve(&actions, 10.0).unwrap();
        assert_eq!(portfolio.total_profit(), 90.0);
        let names: Vec<&str> = portfolio.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "d"]);
    }

    #[test]
    fn selection_comes_back_in_input_order() {
        let actions = set(&[("c", 6.0, 30.0), ("a", 4.0, 40.0), ("b", 4.0, 50.0)]);
        let portfolio = solver(0).solve(&actions, 8.0).unwrap();
        let names: Vec<&str> = portfolio.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn fractional_prices_are_exact_at_sufficient_precision() {
        let actions = set(&[("a", 2.5, 3.0), ("b", 2.5, 4.0), ("c", 2.5, 5.0)]);
        let portfolio = solver(1).solve(&actions, 5.0).unwrap();
        assert_eq!(portfolio.total_profit(), 9.0);
        assert_eq!(portfolio.total_cost(), 5.0);
    }

    #[test]
    fn precision_zero_rounds_prices_and_budget_half_away_from_zero() {
        // 1.4 rounds down to 1, 2.6 rounds up to 3, budget 2.6 rounds to 3:
        // only "b" fits, and its reported price is the de-scaled 3.0.
        let actions = set(&[("a", 1.4, 2.0), ("b", 2.6, 3.0)]);
        let portfolio = solver(0).solve(&actions, 2.6).unwrap();
        let names: Vec<&str> = portfolio.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b"]);
        assert_eq!(portfolio.total_cost(), 3.0);

        // At budget 4 both rounded prices (1 + 3) fit exactly.
        let both = solver(0).solve(&actions, 4.0).unwrap();
        assert_eq!(both.len(), 2);
        assert_eq!(both.total_cost(), 4.0);
        assert_eq!(both.total_profit(), 5.0);
    }

    #[test]
    fn precision_above_the_data_is_a_no_op() {
        let actions = set(&[("a", 10.5, 4.0), ("b", 20.5, 7.0)]);
        let clamped = solver(6).solve(&actions, 31.0).unwrap();
        let exact = solver(1).solve(&actions, 31.0).unwrap();
        assert_eq!(clamped, exact);
        assert_eq!(clamped.total_profit(), 11.0);
    }

    #[test]
    fn refuses_tables_over_the_memory_limit() {
        let actions = set(&[("a", 100.0, 5.0), ("b", 250.0, 9.0)]);
        let mut dp = solver(2);
        dp.memory_limit = 1024;
        let err = dp.solve(&actions, 500.0).unwrap_err();
        assert!(matches!(err, Error::IntractableInput(_)));
    }
}
