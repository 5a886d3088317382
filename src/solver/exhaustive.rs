use tracing::debug;

use crate::{ActionSet, Error, Money, Portfolio, Totals, solver::Solver};

/// Ceiling on the number of subsets the solver will agree to enumerate.
pub const DEFAULT_MAX_SUBSETS: u64 = 1 << 32;

/// Brute-force reference solver: evaluates every subset and keeps the most
/// profitable feasible one. Provably optimal but exponential, meant as a
/// verification oracle for small inputs rather than production use.
#[derive(Debug)]
pub struct ExhaustiveSolver {
    pub max_subsets: u64,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self {
            max_subsets: DEFAULT_MAX_SUBSETS,
        }
    }
}

impl Solver for ExhaustiveSolver {
    /// Subsets are visited by ascending size, then lexicographically by
    /// input order within each size; a strictly greater profit is required
    /// to displace the incumbent, so ties keep the first subset found in
    /// that canonical order. The empty subset is the zero-profit baseline.
    fn solve(&self, actions: &ActionSet, budget: Money) -> Result<Portfolio, Error> {
        let items = actions.actions();
        let n = items.len();
        let subsets = 1u64
            .checked_shl(n as u32)
            .filter(|&count| count <= self.max_subsets)
            .ok_or_else(|| {
                Error::IntractableInput(format!(
                    "{n} actions mean 2^{n} subsets, over the enumeration limit of {}",
                    self.max_subsets
                ))
            })?;
        debug!(n, subsets, "enumerating subsets");

        let mut best = Portfolio::empty();
        for size in 1..=n {
            for combo in Combinations::new(n, size) {
                let totals: Totals = combo.iter().map(|&i| Totals::from(&items[i])).sum();
                if totals.cost <= budget && totals.profit > best.total_profit() {
                    best = Portfolio::new(combo.iter().map(|&i| items[i].clone()).collect());
                }
            }
        }
        Ok(best)
    }
}

/// Lexicographic k-combinations of the indices `0..n`.
struct Combinations {
    indices: Vec<usize>,
    n: usize,
    first: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            indices: (0..k).collect(),
            n,
            first: true,
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }
        let k = self.indices.len();
        // Find the rightmost index that can still move up, then reset
        // everything to its right to the tightest run above it.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}
