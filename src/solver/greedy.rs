use tracing::debug;

use crate::{Action, ActionSet, Error, Money, Portfolio, Totals, solver::Solver};

/// How many non-fitting actions the correction pass keeps as alternates.
/// Inherited from the original heuristic; whether a larger cap helps was
/// never evaluated.
pub const DEFAULT_ALTERNATE_CAP: usize = 10;

/// Ratio-ordered greedy heuristic, O(n log n). Feasible and usually close to
/// optimal, with no optimality guarantee.
#[derive(Debug)]
pub struct GreedySolver {
    pub correction: bool,
    pub alternate_cap: usize,
}

impl GreedySolver {
    pub fn new(correction: bool) -> Self {
        Self {
            correction,
            alternate_cap: DEFAULT_ALTERNATE_CAP,
        }
    }

    pub fn with_alternate_cap(mut self, alternate_cap: usize) -> Self {
        self.alternate_cap = alternate_cap;
        self
    }
}

impl Solver for GreedySolver {
    /// Sorts a local copy by descending profit/price ratio (stable, ties
    /// keep input order) and sweeps once, admitting whatever fits. The first
    /// `alternate_cap` actions that did not fit at their turn are recorded
    /// as alternates. The correction pass then drops the last admitted
    /// action, re-fills the freed budget from the alternates in recorded
    /// order, and keeps whichever fill earns more. Pure ratio-greedy can
    /// strand budget behind one large low-density item; dropping only the
    /// most recent pick is a cheap partial remedy, not a guarantee.
    fn solve(&self, actions: &ActionSet, budget: Money) -> Result<Portfolio, Error> {
        let mut ranked: Vec<&Action> = actions.actions().iter().collect();
        ranked.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

        let mut fill: Vec<&Action> = Vec::new();
        let mut spent = Totals::default();
        let mut alternates: Vec<&Action> = Vec::new();
        for action in ranked {
            if spent.cost + action.price <= budget {
                spent += Totals::from(action);
                fill.push(action);
            } else if alternates.len() < self.alternate_cap {
                alternates.push(action);
            }
        }

        if !self.correction || fill.is_empty() || alternates.is_empty() {
            return Ok(Portfolio::new(fill.into_iter().cloned().collect()));
        }

        let last = fill[fill.len() - 1];
        let mut corrected: Vec<&Action> = fill[..fill.len() - 1].to_vec();
        let mut freed_cost = spent.cost - last.price;
        let mut corrected_profit = spent.profit - last.profit;
        for &alternate in &alternates {
            if freed_cost + alternate.price <= budget {
                freed_cost += alternate.price;
                corrected_profit += alternate.profit;
                corrected.push(alternate);
            }
        }

        if spent.profit >= corrected_profit {
            Ok(Portfolio::new(fill.into_iter().cloned().collect()))
        } else {
            debug!(
                dropped = %last.name,
                gained = corrected_profit - spent.profit,
                "correction pass beat the raw greedy fill"
            );
            Ok(Portfolio::new(corrected.into_iter().cloned().collect()))
        }
    }
}
