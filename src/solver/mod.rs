use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::{ActionSet, Error, Money, Portfolio};

mod dynamic;
mod exhaustive;
mod greedy;

pub use dynamic::{DEFAULT_MEMORY_LIMIT, DynamicProgrammingSolver, PrecisionConfig};
pub use exhaustive::{DEFAULT_MAX_SUBSETS, ExhaustiveSolver};
pub use greedy::{DEFAULT_ALTERNATE_CAP, GreedySolver};

/// A pure computation from (actions, budget) to a feasible portfolio.
///
/// Solvers never mutate the action set and share no state, so distinct
/// inputs may be solved concurrently without coordination. Repeated calls
/// on unchanged inputs return identical portfolios.
pub trait Solver {
    fn solve(&self, actions: &ActionSet, budget: Money) -> Result<Portfolio, Error>;
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Exhaustive,
    Greedy,
    GreedyNoCorrection,
    DynamicProgramming,
}

impl Strategy {
    /// Builds the solver for this strategy. `precision` only matters for
    /// dynamic programming, `alternate_cap` only for the greedy variants.
    pub fn solver(self, precision: PrecisionConfig, alternate_cap: usize) -> Box<dyn Solver> {
        match self {
            Strategy::Exhaustive => Box::new(ExhaustiveSolver::default()),
            Strategy::Greedy => {
                Box::new(GreedySolver::new(true).with_alternate_cap(alternate_cap))
            }
            Strategy::GreedyNoCorrection => {
                Box::new(GreedySolver::new(false).with_alternate_cap(alternate_cap))
            }
            Strategy::DynamicProgramming => Box::new(DynamicProgrammingSolver::new(precision)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::Greedy => "greedy",
            Strategy::GreedyNoCorrection => "greedy-no-correction",
            Strategy::DynamicProgramming => "dynamic-programming",
        };
        f.write_str(name)
    }
}
