use derive_more::{Add, AddAssign, Sum};

use crate::{Money, action::Action};

#[derive(Add, AddAssign, Clone, Copy, Debug, Default, PartialEq, Sum)]
pub struct Totals {
    pub cost: Money,
    pub profit: Money,
}

impl From<&Action> for Totals {
    fn from(action: &Action) -> Self {
        Self {
            cost: action.price,
            profit: action.profit,
        }
    }
}

/// A solver's output: the selected actions plus their derived totals.
/// Always feasible for the budget it was solved against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Portfolio {
    actions: Vec<Action>,
    totals: Totals,
}

impl Portfolio {
    pub fn new(actions: Vec<Action>) -> Self {
        let totals = actions.iter().map(Totals::from).sum();
        Self { actions, totals }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn total_cost(&self) -> Money {
        self.totals.cost
    }

    pub fn total_profit(&self) -> Money {
        self.totals.profit
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
