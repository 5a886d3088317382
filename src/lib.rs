pub mod action;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod report;
pub mod solver;

pub type Money = f64;

pub use action::{Action, ActionSet};
pub use error::Error;
pub use portfolio::{Portfolio, Totals};
pub use solver::{Solver, Strategy};
