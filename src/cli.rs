use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use profitpick::solver::Strategy;

#[derive(Parser, Debug)]
#[command(about = "Pick the most profitable set of actions within a budget")]
pub(crate) struct Cli {
    #[arg(help = "CSV file with candidate actions (name,price,profit)")]
    pub actions: Option<PathBuf>,
    #[arg(short, long, help = "Maximum total purchase price")]
    pub budget: Option<f64>,
    #[arg(short, long, value_enum, help = "Solving strategy")]
    pub strategy: Option<Strategy>,
    #[arg(
        short,
        long,
        help = "Decimal digits kept when scaling prices for dynamic programming"
    )]
    pub precision: Option<i32>,
    #[arg(long, help = "Cap on the alternates considered by the greedy correction pass")]
    pub cap: Option<usize>,
    #[arg(short, long, help = "Write the selected actions to this CSV file")]
    pub export: Option<PathBuf>,
    #[arg(short, long, help = "Defaults file")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, help = "Print shell completions and exit")]
    pub completions: Option<Shell>,
}
