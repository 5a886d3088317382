use std::time::Instant;

use clap::{CommandFactory, Parser};
use directories::ProjectDirs;

use profitpick::{
    action::ActionSet,
    config::{DEFAULT_BUDGET, Defaults},
    report,
    solver::{DEFAULT_ALTERNATE_CAP, PrecisionConfig, Strategy},
};

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let opts = cli::Cli::parse();

    if let Some(shell) = opts.completions {
        let mut cmd = cli::Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let Some(actions_path) = opts.actions else {
        anyhow::bail!("No actions CSV file given");
    };

    let defaults = match opts.config {
        Some(path) => Defaults::load_from_file(&path)?,
        None => {
            let Some(pdirs) = ProjectDirs::from("org", "quotidian", "profitpick") else {
                anyhow::bail!("Failed to get defaults path");
            };
            Defaults::load_if_present(&pdirs.config_dir().join("defaults.yml"))?
        }
    };

    let budget = opts.budget.or(defaults.budget).unwrap_or(DEFAULT_BUDGET);
    anyhow::ensure!(budget >= 0.0, "Budget must be non-negative");
    let strategy = opts
        .strategy
        .or(defaults.strategy)
        .unwrap_or(Strategy::Greedy);
    let precision = PrecisionConfig::new(opts.precision.or(defaults.precision).unwrap_or(2))?;
    let alternate_cap = opts
        .cap
        .or(defaults.alternate_cap)
        .unwrap_or(DEFAULT_ALTERNATE_CAP);

    let actions = ActionSet::load_csv(&actions_path)?;
    println!("Number of valid actions: {}", actions.len());

    let solver = strategy.solver(precision, alternate_cap);
    println!("Calculating the best combination ({strategy})...");
    let started = Instant::now();
    let portfolio = solver.solve(&actions, budget)?;
    let elapsed = started.elapsed();

    println!("{}", report::render(&portfolio));
    println!("Execution time: {:.2} seconds", elapsed.as_secs_f64());

    if let Some(export_path) = opts.export {
        report::export_csv(&portfolio, &export_path)?;
        println!("Selection written to {}", export_path.display());
    }
    Ok(())
}
