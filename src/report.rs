use std::path::Path;

use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::debug;

use crate::{Money, Portfolio, action::Action};

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

impl From<&Action> for ActionRow {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name.clone(),
            price: format!("{:.2}", action.price),
            profit: format!("{:.2}", action.profit),
        }
    }
}

pub fn render(portfolio: &Portfolio) -> String {
    let table = Table::new(portfolio.actions().iter().map(ActionRow::from));
    format!(
        "{table}\nTotal cost: {:.2}\nTotal profit: {:.2}",
        portfolio.total_cost(),
        portfolio.total_profit()
    )
}

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    price: Money,
    profit: Money,
}

pub fn export_csv(portfolio: &Portfolio, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for action in portfolio.actions() {
        writer.serialize(ExportRow {
            name: &action.name,
            price: action.price,
            profit: action.profit,
        })?;
    }
    writer.flush()?;
    debug!(?path, rows = portfolio.len(), "exported selection");
    Ok(())
}
