use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::{Money, solver::Strategy};

/// Budget applied when neither the CLI nor the defaults file supplies one.
pub const DEFAULT_BUDGET: Money = 100.0;

/// Per-run defaults loaded from an optional YAML file; CLI flags override
/// every field. A missing file means built-in defaults, not an error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Defaults {
    pub budget: Option<Money>,
    pub strategy: Option<Strategy>,
    pub precision: Option<i32>,
    pub alternate_cap: Option<usize>,
}

impl Defaults {
    /// Loads a defaults file the user named explicitly; a missing file is
    /// an error here.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file {path:?}"))?;
        let defaults = serde_yaml::from_reader(file)?;
        debug!(?defaults, "loaded defaults file");
        Ok(defaults)
    }

    /// Loads the implicit per-user defaults file, tolerating its absence.
    pub fn load_if_present(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(?path, "no defaults file, using built-ins");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_implicit_file_yields_builtin_defaults() {
        let defaults =
            Defaults::load_if_present(Path::new("/nonexistent/defaults.yml")).unwrap();
        assert!(defaults.budget.is_none());
        assert!(defaults.strategy.is_none());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Defaults::load_from_file(Path::new("/nonexistent/defaults.yml"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn yaml_fields_are_parsed() {
        let path = std::env::temp_dir().join("profitpick-defaults.yml");
        std::fs::write(
            &path,
            "budget: 250.0\nstrategy: dynamic-programming\nprecision: 1\n",
        )
        .unwrap();
        let defaults = Defaults::load_from_file(&path).unwrap();
        assert_eq!(defaults.budget, Some(250.0));
        assert_eq!(defaults.strategy, Some(Strategy::DynamicProgramming));
        assert_eq!(defaults.precision, Some(1));
        assert_eq!(defaults.alternate_cap, None);
        std::fs::remove_file(&path).ok();
    }
}
