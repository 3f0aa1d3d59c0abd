//! Solver entry points that hide configuration wiring.

use std::path::Path;

use spacing_config::{ConfigError, SpacingConfig};
use spacing_core::{SpacingError, SpacingOutcome};
use spacing_solver::SpacingSolver;
use tracing::warn;

/// Configuration file picked up from the working directory.
pub const CONFIG_FILE: &str = "spacing.toml";

/// Builds a solver from [`CONFIG_FILE`], falling back to defaults.
pub fn default_solver() -> SpacingSolver {
    #[cfg(feature = "console")]
    spacing_console::init();

    SpacingSolver::new(config_or_default(CONFIG_FILE))
}

/// Loads the TOML configuration at `path`, falling back to defaults.
///
/// A missing file is silent; an unreadable or invalid one is logged and
/// ignored.
pub fn config_or_default(path: impl AsRef<Path>) -> SpacingConfig {
    let path = path.as_ref();
    match SpacingConfig::load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            SpacingConfig::default()
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "ignoring configuration file");
            SpacingConfig::default()
        }
    }
}

/// Builds a solver from a TOML or YAML configuration file.
///
/// # Errors
///
/// Returns [`SpacingError::Config`] if the file cannot be read or parsed.
pub fn solver_from_file(path: impl AsRef<Path>) -> Result<SpacingSolver, SpacingError> {
    SpacingConfig::from_file(path)
        .map(SpacingSolver::new)
        .map_err(|e| SpacingError::Config(e.to_string()))
}

/// Solves a single row with the default solver.
pub fn solve_row(input: &str) -> Result<SpacingOutcome, SpacingError> {
    default_solver().solve_str(input)
}

/// Solves several rows with one solver, in order.
pub fn solve_rows<'a, I>(inputs: I) -> Result<Vec<SpacingOutcome>, SpacingError>
where
    I: IntoIterator<Item = &'a str>,
{
    let solver = default_solver();
    inputs
        .into_iter()
        .map(|input| solver.solve_str(input))
        .collect()
}
