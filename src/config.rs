use crate::errors::{SolveError, WEIGHT_LIMIT};
use crate::weights::WeightScheme;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub solver: SolverConfig,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        toml::from_str(&content).wrap_err("cannot parse configuration file")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Min-cost-flow engine, the default.
    Flow,
    /// Seat-expanded Kuhn-Munkres matching; same optimum, used as a
    /// cross-check.
    Hungarian,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    /// Cost of every assigned student beyond a project's capacity.
    pub overflow_penalty: i64,
    /// Cost tiers used for students who did not supply points.
    pub default_weights: Vec<i64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Flow,
            overflow_penalty: 10,
            default_weights: vec![1, 2, 4],
        }
    }
}

impl SolverConfig {
    /// Check the configurable knobs and build the weight scheme from
    /// the configured tiers.
    pub fn validate(&self) -> Result<WeightScheme, SolveError> {
        if !(0..=WEIGHT_LIMIT).contains(&self.overflow_penalty) {
            return Err(SolveError::invalid(format!(
                "overflow penalty {} is outside 0..={WEIGHT_LIMIT}",
                self.overflow_penalty
            )));
        }
        WeightScheme::new(self.default_weights.clone())
    }
}
