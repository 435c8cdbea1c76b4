use crate::error::{ConfigError, Result};
use crate::outcome::AuthenticationOutcome;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SCENARIOS_ENV: &str = "GREETER_SCENARIOS";

/// A named outcome to render.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub outcome: AuthenticationOutcome,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioFile {
    #[serde(rename = "scenario", default)]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioFile {
    pub fn validate(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one [[scenario]] is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "scenario name must not be empty".to_string(),
                ));
            }
            if !seen.insert(scenario.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate scenario name {}",
                    scenario.name
                )));
            }
        }
        Ok(())
    }
}

pub fn default_scenarios_path() -> PathBuf {
    // ~/.config/greeter/scenarios.toml, relative when HOME is unset
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("greeter")
            .join("scenarios.toml")
    } else {
        PathBuf::from(".config/greeter/scenarios.toml")
    }
}

/// Resolves the scenario file path: explicit path, then `GREETER_SCENARIOS`,
/// then the per-user default.
pub fn resolve_scenarios_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => env::var(SCENARIOS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_scenarios_path()),
    }
}

pub fn parse_scenarios(data: &str, path: &Path) -> Result<ScenarioFile> {
    toml::from_str(data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_scenarios(explicit: Option<&Path>) -> Result<(ScenarioFile, PathBuf)> {
    let path = resolve_scenarios_path(explicit);
    tracing::debug!(path = %path.display(), "loading scenarios");

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let file = parse_scenarios(&data, &path)?;
    tracing::debug!(count = file.scenarios.len(), "scenarios parsed");
    Ok((file, path))
}
