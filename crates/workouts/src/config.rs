//! Batch driver configuration, read from the environment.

use std::env;

use anyhow::{Context as _, bail};
use serde::{Deserialize, Serialize};

use crate::{
    dispatch::{parse_fields, read_package},
    errors::WorkoutError,
    models::WorkoutReading,
};

pub const PACKAGES_VAR: &str = "WORKOUTS_PACKAGES";
pub const OUTPUT_VAR: &str = "WORKOUTS_OUTPUT";

/// A single field as it arrives from a sensor.
///
/// Anything that is neither a number nor text is kept as-is so that only the
/// package carrying it is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawField {
    pub fn to_number(&self) -> Result<f64, WorkoutError> {
        match self {
            RawField::Number(n) => Ok(*n),
            RawField::Text(s) => parse_fields(&[s]).map(|numbers| numbers[0]),
            RawField::Other(value) => Err(WorkoutError::InvalidNumericInput(format!(
                "{value} is not a number"
            ))),
        }
    }
}

/// An activity code with its positional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package(pub String, pub Vec<RawField>);

impl Package {
    pub fn new(code: &str, fields: &[f64]) -> Self {
        Self(
            code.to_string(),
            fields.iter().copied().map(RawField::Number).collect(),
        )
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn numbers(&self) -> Result<Vec<f64>, WorkoutError> {
        self.1.iter().map(RawField::to_number).collect()
    }

    /// Converts the fields and dispatches the package.
    pub fn reading(&self) -> Result<WorkoutReading, WorkoutError> {
        read_package(self.code(), &self.numbers()?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub packages: Vec<Package>,
    pub output: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            packages: sample_packages(),
            output: OutputFormat::Text,
        }
    }
}

/// The three reference workouts.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

impl DriverConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var(PACKAGES_VAR).ok(), env::var(OUTPUT_VAR).ok())
    }

    fn from_vars(packages: Option<String>, output: Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(json) = packages {
            config.packages = serde_json::from_str(&json)
                .with_context(|| format!("{PACKAGES_VAR} is not a valid package list"))?;
        }

        if let Some(output) = output {
            config.output = match output.to_ascii_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                other => bail!("{OUTPUT_VAR} must be \"text\" or \"json\", got {other:?}"),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DriverConfig::from_vars(None, None).unwrap();
        assert_eq!(config.packages, sample_packages());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_packages_from_json() {
        let json = r#"[["RUN", [15000, 1, 75]], ["WLK", ["9000", "1", 75, 180]]]"#;
        let config = DriverConfig::from_vars(Some(json.to_string()), Some("JSON".into())).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.packages.len(), 2);
        assert_eq!(config.packages[0].code(), "RUN");
        assert_eq!(
            config.packages[1].numbers().unwrap(),
            vec![9000.0, 1.0, 75.0, 180.0]
        );
    }

    #[test]
    fn test_non_numeric_field_fails_only_its_package() {
        let json = r#"[["RUN", [15000, null, 75]], ["RUN", [15000, true, 75]], ["RUN", [15000, "x", 75]], ["RUN", [15000, 1, 75]]]"#;
        let config = DriverConfig::from_vars(Some(json.to_string()), None).unwrap();
        assert_eq!(config.packages.len(), 4);

        for package in &config.packages[..3] {
            assert!(matches!(
                package.reading(),
                Err(WorkoutError::InvalidNumericInput(_))
            ));
        }
        assert!(config.packages[3].reading().is_ok());
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(DriverConfig::from_vars(Some("not json".into()), None).is_err());
        assert!(DriverConfig::from_vars(None, Some("xml".into())).is_err());
    }
}
