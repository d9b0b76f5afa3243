// src/config.rs
use std::{env, path::PathBuf};
use thiserror::Error;

use crate::application::queries::users::RosterReportQuery;

#[derive(Clone, Debug)]
pub struct AppConfig {
    roster_path: PathBuf,
    age_threshold: u32,
    delimiter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("users.json")
}

fn default_age_threshold() -> u32 {
    18
}

fn default_delimiter() -> String {
    ", ".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `REPORT_AGE_THRESHOLD` is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(
        lookup: &dyn Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let roster_path =
            lookup("ROSTER_PATH").map_or_else(default_roster_path, PathBuf::from);

        let age_threshold = match lookup("REPORT_AGE_THRESHOLD") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "REPORT_AGE_THRESHOLD must be a non-negative integer, got '{raw}'"
                ))
            })?,
            None => default_age_threshold(),
        };

        let delimiter = lookup("REPORT_DELIMITER").unwrap_or_else(default_delimiter);

        Ok(Self {
            roster_path,
            age_threshold,
            delimiter,
        })
    }

    #[must_use]
    pub fn roster_path(&self) -> &std::path::Path {
        &self.roster_path
    }

    #[must_use]
    pub const fn age_threshold(&self) -> u32 {
        self.age_threshold
    }

    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    #[must_use]
    pub fn report_query(&self) -> RosterReportQuery {
        RosterReportQuery {
            age_threshold: self.age_threshold,
            delimiter: self.delimiter.clone(),
        }
    }

    /// Log filter from `RUST_LOG`, or the crate default.
    #[must_use]
    pub fn log_filter() -> String {
        env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(&lookup_from(&[])).unwrap();
        assert_eq!(config.roster_path(), std::path::Path::new("users.json"));
        assert_eq!(config.age_threshold(), 18);
        assert_eq!(config.delimiter(), ", ");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(&lookup_from(&[
            ("ROSTER_PATH", "/tmp/roster.json"),
            ("REPORT_AGE_THRESHOLD", " 30 "),
            ("REPORT_DELIMITER", ";"),
        ]))
        .unwrap();
        assert_eq!(config.roster_path(), std::path::Path::new("/tmp/roster.json"));
        let query = config.report_query();
        assert_eq!(query.age_threshold, 30);
        assert_eq!(query.delimiter, ";");
    }

    #[test]
    fn rejects_non_numeric_threshold() {
        let err = AppConfig::from_lookup(&lookup_from(&[("REPORT_AGE_THRESHOLD", "old")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
