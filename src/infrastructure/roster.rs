// src/infrastructure/roster.rs
use crate::application::{
    dto::UserDto,
    error::{ApplicationError, ApplicationResult},
    ports::roster::RosterSource,
};
use crate::domain::user::User;
use std::path::{Path, PathBuf};

/// Reads a roster stored as a JSON array of user records.
#[derive(Debug, Clone)]
pub struct JsonRosterSource {
    path: PathBuf,
}

impl JsonRosterSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for JsonRosterSource {
    fn load(&self) -> ApplicationResult<Vec<User>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            ApplicationError::infrastructure(format!(
                "failed to read roster {}: {err}",
                self.path.display()
            ))
        })?;
        let users = parse_roster(&raw)?;
        tracing::debug!(path = %self.path.display(), users = users.len(), "loaded roster");
        Ok(users)
    }
}

/// Parses a JSON array of user records. Names and ages are taken as given.
///
/// # Errors
///
/// Returns [`ApplicationError::Validation`] when the text is not a JSON
/// array of records or names an unknown privilege.
pub fn parse_roster(raw: &str) -> ApplicationResult<Vec<User>> {
    let records: Vec<UserDto> = serde_json::from_str(raw)
        .map_err(|err| ApplicationError::validation(format!("malformed roster: {err}")))?;

    Ok(records.into_iter().map(User::from).collect())
}
