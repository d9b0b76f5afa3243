// src/application/ports/roster.rs
use crate::{application::ApplicationResult, domain::user::User};

pub trait RosterSource: Send + Sync {
    /// # Errors
    ///
    /// Fails when the roster cannot be read or decoded.
    fn load(&self) -> ApplicationResult<Vec<User>>;
}
