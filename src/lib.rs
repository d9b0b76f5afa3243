// No public repository is published for this crate, and duplicate
// transitive versions come from the tracing-subscriber tree.
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::queries::users::UserQueryService;
pub use domain::user::{Privilege, User};
