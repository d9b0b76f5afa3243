pub mod roster;

pub use roster::JsonRosterSource;
