pub mod users;

pub use users::{RosterReportDto, UserDto};
