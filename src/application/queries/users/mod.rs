mod filtering;
mod ordering;
mod privileges;
mod report;
mod service;
mod statistics;

pub use report::RosterReportQuery;
pub use service::UserQueryService;
pub use statistics::UNDEFINED_AVERAGE_AGE;
