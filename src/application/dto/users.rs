use crate::domain::user::{Privilege, User, value_objects::deserialize_privileges};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default, deserialize_with = "deserialize_privileges")]
    pub privileges: Vec<Privilege>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            age: user.age(),
            privileges: user.privileges().to_vec(),
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name.into(),
            last_name: user.last_name.into(),
            age: user.age.into(),
            privileges: user.privileges,
        }
    }
}

impl From<UserDto> for User {
    fn from(value: UserDto) -> Self {
        Self::new(value.first_name, value.last_name, value.age, value.privileges)
    }
}

/// Summary of a roster built from every user query.
///
/// `average_age` is `None` for an empty roster rather than the `-1.0`
/// sentinel returned by the query itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterReportDto {
    pub user_count: usize,
    pub names_reverse_sorted: Vec<String>,
    pub by_age_then_name: Vec<UserDto>,
    pub distinct_privileges: Vec<Privilege>,
    pub average_age: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent_last_name: Option<String>,
    pub last_name_counts: BTreeMap<String, u64>,
    pub privilege_count_histogram: BTreeMap<usize, usize>,
    pub holders_by_privilege: BTreeMap<Privilege, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senior_updater: Option<UserDto>,
    pub first_names_joined: String,
}
