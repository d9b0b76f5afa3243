use super::UserQueryService;
use crate::{
    application::dto::{RosterReportDto, UserDto},
    domain::user::{Privilege, User},
};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct RosterReportQuery {
    pub age_threshold: u32,
    pub delimiter: String,
}

impl Default for RosterReportQuery {
    fn default() -> Self {
        Self {
            age_threshold: 18,
            delimiter: ", ".to_string(),
        }
    }
}

impl UserQueryService {
    #[must_use]
    pub fn roster_report(&self, users: &[User], query: &RosterReportQuery) -> RosterReportDto {
        let average_age = (!users.is_empty()).then(|| self.average_age(users));

        let privilege_count_histogram: BTreeMap<usize, usize> = self
            .group_by_privilege_count(users)
            .into_iter()
            .map(|(count, members)| (count, members.len()))
            .collect();

        let holders_by_privilege: BTreeMap<Privilege, Vec<String>> = self
            .group_by_privilege(users)
            .into_iter()
            .map(|(privilege, holders)| {
                let names: Vec<String> =
                    holders.iter().map(|u| u.first_name().to_string()).collect();
                (privilege, names)
            })
            .collect();

        let report = RosterReportDto {
            user_count: users.len(),
            names_reverse_sorted: self.names_reverse_sorted(users),
            by_age_then_name: self
                .sort_by_age_desc_then_name_asc(users)
                .into_iter()
                .map(UserDto::from)
                .collect(),
            distinct_privileges: self.distinct_privileges(users),
            average_age,
            most_frequent_last_name: self.most_frequent_last_name(users),
            last_name_counts: self.last_name_counts(users),
            privilege_count_histogram,
            holders_by_privilege,
            senior_updater: self
                .first_user_above_age_with_update(users, query.age_threshold)
                .map(UserDto::from),
            first_names_joined: self.join_to_string(users, &query.delimiter, |u| {
                u.first_name().to_string()
            }),
        };

        tracing::info!(
            users = report.user_count,
            privileges = report.distinct_privileges.len(),
            "built roster report"
        );
        report
    }
}
