use super::UserQueryService;
use crate::domain::user::User;
use std::collections::{BTreeMap, HashMap};

/// Returned by [`UserQueryService::average_age`] for an empty list.
pub const UNDEFINED_AVERAGE_AGE: f64 = -1.0;

impl UserQueryService {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_age(&self, users: &[User]) -> f64 {
        if users.is_empty() {
            return UNDEFINED_AVERAGE_AGE;
        }
        let total: u64 = users.iter().map(|u| u64::from(u.age())).sum();
        total as f64 / users.len() as f64
    }

    /// Most common last name among names borne by at least two users.
    ///
    /// Ties go to the name that appears first in `users`.
    #[must_use]
    pub fn most_frequent_last_name(&self, users: &[User]) -> Option<String> {
        // name -> (count, first index)
        let mut tally: HashMap<&str, (u64, usize)> = HashMap::new();
        for (index, user) in users.iter().enumerate() {
            tally.entry(user.last_name()).or_insert((0, index)).0 += 1;
        }

        tally
            .into_iter()
            .filter(|(_, (count, _))| *count >= 2)
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                count_a.cmp(count_b).then_with(|| first_b.cmp(first_a))
            })
            .map(|(name, _)| name.to_string())
    }

    #[must_use]
    pub fn last_name_counts(&self, users: &[User]) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for user in users {
            *counts.entry(user.last_name().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
