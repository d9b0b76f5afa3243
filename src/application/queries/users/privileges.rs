use super::UserQueryService;
use crate::domain::user::{HasPrivilege, OlderThan, Privilege, User, UserSpecification};
use std::collections::{BTreeMap, HashSet};

impl UserQueryService {
    /// Every privilege held by at least one user, in order of first appearance.
    #[must_use]
    pub fn distinct_privileges(&self, users: &[User]) -> Vec<Privilege> {
        let mut seen = HashSet::new();
        users
            .iter()
            .flat_map(|u| u.privileges().iter().copied())
            .filter(|privilege| seen.insert(*privilege))
            .collect()
    }

    /// First user, in input order, older than `age` who also holds `Update`.
    #[must_use]
    pub fn first_user_above_age_with_update(&self, users: &[User], age: u32) -> Option<User> {
        let older = OlderThan(age);
        let updater = HasPrivilege(Privilege::Update);
        users
            .iter()
            .find(|u| older.is_satisfied_by(u) && updater.is_satisfied_by(u))
            .cloned()
    }

    #[must_use]
    pub fn group_by_privilege_count(&self, users: &[User]) -> BTreeMap<usize, Vec<User>> {
        let mut groups: BTreeMap<usize, Vec<User>> = BTreeMap::new();
        for user in users {
            groups
                .entry(user.privilege_count())
                .or_default()
                .push(user.clone());
        }
        tracing::debug!(groups = groups.len(), "grouped users by privilege count");
        groups
    }

    /// Users holding each privilege. A user listing the same privilege twice
    /// still appears once in that group.
    #[must_use]
    pub fn group_by_privilege(&self, users: &[User]) -> BTreeMap<Privilege, Vec<User>> {
        let mut groups: BTreeMap<Privilege, Vec<User>> = BTreeMap::new();
        for user in users {
            let mut seen = HashSet::new();
            for privilege in user.privileges() {
                if seen.insert(*privilege) {
                    groups.entry(*privilege).or_default().push(user.clone());
                }
            }
        }
        tracing::debug!(groups = groups.len(), "grouped users by privilege");
        groups
    }
}
