use super::UserQueryService;
use crate::domain::user::{User, UserSpecification};

impl UserQueryService {
    /// Users satisfying every specification. No specifications match everyone.
    #[must_use]
    pub fn filter_by_all(&self, users: &[User], specs: &[&dyn UserSpecification]) -> Vec<User> {
        let matched: Vec<User> = users
            .iter()
            .filter(|user| specs.iter().all(|spec| spec.is_satisfied_by(user)))
            .cloned()
            .collect();
        tracing::debug!(
            input = users.len(),
            specs = specs.len(),
            matched = matched.len(),
            "filtered users"
        );
        matched
    }

    #[must_use]
    pub fn join_to_string<F>(&self, users: &[User], delimiter: &str, map_fn: F) -> String
    where
        F: Fn(&User) -> String,
    {
        users.iter().map(map_fn).collect::<Vec<_>>().join(delimiter)
    }
}
