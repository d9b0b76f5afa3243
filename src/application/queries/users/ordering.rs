use super::UserQueryService;
use crate::domain::user::User;

impl UserQueryService {
    /// First names in descending lexicographic order.
    #[must_use]
    pub fn names_reverse_sorted(&self, users: &[User]) -> Vec<String> {
        let mut names: Vec<String> = users.iter().map(|u| u.first_name().to_string()).collect();
        names.sort_by(|a, b| b.cmp(a));
        tracing::debug!(count = names.len(), "sorted first names descending");
        names
    }

    #[must_use]
    pub fn sort_by_age_desc_then_name_asc(&self, users: &[User]) -> Vec<User> {
        let mut sorted = users.to_vec();
        sorted.sort_by(|a, b| {
            b.age()
                .cmp(&a.age())
                .then_with(|| a.first_name().cmp(b.first_name()))
        });
        sorted
    }
}
