// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Age, PersonName, Privilege};

/// A roster entry. Names are stored as given; no field is validated beyond
/// what its type enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub age: Age,
    pub privileges: Vec<Privilege>,
}

impl User {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        privileges: Vec<Privilege>,
    ) -> Self {
        Self {
            first_name: PersonName::new(first_name),
            last_name: PersonName::new(last_name),
            age: Age::new(age),
            privileges,
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age.years()
    }

    #[must_use]
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    #[must_use]
    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }

    /// Number of privilege entries, duplicates included.
    #[must_use]
    pub const fn privilege_count(&self) -> usize {
        self.privileges.len()
    }
}
