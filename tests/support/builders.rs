// tests/support/builders.rs
use user_query_core::domain::user::{Privilege, User};

pub struct UserBuilder {
    first_name: String,
    last_name: String,
    age: u32,
    privileges: Vec<Privilege>,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            first_name: "Test".into(),
            last_name: "User".into(),
            age: 30,
            privileges: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn privileges(mut self, privileges: &[Privilege]) -> Self {
        self.privileges = privileges.to_vec();
        self
    }

    pub fn build(self) -> User {
        User::new(self.first_name, self.last_name, self.age, self.privileges)
    }
}

pub fn user(first: &str, last: &str, age: u32, privileges: &[Privilege]) -> User {
    UserBuilder::new()
        .first_name(first)
        .last_name(last)
        .age(age)
        .privileges(privileges)
        .build()
}
