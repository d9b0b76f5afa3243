// tests/support/fixtures.rs
use once_cell::sync::Lazy;
use user_query_core::domain::user::{Privilege::*, User};

use super::builders::user;

static ROSTER: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user("Mia", "Smith", 28, &[Read, Write]),
        user("Liam", "Jones", 45, &[Read, Update, Delete]),
        user("Ava", "Smith", 45, &[Update]),
        user("Noah", "Brown", 17, &[]),
        user("Emma", "Jones", 33, &[Create, Read, Update, Delete]),
        user("Lucas", "Smith", 61, &[Read]),
        user("Zoe", "Garcia", 28, &[Write, Write]),
    ]
});

/// Seven users with mixed ages, repeated last names and overlapping privileges.
pub fn roster() -> &'static [User] {
    &ROSTER
}
