use crate::domain::user::{entity::User, value_objects::Privilege};

pub trait UserSpecification {
    fn is_satisfied_by(&self, user: &User) -> bool;
}

impl<F> UserSpecification for F
where
    F: Fn(&User) -> bool,
{
    fn is_satisfied_by(&self, user: &User) -> bool {
        self(user)
    }
}

/// Age strictly greater than the given number of years.
pub struct OlderThan(pub u32);

impl UserSpecification for OlderThan {
    fn is_satisfied_by(&self, user: &User) -> bool {
        user.age() > self.0
    }
}

pub struct HasPrivilege(pub Privilege);

impl UserSpecification for HasPrivilege {
    fn is_satisfied_by(&self, user: &User) -> bool {
        user.has_privilege(self.0)
    }
}

pub struct LastNameIs<'a>(pub &'a str);

impl UserSpecification for LastNameIs<'_> {
    fn is_satisfied_by(&self, user: &User) -> bool {
        user.last_name() == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(age: u32, privileges: Vec<Privilege>) -> User {
        User::new("Grace", "Hopper", age, privileges)
    }

    #[test]
    fn older_than_is_strict() {
        assert!(OlderThan(30).is_satisfied_by(&user(31, vec![])));
        assert!(!OlderThan(30).is_satisfied_by(&user(30, vec![])));
    }

    #[test]
    fn has_privilege_checks_membership() {
        let spec = HasPrivilege(Privilege::Update);
        assert!(spec.is_satisfied_by(&user(40, vec![Privilege::Read, Privilege::Update])));
        assert!(!spec.is_satisfied_by(&user(40, vec![Privilege::Read])));
    }

    #[test]
    fn closures_act_as_specifications() {
        let even_age = |u: &User| u.age() % 2 == 0;
        assert!(even_age.is_satisfied_by(&user(40, vec![])));
        assert!(LastNameIs("Hopper").is_satisfied_by(&user(40, vec![])));
        assert!(!LastNameIs("hopper").is_satisfied_by(&user(40, vec![])));
    }
}
