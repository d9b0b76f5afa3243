// src/domain/user/mod.rs
pub mod entity;
pub mod specifications;
pub mod value_objects;

pub use entity::User;
pub use specifications::{HasPrivilege, LastNameIs, OlderThan, UserSpecification};
pub use value_objects::{Age, PersonName, Privilege};
