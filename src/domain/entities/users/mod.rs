//! Users Entity Module

pub mod user;

pub use user::{User, ROLE_ADMIN, ROLE_USER};
