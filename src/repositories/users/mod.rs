pub mod user_repo;
#[cfg(test)]
pub mod memory_user_repo;

pub use user_repo::{MongoUserRepository, UserFilter, UserRepository};
#[cfg(test)]
pub use memory_user_repo::InMemoryUserRepository;
