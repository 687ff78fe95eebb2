//! 영속성 엔티티 (MongoDB 문서)

pub mod users;

pub use users::*;
