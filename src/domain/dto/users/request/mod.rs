pub mod auth_request;
pub mod create_user;
pub mod list_users;

pub use auth_request::{LoginRequest, RefreshTokenRequest};
pub use create_user::CreateUserRequest;
pub use list_users::{ListUsersQuery, UserIdPath, MAX_PAGE_SIZE};
