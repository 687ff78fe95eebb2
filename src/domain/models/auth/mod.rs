pub mod access_policy;
pub mod authenticated_user;

pub use access_policy::{AuthMode, RequiredRole};
pub use authenticated_user::AuthenticatedUser;
