//! Data models for okta-admin

mod credentials;
pub mod group;
pub mod user;

pub use credentials::Credentials;
pub use group::{Group, GroupSnapshot};
pub use user::{CreateUserRequest, User};
