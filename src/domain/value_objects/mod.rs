//! Value Objects
//!
//! Immutable types compared by value.

mod cleanup_action;
mod role_name;
mod user_id;

pub use cleanup_action::CleanupAction;
pub use role_name::{RoleName, DEFAULT_ROLE};
pub use user_id::UserId;
