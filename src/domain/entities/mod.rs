//! Domain Entities
//!
//! Core domain entities that have identity.
//! - `UserAccount` - An account as returned by the user directory

mod user_account;

pub use user_account::UserAccount;
