//! Domain Policies
//!
//! Business rules that govern behavior.
//! These are pure functions that operate on domain entities.

mod single_role;

pub use single_role::{Eligibility, SingleRolePolicy};
