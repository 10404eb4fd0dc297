//! Domain Layer
//!
//! Pure decision logic for role cleanup, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `UserAccount`
//! - `value_objects/` - Immutable value types (`RoleName`, `UserId`, `CleanupAction`)
//! - `policies/` - Business rules (which accounts are eligible)
//! - `ports/` - Interface definitions for infrastructure (`UserDirectory`, event sinks)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
