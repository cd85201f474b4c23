//! Mediform Validation
//!
//! Pure validation functions shared by every mediform form screen.
//!
//! Every validator returns `Result<(), String>`: `Ok(())` means the value is
//! acceptable, `Err(message)` carries the human-readable reason shown next to
//! the field. Validators are total over `&str` input and never panic.

pub mod date;
pub mod email;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use password::*;
pub use phone::*;
pub use string::*;
