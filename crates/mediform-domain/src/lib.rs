//! Mediform Domain
//!
//! Domain types for the mock clinic (doctors, patients, appointments),
//! the compiled-in seed tables that stand in for a backend, and the
//! geolocation utilities used by location-verified check-in.

pub mod geolocation;
pub mod models;
pub mod seed;

pub use models::*;
