//! Shared contracts for the carbon-management dashboard.
//!
//! Pure data types only: domain aggregates, closed enums, projection and
//! dashboard DTOs, validation types. No I/O and no state; that lives in the
//! `engine` crate.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
