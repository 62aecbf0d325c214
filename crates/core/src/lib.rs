//! Domain core for the weather request service.
//!
//! Pure logic only: no I/O, no async. The API crate wires these pieces to
//! the upstream provider client and the database.

pub mod current;
pub mod date_range;
pub mod error;
pub mod forecast;
pub mod location;
pub mod types;
