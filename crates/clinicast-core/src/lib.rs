//! clinicast-core
//!
//! Pure domain types and store key conventions.
//! No algorithms live here. This is the shared vocabulary of the
//! forecasting, scoring and trigger crates.

pub mod error;
pub mod models;
pub mod store_keys;
