//! clinicast-engine
//!
//! The host-facing service. An [`engine::Engine`] is built once with a
//! configuration and the stores it should cache into, then shared by
//! reference.

pub mod config;
pub mod engine;
pub mod error;
