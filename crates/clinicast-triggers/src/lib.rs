//! clinicast-triggers
//!
//! Alert detection over the latest readings of one signal: band breaches,
//! rapid jumps between consecutive readings, and deteriorating trends.

pub mod detect;
pub mod error;
pub mod thresholds;
pub mod trend;
