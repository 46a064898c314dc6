//! clinicast-forecast
//!
//! Numerical core: descriptive statistics, Gauss–Jordan inversion,
//! least-squares regression, exponential smoothing, parameter search and
//! forecast accuracy. Operates on windows passed in per call and keeps no
//! state of its own.

pub mod accuracy;
pub mod error;
pub mod features;
pub mod linalg;
pub mod optimizer;
pub mod predict;
pub mod regression;
pub mod smoothing;
pub mod stats;
