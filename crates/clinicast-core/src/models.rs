pub mod accuracy;
pub mod forecast;
pub mod parameters;
pub mod reading;
pub mod regression;
pub mod score;
pub mod signal;
pub mod trigger;
