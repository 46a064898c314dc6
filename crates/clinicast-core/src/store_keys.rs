//! Store key conventions.
//!
//! Pure string functions. These define the canonical layout of keys in
//! whatever store the host injects into the engine.

use uuid::Uuid;

use crate::models::signal::SignalType;

pub fn regression_model(subject_id: Uuid) -> String {
    format!("models/{subject_id}")
}

pub fn smoothing_parameters(subject_id: Uuid, signal: SignalType) -> String {
    format!("parameters/{subject_id}/{signal}")
}

pub fn accuracy(key: &str, method: &str) -> String {
    format!("accuracy/{key}/{method}")
}

pub fn subject_signal(subject_id: Uuid, signal: SignalType) -> String {
    format!("{subject_id}/{signal}")
}
