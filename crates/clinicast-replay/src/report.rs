use clinicast_core::models::accuracy::AccuracyStats;
use clinicast_core::models::forecast::ForecastResult;
use clinicast_core::models::parameters::SmoothingParameters;
use clinicast_core::models::reading::Reading;
use clinicast_core::models::regression::{Prediction, RegressionModel};
use clinicast_core::models::score::{ClinicalScore, VitalsSnapshot};
use clinicast_core::models::signal::SignalType;
use clinicast_core::models::trigger::{Trigger, TrendResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Replay input: readings for any mix of subjects and signals, plus
/// optional bedside snapshots to score.
#[derive(Debug, Deserialize)]
pub struct ReplayInput {
    pub readings: Vec<Reading>,
    #[serde(default)]
    pub vitals: Vec<SubjectVitals>,
}

#[derive(Debug, Deserialize)]
pub struct SubjectVitals {
    pub subject_id: Uuid,
    pub snapshot: VitalsSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub series: Vec<SeriesReport>,
    pub skipped: Vec<SkippedSeries>,
    pub vitals: Vec<VitalsReport>,
}

/// A series the engine rejected, e.g. for duplicate timestamps.
#[derive(Debug, Serialize)]
pub struct SkippedSeries {
    pub subject_id: Uuid,
    pub signal_type: SignalType,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct SeriesReport {
    pub subject_id: Uuid,
    pub signal_type: SignalType,
    pub reading_count: usize,
    pub parameters: SmoothingParameters,
    pub forecast: ForecastResult,
    pub trend: TrendResult,
    pub triggers: Vec<Trigger>,
    /// One-step forecast of the final reading from the ones before it.
    pub holdout: Option<AccuracyStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain: Option<PainReport>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PainReport {
    Trained {
        model: RegressionModel,
        next_day: Prediction,
    },
    Skipped {
        reason: String,
    },
}

#[derive(Debug, Serialize)]
pub struct VitalsReport {
    pub subject_id: Uuid,
    pub news2: ClinicalScore,
    pub mews: ClinicalScore,
}
