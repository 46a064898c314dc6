use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper edge of one step in a scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Cutoff {
    /// Matches values `<= x`.
    AtMost(f64),
    /// Matches values `< x`.
    Below(f64),
}

impl Cutoff {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Cutoff::AtMost(x) => value <= x,
            Cutoff::Below(x) => value < x,
        }
    }
}

/// One row of a step function: values admitted by `cutoff` (and not by
/// an earlier row) score `points`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Step {
    pub cutoff: Cutoff,
    pub points: u32,
}

pub const fn at_most(x: f64, points: u32) -> Step {
    Step {
        cutoff: Cutoff::AtMost(x),
        points,
    }
}

pub const fn below(x: f64, points: u32) -> Step {
    Step {
        cutoff: Cutoff::Below(x),
        points,
    }
}

/// Score `value` against ascending `steps`. Anything past the last row
/// scores `otherwise`. NaN falls in no band and takes the highest points
/// the table can give.
pub fn step_score(value: f64, steps: &[Step], otherwise: u32) -> u32 {
    if value.is_nan() {
        return steps.iter().map(|s| s.points).fold(otherwise, u32::max);
    }
    steps
        .iter()
        .find(|step| step.cutoff.admits(value))
        .map_or(otherwise, |step| step.points)
}

/// A vital sign contributing to a composite score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Factor {
    pub id: String,
    pub name: String,
    pub max_points: u32,
    pub description: Option<String>,
}

impl Factor {
    pub fn new(id: &str, name: &str, max_points: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            max_points,
            description: None,
        }
    }
}
