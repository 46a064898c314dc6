//! Daily feature rows for pain-intensity regression.

use std::collections::BTreeMap;

use clinicast_core::models::reading::Reading;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::stats;

pub const PAIN_FEATURE_NAMES: [&str; 3] = ["previous_day_mean", "three_day_mean", "day_of_week"];

/// Training rows derived from a pain history, one per recorded day from
/// the third day on, plus the row describing the day after the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct PainDataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
    pub next_day: Option<Vec<f64>>,
    pub distinct_days: usize,
}

impl PainDataset {
    pub fn feature_names() -> Vec<String> {
        PAIN_FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }
}

/// Mean value per UTC calendar day, oldest first.
pub fn daily_means(readings: &[Reading]) -> Vec<(Date, f64)> {
    let mut days: BTreeMap<Date, Vec<f64>> = BTreeMap::new();
    for reading in readings {
        let date = reading.timestamp.to_zoned(TimeZone::UTC).date();
        days.entry(date).or_default().push(reading.value);
    }
    days.into_iter()
        .map(|(date, values)| (date, stats::mean(&values)))
        .collect()
}

fn weekday(date: Date) -> f64 {
    f64::from(date.weekday().to_monday_zero_offset())
}

fn row(history: &[f64], date: Date) -> Vec<f64> {
    let previous = history.last().copied().unwrap_or(0.0);
    let window = &history[history.len().saturating_sub(3)..];
    vec![previous, stats::mean(window), weekday(date)]
}

pub fn pain_dataset(readings: &[Reading]) -> PainDataset {
    let days = daily_means(readings);
    let means: Vec<f64> = days.iter().map(|(_, m)| *m).collect();

    let mut features = Vec::new();
    let mut targets = Vec::new();
    for (i, (date, mean)) in days.iter().enumerate().skip(2) {
        features.push(row(&means[..i], *date));
        targets.push(*mean);
    }

    let next_day = days
        .last()
        .and_then(|(date, _)| date.tomorrow().ok())
        .map(|tomorrow| row(&means, tomorrow));

    PainDataset {
        features,
        targets,
        next_day,
        distinct_days: days.len(),
    }
}
