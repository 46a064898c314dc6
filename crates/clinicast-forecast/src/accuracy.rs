use std::collections::VecDeque;

use clinicast_core::models::accuracy::{AccuracySample, AccuracyStats};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded ring of predicted/actual pairs for one (key, method). The
/// oldest sample is dropped once `capacity` is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyLedger {
    capacity: usize,
    samples: VecDeque<AccuracySample>,
}

impl AccuracyLedger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Change the ring size, dropping the oldest samples if it shrinks.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn push(&mut self, sample: AccuracySample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn stats(&self) -> AccuracyStats {
        accuracy_stats(&self.samples)
    }
}

impl Default for AccuracyLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// MAE, MAPE (percent) and RMSE over `samples`.
pub fn accuracy_stats<'a>(samples: impl IntoIterator<Item = &'a AccuracySample>) -> AccuracyStats {
    let mut count = 0usize;
    let mut abs_sum = 0.0;
    let mut pct_sum = 0.0;
    let mut sq_sum = 0.0;

    for sample in samples {
        let err = sample.actual - sample.predicted;
        count += 1;
        abs_sum += err.abs();
        sq_sum += err * err;
        if sample.actual != 0.0 {
            pct_sum += (err / sample.actual).abs();
        }
    }

    if count == 0 {
        return AccuracyStats::default();
    }

    let n = count as f64;
    AccuracyStats {
        mae: abs_sum / n,
        mape: pct_sum / n * 100.0,
        rmse: (sq_sum / n).sqrt(),
        sample_count: count,
    }
}
