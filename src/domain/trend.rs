//! Bounded rolling history for every tracked series.
//!
//! The store is the single source of truth for a session's history. Every
//! metric series, every derived risk series, and the shared timestamp series
//! always have identical length: index i refers to the same originating tick
//! across all of them.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::domain::{Metric, RiskAssessment, RiskKind, VitalSample};
use crate::{Result, VitalwatchError};

/// Latest values across every series, taken at a single tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    /// Capture timestamp of the most recent tick
    pub taken_at: DateTime<Utc>,
    /// Most recent reading per metric, in schema order
    pub vitals: [f64; Metric::COUNT],
    /// Most recent risk value per category
    pub risks: [u8; RiskKind::COUNT],
}

impl Snapshot {
    /// The latest reading for one metric.
    #[must_use]
    pub fn vital(&self, metric: Metric) -> f64 {
        self.vitals[metric.index()]
    }

    /// The latest value for one risk category.
    #[must_use]
    pub fn risk(&self, kind: RiskKind) -> u8 {
        self.risks[kind.index()]
    }
}

/// Capacity-bounded, index-aligned rolling store for one monitoring session.
///
/// Appends grow every series by one; once any series would exceed the
/// capacity, the oldest entry is evicted from every series simultaneously.
/// That eviction is the only place length ever decreases.
#[derive(Debug, Clone)]
pub struct TrendStore {
    capacity: usize,
    timestamps: VecDeque<DateTime<Utc>>,
    vitals: [VecDeque<f64>; Metric::COUNT],
    risks: [VecDeque<u8>; RiskKind::COUNT],
}

impl TrendStore {
    /// Create an empty store retaining at most `capacity` ticks.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            timestamps: VecDeque::with_capacity(capacity),
            vitals: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
            risks: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
        }
    }

    /// Number of retained ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Whether any tick has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Maximum number of retained ticks.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record one tick: the sample's readings, the derived risk values, and
    /// the shared timestamp, in a single all-or-nothing append.
    ///
    /// # Errors
    /// Returns [`VitalwatchError::SchemaMismatch`] if the sample is missing
    /// any schema metric; the store is left untouched in that case.
    pub fn append(&mut self, sample: &VitalSample, assessment: &RiskAssessment) -> Result<()> {
        // Validate completeness before mutating anything.
        let mut readings = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            readings[metric.index()] = sample
                .get(metric)
                .ok_or(VitalwatchError::SchemaMismatch(metric))?;
        }

        self.timestamps.push_back(sample.taken_at());
        for metric in Metric::ALL {
            self.vitals[metric.index()].push_back(readings[metric.index()]);
        }
        for kind in RiskKind::ALL {
            self.risks[kind.index()].push_back(assessment.score(kind).value);
        }

        while self.timestamps.len() > self.capacity {
            self.timestamps.pop_front();
            for series in &mut self.vitals {
                series.pop_front();
            }
            for series in &mut self.risks {
                series.pop_front();
            }
        }

        Ok(())
    }

    /// The most recent value of every series.
    ///
    /// # Errors
    /// Returns [`VitalwatchError::EmptyStore`] before the first append.
    pub fn latest(&self) -> Result<Snapshot> {
        let taken_at = *self.timestamps.back().ok_or(VitalwatchError::EmptyStore)?;

        let mut vitals = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            // Alignment invariant: every series is as long as the timestamps.
            vitals[metric.index()] = *self.vitals[metric.index()]
                .back()
                .ok_or(VitalwatchError::EmptyStore)?;
        }
        let mut risks = [0; RiskKind::COUNT];
        for kind in RiskKind::ALL {
            risks[kind.index()] = *self.risks[kind.index()]
                .back()
                .ok_or(VitalwatchError::EmptyStore)?;
        }

        Ok(Snapshot {
            taken_at,
            vitals,
            risks,
        })
    }

    /// The last `n` readings of one metric, oldest first. Clamps to the
    /// available history; never fails.
    #[must_use]
    pub fn metric_window(&self, metric: Metric, n: usize) -> Vec<f64> {
        Self::tail(&self.vitals[metric.index()], n)
    }

    /// The last `n` values of one risk series, oldest first.
    #[must_use]
    pub fn risk_window(&self, kind: RiskKind, n: usize) -> Vec<u8> {
        Self::tail(&self.risks[kind.index()], n)
    }

    /// The last `n` timestamps, oldest first.
    #[must_use]
    pub fn timestamp_window(&self, n: usize) -> Vec<DateTime<Utc>> {
        Self::tail(&self.timestamps, n)
    }

    /// Every retained tick's metric readings as rows in schema order,
    /// oldest first. Used by clustering and export.
    #[must_use]
    pub fn vital_rows(&self) -> Vec<[f64; Metric::COUNT]> {
        (0..self.len())
            .map(|i| {
                let mut row = [0.0; Metric::COUNT];
                for metric in Metric::ALL {
                    row[metric.index()] = self.vitals[metric.index()][i];
                }
                row
            })
            .collect()
    }

    /// Every retained tick's risk values as rows in category order.
    #[must_use]
    pub fn risk_rows(&self) -> Vec<[u8; RiskKind::COUNT]> {
        (0..self.len())
            .map(|i| {
                let mut row = [0; RiskKind::COUNT];
                for kind in RiskKind::ALL {
                    row[kind.index()] = self.risks[kind.index()][i];
                }
                row
            })
            .collect()
    }

    fn tail<T: Copy>(series: &VecDeque<T>, n: usize) -> Vec<T> {
        let skip = series.len().saturating_sub(n);
        series.iter().skip(skip).copied().collect()
    }
}
