//! Timestamped multi-metric sample records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Metric;

/// One atomically captured set of vital-sign readings.
///
/// All readings in a sample share a single capture timestamp. A sample may
/// be partial at the ingestion boundary (a feed can drop channels); consumers
/// that require the full schema check completeness explicitly. Samples are
/// never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    taken_at: DateTime<Utc>,
    values: [Option<f64>; Metric::COUNT],
}

impl VitalSample {
    /// Create an empty sample captured at the given instant.
    #[must_use]
    pub fn new(taken_at: DateTime<Utc>) -> Self {
        Self {
            taken_at,
            values: [None; Metric::COUNT],
        }
    }

    /// Create a complete sample from readings in schema order.
    ///
    /// # Errors
    /// Returns error if the slice length is not [`Metric::COUNT`].
    pub fn from_slice(taken_at: DateTime<Utc>, readings: &[f64]) -> Result<Self, String> {
        if readings.len() != Metric::COUNT {
            return Err(format!(
                "Expected {} readings, got {}",
                Metric::COUNT,
                readings.len()
            ));
        }

        let mut sample = Self::new(taken_at);
        for (metric, &value) in Metric::ALL.iter().zip(readings) {
            sample.set(*metric, value);
        }
        Ok(sample)
    }

    /// Record a reading for one channel.
    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values[metric.index()] = Some(value);
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, value);
        self
    }

    /// The reading for one channel, if the feed supplied it.
    #[must_use]
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values[metric.index()]
    }

    /// Capture timestamp shared by every reading in this sample.
    #[must_use]
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Whether every schema channel has a reading.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// The first schema channel without a reading, if any.
    #[must_use]
    pub fn first_missing(&self) -> Option<Metric> {
        Metric::ALL
            .into_iter()
            .find(|metric| self.values[metric.index()].is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_requires_full_schema() {
        let now = Utc::now();
        assert!(VitalSample::from_slice(now, &[1.0; 3]).is_err());

        let sample = VitalSample::from_slice(now, &[1.0; Metric::COUNT])
            .expect("Should build from full slice");
        assert!(sample.is_complete());
        assert_eq!(sample.taken_at(), now);
    }

    #[test]
    fn test_partial_sample_reports_missing() {
        let sample = VitalSample::new(Utc::now()).with(Metric::HeartRate, 72.0);

        assert!(!sample.is_complete());
        assert_eq!(sample.get(Metric::HeartRate), Some(72.0));
        assert_eq!(sample.get(Metric::Lactate), None);
        assert_eq!(sample.first_missing(), Some(Metric::Temperature));
    }
}
