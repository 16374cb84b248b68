//! Synthetic vital-sign generator.
//!
//! Stands in for a real instrument feed: draws each metric uniformly from
//! its plausible range, rounded to the metric's display precision. Seedable
//! so demo sessions are reproducible.

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::{Metric, VitalSample};
use crate::ports::{SampleSource, SourceError};

/// Feed of randomly generated, always-complete samples.
pub struct SyntheticVitals {
    rng: ChaCha20Rng,
}

impl SyntheticVitals {
    /// Generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl SampleSource for SyntheticVitals {
    fn next_sample(&mut self) -> Result<VitalSample, SourceError> {
        let mut sample = VitalSample::new(Utc::now());
        for metric in Metric::ALL {
            let (lo, hi) = metric.plausible_range();
            let raw: f64 = self.rng.gen_range(lo..=hi);
            let scale = 10f64.powi(metric.precision() as i32);
            sample.set(metric, (raw * scale).round() / scale);
        }
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_complete_and_in_range() {
        let mut source = SyntheticVitals::with_seed(7);
        for _ in 0..50 {
            let sample = source.next_sample().expect("Should generate");
            assert!(sample.is_complete());
            for metric in Metric::ALL {
                let value = sample.get(metric).expect("Should be complete");
                let (lo, hi) = metric.plausible_range();
                assert!(value >= lo && value <= hi, "{metric} = {value} outside range");
            }
        }
    }

    #[test]
    fn test_same_seed_yields_same_readings() {
        let mut a = SyntheticVitals::with_seed(42);
        let mut b = SyntheticVitals::with_seed(42);

        for _ in 0..10 {
            let sa = a.next_sample().expect("Should generate");
            let sb = b.next_sample().expect("Should generate");
            for metric in Metric::ALL {
                assert_eq!(sa.get(metric), sb.get(metric));
            }
        }
    }

    #[test]
    fn test_readings_respect_precision() {
        let mut source = SyntheticVitals::with_seed(3);
        let sample = source.next_sample().expect("Should generate");

        let hr = sample.get(Metric::HeartRate).expect("Should be complete");
        assert_eq!(hr, hr.round());
    }
}
