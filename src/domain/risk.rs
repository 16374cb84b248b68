//! Composite clinical risk scoring.
//!
//! Each risk is the normalized percentage of matched criteria from a fixed
//! set of independent boolean clinical rules. The rule sets and denominators
//! are stable across ticks so scores stay comparable over a session; there
//! is no weighting and no interaction between rules.

use serde::{Deserialize, Serialize};

use crate::domain::{Metric, VitalSample};

/// Named composite risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskKind {
    Sepsis,
    Ards,
    Shock,
}

impl RiskKind {
    /// Number of risk categories.
    pub const COUNT: usize = 3;

    /// Every category, in derived-series and export-column order.
    pub const ALL: [RiskKind; RiskKind::COUNT] =
        [RiskKind::Sepsis, RiskKind::Ards, RiskKind::Shock];

    /// Position of this category in derived-series order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of boolean criteria feeding this score.
    #[must_use]
    pub const fn criteria(self) -> u8 {
        match self {
            Self::Sepsis => 12,
            Self::Ards | Self::Shock => 4,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sepsis => "Sepsis",
            Self::Ards => "ARDS",
            Self::Shock => "Shock",
        }
    }
}

impl std::fmt::Display for RiskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized percentage of matched criteria for one risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Risk category this score belongs to
    pub kind: RiskKind,
    /// How many criteria matched
    pub matched: u8,
    /// `(100 * matched) / criteria`, truncated; always in [0, 100]
    pub value: u8,
}

impl RiskScore {
    fn from_matched(kind: RiskKind, matched: u8) -> Self {
        let value = (100 * u32::from(matched)) / u32::from(kind.criteria());
        Self {
            kind,
            matched,
            value: value as u8,
        }
    }
}

/// Scores for every risk category, derived from a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    scores: [RiskScore; RiskKind::COUNT],
}

impl RiskAssessment {
    /// The score for one category.
    #[must_use]
    pub fn score(&self, kind: RiskKind) -> RiskScore {
        self.scores[kind.index()]
    }

    /// All scores in category order.
    pub fn iter(&self) -> impl Iterator<Item = &RiskScore> {
        self.scores.iter()
    }
}

/// Score a sample against every risk category.
///
/// Pure function: identical samples always yield identical assessments.
/// A missing reading makes the criteria that depend on it count as
/// unmatched rather than failing the assessment.
#[must_use]
pub fn assess(sample: &VitalSample) -> RiskAssessment {
    RiskAssessment {
        scores: [
            RiskScore::from_matched(RiskKind::Sepsis, sepsis_matched(sample)),
            RiskScore::from_matched(RiskKind::Ards, ards_matched(sample)),
            RiskScore::from_matched(RiskKind::Shock, shock_matched(sample)),
        ],
    }
}

fn sepsis_matched(s: &VitalSample) -> u8 {
    count(&[
        outside(s, Metric::HeartRate, 60.0, 120.0),
        outside(s, Metric::Temperature, 36.0, 39.0),
        outside(s, Metric::RespiratoryRate, 12.0, 25.0),
        below(s, Metric::OxygenSaturation, 90.0),
        above(s, Metric::Lactate, 2.5),
        below(s, Metric::SystolicPressure, 100.0),
        outside(s, Metric::WhiteCellCount, 4.0, 12.0),
        above(s, Metric::Creatinine, 1.5),
        above(s, Metric::Bilirubin, 2.0),
        below(s, Metric::Platelets, 150.0),
        below(s, Metric::MeanArterialPressure, 65.0),
        below(s, Metric::ConsciousnessScore, 13.0),
    ])
}

fn ards_matched(s: &VitalSample) -> u8 {
    count(&[
        above(s, Metric::InspiredOxygen, 50.0),
        below(s, Metric::BloodPh, 7.3),
        above(s, Metric::ArterialCo2, 50.0),
        below(s, Metric::OxygenSaturation, 90.0),
    ])
}

fn shock_matched(s: &VitalSample) -> u8 {
    count(&[
        below(s, Metric::MeanArterialPressure, 65.0),
        above(s, Metric::Lactate, 2.0),
        below(s, Metric::UrineOutput, 0.5),
        below(s, Metric::SystolicPressure, 100.0),
    ])
}

fn count(criteria: &[bool]) -> u8 {
    criteria.iter().filter(|&&matched| matched).count() as u8
}

fn above(s: &VitalSample, metric: Metric, limit: f64) -> bool {
    s.get(metric).is_some_and(|v| v > limit)
}

fn below(s: &VitalSample, metric: Metric, limit: f64) -> bool {
    s.get(metric).is_some_and(|v| v < limit)
}

fn outside(s: &VitalSample, metric: Metric, lo: f64, hi: f64) -> bool {
    s.get(metric).is_some_and(|v| v < lo || v > hi)
}
