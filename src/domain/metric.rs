//! Vital-sign metric schema.
//!
//! The tracked channels form a closed schema: every sample, series, and
//! export column is keyed by one of these variants rather than a free-form
//! string. Schema order is stable and defines export-column order.

use serde::{Deserialize, Serialize};

/// One tracked physiological channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Heart rate in beats per minute
    HeartRate,
    /// Core body temperature in °C
    Temperature,
    /// Respiratory rate in breaths per minute
    RespiratoryRate,
    /// Peripheral oxygen saturation in %
    OxygenSaturation,
    /// Serum lactate in mmol/L
    Lactate,
    /// Systolic blood pressure in mmHg
    SystolicPressure,
    /// White-cell count in 10⁹/L
    WhiteCellCount,
    /// Platelet count in 10⁹/L
    Platelets,
    /// Serum creatinine in mg/dL
    Creatinine,
    /// Total bilirubin in mg/dL
    Bilirubin,
    /// Mean arterial pressure in mmHg
    MeanArterialPressure,
    /// Glasgow Coma Scale score (3-15)
    ConsciousnessScore,
    /// Blood glucose in mmol/L
    Glucose,
    /// Urine output in mL/kg/h
    UrineOutput,
    /// International normalized ratio
    Inr,
    /// Inspired oxygen fraction in %
    InspiredOxygen,
    /// Arterial blood pH
    BloodPh,
    /// CO2 partial pressure in mmHg
    ArterialCo2,
}

impl Metric {
    /// Number of channels in the schema.
    pub const COUNT: usize = 18;

    /// Every channel in schema order.
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::HeartRate,
        Metric::Temperature,
        Metric::RespiratoryRate,
        Metric::OxygenSaturation,
        Metric::Lactate,
        Metric::SystolicPressure,
        Metric::WhiteCellCount,
        Metric::Platelets,
        Metric::Creatinine,
        Metric::Bilirubin,
        Metric::MeanArterialPressure,
        Metric::ConsciousnessScore,
        Metric::Glucose,
        Metric::UrineOutput,
        Metric::Inr,
        Metric::InspiredOxygen,
        Metric::BloodPh,
        Metric::ArterialCo2,
    ];

    /// Position of this channel in schema order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable column key used in exports and logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeartRate => "HR",
            Self::Temperature => "Temp",
            Self::RespiratoryRate => "RR",
            Self::OxygenSaturation => "SpO2",
            Self::Lactate => "Lactate",
            Self::SystolicPressure => "BP_sys",
            Self::WhiteCellCount => "WBC",
            Self::Platelets => "Platelets",
            Self::Creatinine => "Creatinine",
            Self::Bilirubin => "Bilirubin",
            Self::MeanArterialPressure => "MAP",
            Self::ConsciousnessScore => "GCS",
            Self::Glucose => "Glucose",
            Self::UrineOutput => "Urine_Output",
            Self::Inr => "INR",
            Self::InspiredOxygen => "FiO2",
            Self::BloodPh => "pH",
            Self::ArterialCo2 => "PaCO2",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HeartRate => "Heart Rate",
            Self::Temperature => "Temperature",
            Self::RespiratoryRate => "Respiratory Rate",
            Self::OxygenSaturation => "SpO2",
            Self::Lactate => "Lactate",
            Self::SystolicPressure => "Systolic BP",
            Self::WhiteCellCount => "WBC",
            Self::Platelets => "Platelets",
            Self::Creatinine => "Creatinine",
            Self::Bilirubin => "Bilirubin",
            Self::MeanArterialPressure => "MAP",
            Self::ConsciousnessScore => "GCS",
            Self::Glucose => "Glucose",
            Self::UrineOutput => "Urine Output",
            Self::Inr => "INR",
            Self::InspiredOxygen => "FiO2",
            Self::BloodPh => "pH",
            Self::ArterialCo2 => "PaCO2",
        }
    }

    /// Measurement unit for display.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::HeartRate => "bpm",
            Self::Temperature => "°C",
            Self::RespiratoryRate => "/min",
            Self::OxygenSaturation => "%",
            Self::Lactate => "mmol/L",
            Self::SystolicPressure => "mmHg",
            Self::WhiteCellCount => "10⁹/L",
            Self::Platelets => "10⁹/L",
            Self::Creatinine => "mg/dL",
            Self::Bilirubin => "mg/dL",
            Self::MeanArterialPressure => "mmHg",
            Self::ConsciousnessScore => "",
            Self::Glucose => "mmol/L",
            Self::UrineOutput => "mL/kg/h",
            Self::Inr => "",
            Self::InspiredOxygen => "%",
            Self::BloodPh => "",
            Self::ArterialCo2 => "mmHg",
        }
    }

    /// Plausible value range, used only by the synthetic feed.
    #[must_use]
    pub const fn plausible_range(self) -> (f64, f64) {
        match self {
            Self::HeartRate => (60.0, 140.0),
            Self::Temperature => (36.0, 40.0),
            Self::RespiratoryRate => (10.0, 30.0),
            Self::OxygenSaturation => (85.0, 100.0),
            Self::Lactate => (0.5, 4.5),
            Self::SystolicPressure => (90.0, 140.0),
            Self::WhiteCellCount => (4.0, 15.0),
            Self::Platelets => (100.0, 400.0),
            Self::Creatinine => (0.5, 2.5),
            Self::Bilirubin => (0.2, 3.0),
            Self::MeanArterialPressure => (60.0, 100.0),
            Self::ConsciousnessScore => (3.0, 15.0),
            Self::Glucose => (3.0, 15.0),
            Self::UrineOutput => (0.2, 2.5),
            Self::Inr => (0.9, 3.5),
            Self::InspiredOxygen => (21.0, 100.0),
            Self::BloodPh => (7.2, 7.55),
            Self::ArterialCo2 => (25.0, 55.0),
        }
    }

    /// Decimal places a reading is rounded and displayed at.
    #[must_use]
    pub const fn precision(self) -> u32 {
        match self {
            Self::HeartRate
            | Self::RespiratoryRate
            | Self::OxygenSaturation
            | Self::SystolicPressure
            | Self::Platelets
            | Self::ConsciousnessScore => 0,
            Self::Temperature
            | Self::WhiteCellCount
            | Self::MeanArterialPressure
            | Self::Glucose
            | Self::InspiredOxygen
            | Self::ArterialCo2 => 1,
            Self::Lactate
            | Self::Creatinine
            | Self::Bilirubin
            | Self::UrineOutput
            | Self::Inr
            | Self::BloodPh => 2,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_order_matches_index() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
        assert_eq!(keys.len(), Metric::COUNT);
    }

    #[test]
    fn test_plausible_ranges_are_ordered() {
        for metric in Metric::ALL {
            let (lo, hi) = metric.plausible_range();
            assert!(lo < hi, "{metric} range is inverted");
        }
    }
}
