//! Discrete alert levels derived from risk scores.

use serde::{Deserialize, Serialize};

use crate::domain::RiskKind;

/// Ordered alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    /// No significant indicators
    Low,
    /// Continued close monitoring recommended
    Moderate,
    /// Clinical assessment recommended
    High,
    /// Immediate review required; the presenter surfaces a blocking banner
    Critical,
}

impl AlertLevel {
    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),      // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (249, 115, 22),     // Orange (#F97316)
            Self::Critical => (244, 63, 94),  // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Risk-score cut-points for alerting.
///
/// A score maps to the highest level whose cut-point it reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Scores at or above this are at least Moderate
    pub moderate: u8,
    /// Scores at or above this are at least High
    pub high: u8,
    /// Scores at or above this are Critical
    pub critical: u8,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            moderate: 30,
            high: 60,
            critical: 80,
        }
    }
}

impl AlertThresholds {
    /// Map a risk value to its alert level.
    #[must_use]
    pub fn classify(&self, value: u8) -> AlertLevel {
        if value >= self.critical {
            AlertLevel::Critical
        } else if value >= self.high {
            AlertLevel::High
        } else if value >= self.moderate {
            AlertLevel::Moderate
        } else {
            AlertLevel::Low
        }
    }

    /// Check that the cut-points are ordered and within [0, 100].
    ///
    /// # Errors
    /// Returns a description of the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.moderate > self.high || self.high > self.critical {
            return Err(format!(
                "alert cut-points must be ordered: {}/{}/{}",
                self.moderate, self.high, self.critical
            ));
        }
        if self.critical > 100 {
            return Err(format!("critical cut-point {} exceeds 100", self.critical));
        }
        Ok(())
    }
}

/// Alert state for one risk category at one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDescriptor {
    /// Risk category this alert describes
    pub kind: RiskKind,
    /// Discretized severity
    pub level: AlertLevel,
    /// Underlying risk value
    pub value: u8,
    /// Presenter-ready message
    pub message: String,
}

impl AlertDescriptor {
    /// Whether the presenter should surface a blocking notification.
    #[must_use]
    pub fn is_urgent(&self) -> bool {
        self.level == AlertLevel::Critical
    }
}

/// Evaluate a risk value into an alert descriptor.
///
/// Stateless: purely a function of the current score and cut-points.
#[must_use]
pub fn evaluate(kind: RiskKind, value: u8, thresholds: &AlertThresholds) -> AlertDescriptor {
    let level = thresholds.classify(value);
    let message = match level {
        AlertLevel::Critical => {
            format!("{kind} risk critical at {value}% - immediate review required")
        }
        AlertLevel::High => format!("{kind} risk elevated at {value}% - assess patient"),
        AlertLevel::Moderate => format!("{kind} risk at {value}% - continue close monitoring"),
        AlertLevel::Low => format!("{kind} risk at {value}% - stable"),
    };

    AlertDescriptor {
        kind,
        level,
        value,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_cut_points() {
        let t = AlertThresholds::default();

        assert_eq!(t.classify(0), AlertLevel::Low);
        assert_eq!(t.classify(29), AlertLevel::Low);
        assert_eq!(t.classify(30), AlertLevel::Moderate);
        assert_eq!(t.classify(59), AlertLevel::Moderate);
        assert_eq!(t.classify(60), AlertLevel::High);
        assert_eq!(t.classify(79), AlertLevel::High);
        assert_eq!(t.classify(80), AlertLevel::Critical);
        assert_eq!(t.classify(100), AlertLevel::Critical);
    }

    #[test]
    fn test_level_is_monotonic_in_value() {
        let t = AlertThresholds::default();
        for value in 1..=100u8 {
            assert!(t.classify(value - 1) <= t.classify(value));
        }
    }

    #[test]
    fn test_descriptor_carries_kind_and_value() {
        let alert = evaluate(RiskKind::Sepsis, 92, &AlertThresholds::default());

        assert_eq!(alert.level, AlertLevel::Critical);
        assert!(alert.is_urgent());
        assert!(alert.message.contains("Sepsis"));
        assert!(alert.message.contains("92"));
    }

    #[test]
    fn test_only_critical_is_urgent() {
        let t = AlertThresholds::default();
        assert!(!evaluate(RiskKind::Ards, 75, &t).is_urgent());
        assert!(evaluate(RiskKind::Ards, 80, &t).is_urgent());
    }

    #[test]
    fn test_validate_rejects_unordered_cut_points() {
        let bad = AlertThresholds {
            moderate: 70,
            high: 60,
            critical: 80,
        };
        assert!(bad.validate().is_err());
        assert!(AlertThresholds::default().validate().is_ok());
    }
}
