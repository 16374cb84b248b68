//! Domain layer: core monitoring types and logic.
//!
//! Pure types with no I/O: the metric schema, timestamped samples, the
//! bounded trend store, risk scoring, and alert evaluation.

mod alert;
mod metric;
mod risk;
mod sample;
mod trend;

pub use alert::{evaluate, AlertDescriptor, AlertLevel, AlertThresholds};
pub use metric::Metric;
pub use risk::{assess, RiskAssessment, RiskKind, RiskScore};
pub use sample::VitalSample;
pub use trend::{Snapshot, TrendStore};
