//! # Vitalwatch
//!
//! Real-time vital-sign monitoring core for intensive-care sessions.
//!
//! This crate provides:
//! - A bounded rolling history for every tracked metric, aligned by tick
//! - Composite clinical risk indices (Sepsis, ARDS, Shock)
//! - Threshold-based alert evaluation
//! - Behavioral clustering over recent observations
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core monitoring types (metric schema, samples, trend store,
//!   risk scoring, alert levels)
//! - `ports`: Trait definitions for external collaborators (sample feeds)
//! - `adapters`: Concrete implementations (synthetic generator, CSV export)
//! - `application`: Per-patient session orchestration and clustering
//! - `tui`: Terminal presenter; owns the tick schedule

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use application::{MonitorSession, TickReport};
pub use config::MonitorConfig;
pub use domain::{AlertLevel, Metric, RiskKind, VitalSample};

/// Result type for vitalwatch operations.
pub type Result<T> = std::result::Result<T, VitalwatchError>;

/// Main error type for vitalwatch.
#[derive(Debug, thiserror::Error)]
pub enum VitalwatchError {
    #[error("sample is missing required metric {0}")]
    SchemaMismatch(domain::Metric),

    #[error("no samples have been recorded yet")]
    EmptyStore,

    #[error("sample feed failed: {0}")]
    Source(#[from] ports::SourceError),

    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
