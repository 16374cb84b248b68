//! Per-patient monitoring session: the tick pipeline.
//!
//! A session owns its own store, feed, and alerting rules — monitoring two
//! patients means two sessions with nothing shared. The presenter decides
//! when a tick happens; the session only ever runs one synchronous pass.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::adapters::export;
use crate::application::cluster::{self, ClusterParams};
use crate::config::MonitorConfig;
use crate::domain::{
    assess, evaluate, AlertDescriptor, AlertThresholds, RiskAssessment, RiskKind, TrendStore,
};
use crate::ports::SampleSource;
use crate::Result;

/// Outcome of a single ingestion-and-scoring cycle.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Capture timestamp of the ingested sample
    pub taken_at: DateTime<Utc>,
    /// Scores derived from the sample
    pub assessment: RiskAssessment,
    /// Alert state per risk category
    pub alerts: Vec<AlertDescriptor>,
}

impl TickReport {
    /// Whether any alert requires a blocking notification.
    #[must_use]
    pub fn has_urgent(&self) -> bool {
        self.alerts.iter().any(AlertDescriptor::is_urgent)
    }
}

/// One monitored patient: a bounded history, a sample feed, and the
/// alerting rules applied to it.
pub struct MonitorSession<S: SampleSource> {
    label: String,
    source: S,
    store: TrendStore,
    thresholds: AlertThresholds,
    clustering: ClusterParams,
}

impl<S: SampleSource> MonitorSession<S> {
    /// Create a session from the configured capacity, cut-points, and
    /// clustering parameters.
    pub fn new(label: impl Into<String>, source: S, config: &MonitorConfig) -> Self {
        let label = label.into();
        tracing::info!(patient = %label, capacity = config.capacity, "monitoring session opened");
        Self {
            label,
            source,
            store: TrendStore::new(config.capacity),
            thresholds: config.thresholds,
            clustering: config.clustering,
        }
    }

    /// The patient label this session monitors.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The session's retained history.
    #[must_use]
    pub fn store(&self) -> &TrendStore {
        &self.store
    }

    /// Run one tick: pull a sample, score it, record it, evaluate alerts.
    ///
    /// The append is all-or-nothing; a failed tick leaves the retained
    /// history exactly as it was.
    ///
    /// # Errors
    /// Returns error if the feed fails or the sample is schema-incomplete.
    pub fn tick(&mut self) -> Result<TickReport> {
        let sample = self.source.next_sample()?;
        let assessment = assess(&sample);
        self.store.append(&sample, &assessment)?;

        let alerts: Vec<AlertDescriptor> = assessment
            .iter()
            .map(|score| evaluate(score.kind, score.value, &self.thresholds))
            .collect();

        for alert in alerts.iter().filter(|a| a.is_urgent()) {
            tracing::warn!(patient = %self.label, "{}", alert.message);
        }
        tracing::debug!(
            patient = %self.label,
            sepsis = assessment.score(RiskKind::Sepsis).value,
            ards = assessment.score(RiskKind::Ards).value,
            shock = assessment.score(RiskKind::Shock).value,
            retained = self.store.len(),
            "tick recorded"
        );

        Ok(TickReport {
            taken_at: sample.taken_at(),
            assessment,
            alerts,
        })
    }

    /// Alert state recomputed from the most recent retained tick.
    ///
    /// # Errors
    /// Returns [`crate::VitalwatchError::EmptyStore`] before the first tick.
    pub fn current_alerts(&self) -> Result<Vec<AlertDescriptor>> {
        let snapshot = self.store.latest()?;
        Ok(RiskKind::ALL
            .into_iter()
            .map(|kind| evaluate(kind, snapshot.risk(kind), &self.thresholds))
            .collect())
    }

    /// Cluster the retained window; empty while history is insufficient.
    #[must_use]
    pub fn cluster_assignments(&self) -> Vec<usize> {
        cluster::cluster_assignments(&self.store, &self.clustering)
    }

    /// Configured cluster count.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clustering.k
    }

    /// Write the retained history as CSV.
    ///
    /// # Errors
    /// Returns error if the sink fails.
    pub fn export_csv<W: Write>(&self, out: &mut W) -> Result<()> {
        export::write_csv(&self.store, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SyntheticVitals;
    use crate::domain::{AlertLevel, Metric, VitalSample};
    use crate::ports::SourceError;
    use crate::VitalwatchError;

    fn test_config() -> MonitorConfig {
        MonitorConfig {
            capacity: 100,
            ..MonitorConfig::default()
        }
    }

    fn test_session() -> MonitorSession<SyntheticVitals> {
        MonitorSession::new("Patient A", SyntheticVitals::with_seed(1), &test_config())
    }

    #[test]
    fn test_tick_records_and_reports() {
        let mut session = test_session();
        let report = session.tick().expect("Should tick");

        assert_eq!(session.store().len(), 1);
        assert_eq!(report.alerts.len(), RiskKind::COUNT);

        let snapshot = session.store().latest().expect("Should have data");
        assert_eq!(
            snapshot.risk(RiskKind::Sepsis),
            report.assessment.score(RiskKind::Sepsis).value
        );
    }

    #[test]
    fn test_history_stays_bounded_over_many_ticks() {
        let mut session = test_session();
        for _ in 0..105 {
            session.tick().expect("Should tick");
        }
        assert_eq!(session.store().len(), 100);
    }

    #[test]
    fn test_current_alerts_match_latest_tick() {
        let mut session = test_session();
        assert!(matches!(
            session.current_alerts(),
            Err(VitalwatchError::EmptyStore)
        ));

        let report = session.tick().expect("Should tick");
        let alerts = session.current_alerts().expect("Should have alerts");
        assert_eq!(alerts, report.alerts);
    }

    #[test]
    fn test_clustering_activates_with_history() {
        let mut session = test_session();
        for _ in 0..10 {
            session.tick().expect("Should tick");
        }
        assert!(session.cluster_assignments().is_empty());

        for _ in 0..10 {
            session.tick().expect("Should tick");
        }
        let assignments = session.cluster_assignments();
        assert_eq!(assignments.len(), session.store().len());
    }

    #[test]
    fn test_export_covers_retained_history() {
        let mut session = test_session();
        for _ in 0..5 {
            session.tick().expect("Should tick");
        }

        let mut buf = Vec::new();
        session.export_csv(&mut buf).expect("Should export");
        let text = String::from_utf8(buf).expect("Should be UTF-8");
        assert_eq!(text.lines().count(), 6); // header + 5 ticks
    }

    /// Feed that delivers one partial sample, then disconnects.
    struct FlakyFeed {
        delivered: bool,
    }

    impl SampleSource for FlakyFeed {
        fn next_sample(&mut self) -> std::result::Result<VitalSample, SourceError> {
            if self.delivered {
                return Err(SourceError::Disconnected);
            }
            self.delivered = true;
            Ok(VitalSample::new(Utc::now()).with(Metric::HeartRate, 72.0))
        }
    }

    #[test]
    fn test_failed_tick_leaves_history_untouched() {
        let mut session =
            MonitorSession::new("Patient B", FlakyFeed { delivered: false }, &test_config());

        let err = session.tick().unwrap_err();
        assert!(matches!(err, VitalwatchError::SchemaMismatch(_)));
        assert!(session.store().is_empty());

        let err = session.tick().unwrap_err();
        assert!(matches!(
            err,
            VitalwatchError::Source(SourceError::Disconnected)
        ));
        assert!(session.store().is_empty());
    }

    /// Feed whose vitals match every sepsis criterion.
    struct SepticFeed;

    impl SampleSource for SepticFeed {
        fn next_sample(&mut self) -> std::result::Result<VitalSample, SourceError> {
            let readings = [
                130.0, 39.2, 28.0, 88.0, 3.0, 92.0, 13.0, 140.0, 1.6, 2.1, 60.0, 12.0, 8.0,
                0.4, 1.2, 60.0, 7.2, 55.0,
            ];
            Ok(VitalSample::from_slice(Utc::now(), &readings).expect("Should build sample"))
        }
    }

    #[test]
    fn test_septic_vitals_raise_critical_alert() {
        let mut session = MonitorSession::new("Patient C", SepticFeed, &test_config());
        let report = session.tick().expect("Should tick");

        let sepsis = report.assessment.score(RiskKind::Sepsis);
        assert_eq!(sepsis.value, 100);

        let alert = report
            .alerts
            .iter()
            .find(|a| a.kind == RiskKind::Sepsis)
            .expect("Should have sepsis alert");
        assert_eq!(alert.level, AlertLevel::Critical);
        assert!(report.has_urgent());
    }
}
