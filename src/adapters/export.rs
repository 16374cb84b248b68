//! Delimited-text export of the retained history.
//!
//! One row per retained tick, one column per metric in schema order, then
//! the derived risk scores. Column names match the live-dashboard keys so
//! exports stay comparable across sessions.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Metric, RiskKind, TrendStore};

/// Write the full retained history as CSV.
///
/// # Errors
/// Returns error if the sink fails.
pub fn write_csv<W: Write>(store: &TrendStore, out: &mut W) -> std::io::Result<()> {
    write!(out, "Time")?;
    for metric in Metric::ALL {
        write!(out, ",{}", metric.key())?;
    }
    for kind in RiskKind::ALL {
        write!(out, ",{}_Risk", kind.label())?;
    }
    writeln!(out)?;

    let timestamps = store.timestamp_window(store.len());
    let vitals = store.vital_rows();
    let risks = store.risk_rows();

    for i in 0..store.len() {
        write!(out, "{}", timestamps[i].format("%Y-%m-%d %H:%M:%S"))?;
        for metric in Metric::ALL {
            write!(
                out,
                ",{:.prec$}",
                vitals[i][metric.index()],
                prec = metric.precision() as usize
            )?;
        }
        for kind in RiskKind::ALL {
            write!(out, ",{}", risks[i][kind.index()])?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Export the retained history to a CSV file.
///
/// # Errors
/// Returns error if the file cannot be created or written.
pub fn export_to_file(store: &TrendStore, path: &Path) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_csv(store, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{assess, VitalSample};
    use chrono::{DateTime, Utc};

    fn seeded_store(ticks: usize) -> TrendStore {
        let origin = DateTime::parse_from_rfc3339("2026-01-01T08:00:00Z")
            .expect("Should parse origin")
            .with_timezone(&Utc);

        let mut store = TrendStore::new(100);
        for tick in 0..ticks {
            let sample = VitalSample::from_slice(
                origin + chrono::TimeDelta::seconds(tick as i64),
                &[tick as f64; Metric::COUNT],
            )
            .expect("Should build sample");
            let assessment = assess(&sample);
            store.append(&sample, &assessment).expect("Should append");
        }
        store
    }

    #[test]
    fn test_header_names_every_column() {
        let store = seeded_store(1);
        let mut buf = Vec::new();
        write_csv(&store, &mut buf).expect("Should write");

        let text = String::from_utf8(buf).expect("Should be UTF-8");
        let header = text.lines().next().expect("Should have header");

        assert!(header.starts_with("Time,HR,Temp,RR,SpO2"));
        assert!(header.ends_with("Sepsis_Risk,ARDS_Risk,Shock_Risk"));
        assert_eq!(
            header.split(',').count(),
            1 + Metric::COUNT + RiskKind::COUNT
        );
    }

    #[test]
    fn test_one_row_per_retained_tick() {
        let store = seeded_store(5);
        let mut buf = Vec::new();
        write_csv(&store, &mut buf).expect("Should write");

        let text = String::from_utf8(buf).expect("Should be UTF-8");
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 5);

        // Every row has the full column set, aligned with the header.
        for row in &rows {
            assert_eq!(row.split(',').count(), 1 + Metric::COUNT + RiskKind::COUNT);
        }
        assert!(rows[0].starts_with("2026-01-01 08:00:00"));
        assert!(rows[4].starts_with("2026-01-01 08:00:04"));
    }
}
