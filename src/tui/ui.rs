//! UI module: view components for the monitoring dashboard.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Sparkline, Table, Tabs},
    Frame,
};

use crate::adapters::SyntheticVitals;
use crate::application::{cluster_sizes, MonitorSession};
use crate::domain::{AlertDescriptor, AlertLevel, Metric, RiskKind};

use super::app::App;
use super::styles::WardTheme;

/// Render the full dashboard for the selected patient.
pub(super) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header + patient tabs
            Constraint::Length(5),  // Risk banner
            Constraint::Min(10),    // Vitals + panels
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_risk_banner(f, chunks[1], app.selected_session());
    render_body(f, chunks[2], app.selected_session());
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(40)])
        .split(area);

    let mut title = vec![
        Span::styled(" vitalwatch", WardTheme::title()),
        Span::styled(" │ ", WardTheme::text_muted()),
        Span::styled("ICU Condition Monitoring", WardTheme::text_secondary()),
    ];
    if app.is_paused() {
        title.push(Span::styled(" │ ", WardTheme::text_muted()));
        title.push(Span::styled(
            "PAUSED",
            WardTheme::alert_emphasis(AlertLevel::Moderate),
        ));
    }
    let header = Paragraph::new(Line::from(title)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WardTheme::border()),
    );
    f.render_widget(header, chunks[0]);

    let tabs = Tabs::new(
        app.sessions()
            .iter()
            .map(|s| Line::from(s.label().to_string()))
            .collect::<Vec<_>>(),
    )
    .select(app.selected_index())
    .style(WardTheme::text_secondary())
    .highlight_style(WardTheme::accent())
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(WardTheme::border()),
    );
    f.render_widget(tabs, chunks[1]);
}

fn render_risk_banner(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(WardTheme::border())
        .title(Span::styled(" Risk Status ", WardTheme::title()));

    let lines = match session.current_alerts() {
        Ok(alerts) => alerts.iter().map(alert_line).collect(),
        Err(_) => vec![Line::from(Span::styled(
            "Awaiting first sample...",
            WardTheme::text_muted(),
        ))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn alert_line(alert: &AlertDescriptor) -> Line<'static> {
    let marker = if alert.is_urgent() { "▲" } else { "●" };
    Line::from(vec![
        Span::styled(
            format!(" {marker} {:8}", alert.kind.label()),
            WardTheme::alert_emphasis(alert.level),
        ),
        Span::styled(alert.message.clone(), WardTheme::alert(alert.level)),
    ])
}

fn render_body(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_vitals(f, chunks[0], session);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Risk gauges
            Constraint::Length(5),  // Sepsis trend
            Constraint::Min(0),     // Cluster insight
        ])
        .split(chunks[1]);

    render_risk_gauges(f, right[0], session);
    render_sepsis_trend(f, right[1], session);
    render_clusters(f, right[2], session);
}

fn render_vitals(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(WardTheme::border())
        .title(Span::styled(" Live Vitals ", WardTheme::title()));

    let snapshot = session.store().latest().ok();
    let rows: Vec<Row> = Metric::ALL
        .iter()
        .map(|&metric| {
            let (value_text, style) = match &snapshot {
                Some(s) => {
                    let value = s.vital(metric);
                    let style = if out_of_band(metric, value) {
                        WardTheme::alert_emphasis(AlertLevel::Critical)
                    } else {
                        WardTheme::text()
                    };
                    (
                        format!("{:.prec$}", value, prec = metric.precision() as usize),
                        style,
                    )
                }
                None => ("--".to_string(), WardTheme::text_muted()),
            };
            Row::new(vec![
                Cell::from(Span::styled(metric.label(), WardTheme::text_secondary())),
                Cell::from(Span::styled(value_text, style)),
                Cell::from(Span::styled(metric.unit(), WardTheme::text_muted())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Min(6),
        ],
    )
    .block(block)
    .column_spacing(1);

    f.render_widget(table, area);
}

/// Bedside-display emphasis for readings outside their safe band, matching
/// the highlighted channels of the live vitals panel.
fn out_of_band(metric: Metric, value: f64) -> bool {
    match metric {
        Metric::OxygenSaturation => value < 90.0,
        Metric::HeartRate => !(60.0..=120.0).contains(&value),
        Metric::Temperature => !(36.0..=39.0).contains(&value),
        _ => false,
    }
}

fn render_risk_gauges(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(WardTheme::border())
        .title(Span::styled(" Composite Risk ", WardTheme::title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Ok(alerts) = session.current_alerts() else {
        f.render_widget(
            Paragraph::new(Span::styled(
                "Awaiting first sample...",
                WardTheme::text_muted(),
            )),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(inner);

    for (alert, chunk) in alerts.iter().zip(chunks.iter()) {
        let gauge = Gauge::default()
            .block(Block::default().title(Span::styled(
                alert.kind.label(),
                WardTheme::text_secondary(),
            )))
            .gauge_style(WardTheme::alert(alert.level))
            .percent(u16::from(alert.value))
            .label(format!("{}% {}", alert.value, alert.level));
        f.render_widget(gauge, *chunk);
    }
}

fn render_sepsis_trend(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let width = usize::from(area.width.saturating_sub(2));
    let data: Vec<u64> = session
        .store()
        .risk_window(RiskKind::Sepsis, width)
        .into_iter()
        .map(u64::from)
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(WardTheme::border())
                .title(Span::styled(" Sepsis Trend ", WardTheme::title())),
        )
        .data(&data)
        .max(100)
        .style(WardTheme::accent());

    f.render_widget(sparkline, area);
}

fn render_clusters(f: &mut Frame, area: Rect, session: &MonitorSession<SyntheticVitals>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(WardTheme::border())
        .title(Span::styled(" Cluster Insight ", WardTheme::title()));

    let assignments = session.cluster_assignments();
    let lines: Vec<Line> = if assignments.is_empty() {
        vec![Line::from(Span::styled(
            "Waiting for enough data to perform clustering...",
            WardTheme::text_muted(),
        ))]
    } else {
        let sizes = cluster_sizes(&assignments, session.cluster_count());
        let total = assignments.len().max(1);
        sizes
            .iter()
            .enumerate()
            .map(|(cluster, &size)| {
                let bar = "█".repeat(size * 24 / total);
                Line::from(vec![
                    Span::styled(format!(" Cluster {cluster} "), WardTheme::text_secondary()),
                    Span::styled(bar, WardTheme::accent()),
                    Span::styled(format!(" {size}"), WardTheme::text()),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let status = app.status().map_or_else(
        || "Synthetic feed - not for clinical use.".to_string(),
        ToString::to_string,
    );

    let text = vec![
        Line::from(Span::styled(
            " q quit │ tab/←→ patient │ space pause │ r refresh │ e export csv",
            WardTheme::text_secondary(),
        )),
        Line::from(Span::styled(format!(" {status}"), WardTheme::text_muted())),
    ];

    let footer = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(WardTheme::border()),
    );
    f.render_widget(footer, area);
}
