//! The single-column metric dashboard.
//!
//! One row per tracked metric: current value colored by its band, a trend
//! arrow, and the sparkline with its range label. Below those, the
//! current-conditions extras the windows don't track (gusts, dew point,
//! precipitation).

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::MetricSnapshot;
use crate::source::Observation;

/// Render the dashboard table from a fresh station snapshot.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let snapshots = app.station.snapshot_all();

    let mut rows: Vec<Row> = snapshots.iter().map(|snap| metric_row(app, snap)).collect();

    if let Some(ref obs) = app.latest {
        rows.extend(extra_rows(obs));
    }

    rows.push(Row::new(vec![Cell::from("")]));
    let footer = match app.station.reading_count() {
        0 => "Waiting for data...".to_string(),
        1 => "Collecting trend data...".to_string(),
        n => format!("Showing {n} readings"),
    };
    rows.push(Row::new(vec![
        Cell::from(""),
        Cell::from(Span::styled(
            footer,
            Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
        )),
    ]));

    let widths = [
        Constraint::Length(13), // Label
        Constraint::Length(14), // Value
        Constraint::Length(3),  // Trend arrow
        Constraint::Fill(1),    // Sparkline + range
    ];

    let table = Table::new(rows, widths).block(
        Block::default()
            .title(format!(" Weather Monitor - {} ", app.station_id))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

fn metric_row(app: &App, snap: &MetricSnapshot) -> Row<'static> {
    let value = snap.metric.format_value(snap.value);
    let graph = if snap.sparkline.is_empty() {
        String::new()
    } else if snap.range_label.is_empty() {
        snap.sparkline.clone()
    } else {
        format!("{} ({})", snap.sparkline, snap.range_label)
    };

    Row::new(vec![
        Cell::from(Span::styled(
            format!("{}:", snap.metric.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(value, app.theme.band_style(snap.band))),
        Cell::from(Span::styled(
            snap.trend.symbol(),
            app.theme.trend_style(snap.trend),
        )),
        Cell::from(Span::styled(
            graph,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
}

/// Current-conditions rows without history: shown only when present, the
/// rate/gust ones only when non-zero, as the original readout did.
fn extra_rows(obs: &Observation) -> Vec<Row<'static>> {
    let mut rows = Vec::new();

    if let Some(gust) = obs.wind_gust.filter(|g| *g > 0.0) {
        rows.push(plain_row("Wind Gust:", format!("{gust:.1} mph")));
    }
    if let Some(dir) = obs.wind_dir {
        rows.push(plain_row("Wind Dir:", format!("{dir:.0}°")));
    }
    if let Some(dewpt) = obs.dew_point {
        rows.push(plain_row("Dew Point:", format!("{dewpt:.1}°F")));
    }
    if let Some(rate) = obs.precip_rate.filter(|r| *r > 0.0) {
        rows.push(plain_row("Precip Rate:", format!("{rate:.2} in/hr")));
    }
    if let Some(total) = obs.precip_total.filter(|t| *t > 0.0) {
        rows.push(plain_row("Precip Total:", format!("{total:.2} in")));
    }

    rows
}

fn plain_row(label: &'static str, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Cell::from(value),
    ])
}
