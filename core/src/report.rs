// core/src/report.rs
// Sammendragsrapport: nøkkeltall + de siste øktene. Layout (PDF) gjøres i UI-laget.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::config::EngineConfig;
use crate::counters::counters;
use crate::error::EngineError;
use crate::metrics::aggregate_metrics;
use crate::perflog::PerformanceLog;

pub const REPORT_TITLE: &str = "Sports Performance Report";

pub const DETAIL_HEADER: [&str; 6] = ["Date", "Sport", "Type", "Duration", "Distance", "Speed"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    fn new(label: &str, value: String) -> Self {
        Self { label: label.to_string(), value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub generated_at: NaiveDateTime,
    pub summary: Vec<ReportRow>,
    pub detail_header: Vec<String>,
    pub details: Vec<Vec<String>>,
}

/// Bygger rapporten. Tom logg → `EmptyLog` (ingen "tom" rapport).
pub fn build_report(
    log: &PerformanceLog,
    config: &EngineConfig,
    generated_at: NaiveDateTime,
) -> Result<ReportDocument, EngineError> {
    let m = aggregate_metrics(log).ok_or(EngineError::EmptyLog)?;

    let summary = vec![
        ReportRow::new("Total sessions", m.count.to_string()),
        ReportRow::new("Total duration", format!("{:.0} min", m.total_duration_min)),
        ReportRow::new("Total distance", format!("{:.2} km", m.total_distance_km)),
        ReportRow::new("Calories burned", format!("{:.0} kcal", m.total_calories)),
        ReportRow::new("Average speed", format!("{:.2} km/h", m.mean_speed_kmh)),
        ReportRow::new("Average heart rate", format!("{:.0} bpm", m.mean_hr_avg)),
        ReportRow::new("Total elevation", format!("{:.0} m", m.total_elevation_m)),
    ];

    let details = log
        .tail(config.report_detail_rows)
        .iter()
        .map(|r| {
            vec![
                r.date.format("%d/%m/%Y").to_string(),
                r.sport.clone(),
                r.training_type.clone(),
                format!("{:.0} min", r.duration_min),
                format!("{:.2} km", r.distance_km),
                format!("{:.2} km/h", r.speed_avg),
            ]
        })
        .collect::<Vec<_>>();

    counters().reports_built.inc();
    log::info!(
        "report built: {} session(s) summarised, {} detail row(s)",
        m.count,
        details.len()
    );

    Ok(ReportDocument {
        title: REPORT_TITLE.to_string(),
        generated_at,
        summary,
        detail_header: DETAIL_HEADER.iter().map(|s| s.to_string()).collect(),
        details,
    })
}

impl ReportDocument {
    /// Enkel tekstgjengivelse (kolonner venstrejustert etter bredeste celle).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "Generated: {}", self.generated_at.format("%d/%m/%Y %H:%M"));
        out.push('\n');

        let label_w = self.summary.iter().map(|r| r.label.len()).max().unwrap_or(0);
        for row in &self.summary {
            let _ = writeln!(out, "{:<label_w$}  {}", row.label, row.value);
        }

        if self.details.is_empty() {
            return out;
        }
        out.push('\n');

        let mut widths: Vec<usize> = self.detail_header.iter().map(|h| h.chars().count()).collect();
        for row in &self.details {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let render = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{c:<width$}", width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };
        let _ = writeln!(out, "{}", render(&self.detail_header));
        for row in &self.details {
            let _ = writeln!(out, "{}", render(row));
        }
        out
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::Json {
            what: "ReportDocument",
            path: String::from("."),
            message: e.to_string(),
        })
    }
}
