// Kjernen i sportperf: rene beregninger over treningsloggen.
// Python-bindingene (pyo3) ligger bak feature "python".

pub mod config;
pub mod counters;
pub mod error;
pub mod formulas;
pub mod goals;
pub mod metrics;
pub mod models;
pub mod perflog;
pub mod records;
pub mod report;
pub mod session;
pub mod storage;
pub mod trimp;
pub mod types;
pub mod zones;

#[cfg(feature = "python")]
mod py;

pub use config::EngineConfig;
pub use counters::{counters, gather_text};
pub use error::EngineError;
pub use formulas::{
    average_speed_kmh, bmi, classify_bmi, classify_vo2max, met_calories, pace, riegel_predict,
    theoretical_max_hr, vo2max_estimate, BmiClass, MetActivity, Pace, RaceTime, RoundTo,
    Vo2maxClass, RACE_DISTANCES_KM,
};
pub use goals::{capped_percent, goal_progress, goal_progress_now, weekly_snapshot};
pub use metrics::{
    aggregate_metrics, distribution, progression_pct, sport_breakdown, week_start, weekly_load,
};
pub use models::{Goals, PerformanceRecord, RecordDraft, Sex, UserProfile};
pub use perflog::{AnalysisPeriod, LogFilter, PerformanceLog};
pub use records::personal_records;
pub use report::{build_report, ReportDocument, ReportRow};
pub use session::Session;
pub use storage::{
    export_csv, export_csv_path, export_csv_string, import_csv, import_csv_path, import_csv_str,
    template_csv, template_log, ImportMode, ImportOutcome, RejectedRow,
};
pub use trimp::{classify_trimp, session_trimp, trimp, LoadBand};
pub use types::{
    AggregateMetrics, CategoryCount, Distribution, GoalLine, GoalProgress, PersonalRecords,
    SportBreakdown, WeeklyLoad, WeeklySnapshot,
};
pub use zones::{hr_zones, HrZone, HrZones};
