use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Avledede nøkkeltall for et (allerede filtrert) utsnitt av loggen.
/// Beregnes på nytt ved hver forespørsel – lagres aldri.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AggregateMetrics {
    pub count: usize,
    pub total_duration_min: f64,
    pub total_distance_km: f64,
    pub total_calories: f64,
    pub total_elevation_m: f64,
    pub mean_speed_kmh: f64,
    pub mean_hr_avg: f64,
    /// Kun når utsnittet har >= 2 poster.
    pub distance_progression_pct: Option<f64>,
    pub speed_progression_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SportBreakdown {
    pub sport: String,
    pub count: usize,
    pub total_distance_km: f64,
    pub mean_distance_km: f64,
    pub total_duration_min: f64,
    pub mean_duration_min: f64,
    pub total_calories: f64,
    pub mean_calories: f64,
    pub mean_speed_kmh: f64,
}

/// Ukebelastning (ISO-uke, mandag–søndag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoad {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub sessions: usize,
    pub distance_km: f64,
    pub duration_min: f64,
    pub calories: f64,
    pub trimp: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Distribution {
    pub by_sport: Vec<CategoryCount>,
    pub by_training_type: Vec<CategoryCount>,
}

/// Personlige rekorder for én sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonalRecords {
    pub sport: String,
    pub max_distance_km: f64,
    pub max_duration_min: f64,
    pub max_speed_kmh: f64,
    pub max_calories: f64,
    /// (max_distance / varighet på økten med max_distance) * 60, i km/t.
    pub best_pace: f64,
}

/// Én mållinje: faktisk (ukappet), mål og prosent (kappet til 100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GoalLine {
    pub actual: f64,
    pub target: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub today: NaiveDate,
    pub week_start: NaiveDate,
    pub weekly_distance: GoalLine,
    pub monthly_distance: GoalLine,
    pub weekly_sessions: GoalLine,
    pub weekly_calories: GoalLine,
    pub weekly_duration: GoalLine,
    pub yearly_distance: GoalLine,
}

/// Ukewidget i dashboardet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySnapshot {
    pub week_start: NaiveDate,
    pub distance_km: f64,
    pub duration_hours: u32,
    pub duration_minutes: u32,
    pub sessions: usize,
    /// Mandag..søndag
    pub active_days: [bool; 7],
    pub year_distance_km: f64,
    pub week_progress_pct: f64,
    pub year_progress_pct: f64,
}
