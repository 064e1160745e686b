use chrono::{Datelike, NaiveDate};

use crate::metrics::week_start;
use crate::models::{Goals, PerformanceRecord};
use crate::perflog::PerformanceLog;
use crate::types::{GoalLine, GoalProgress, WeeklySnapshot};

/// Prosent av mål, kappet til 100. 0 når målet ikke er positivt.
pub fn capped_percent(actual: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (actual / target * 100.0).min(100.0)
}

fn line(actual: f64, target: f64) -> GoalLine {
    GoalLine { actual, target, percent: capped_percent(actual, target) }
}

fn in_week(r: &PerformanceRecord, today: NaiveDate) -> bool {
    week_start(r.date) == week_start(today)
}

fn in_month(r: &PerformanceRecord, today: NaiveDate) -> bool {
    r.date.year() == today.year() && r.date.month() == today.month()
}

fn in_year(r: &PerformanceRecord, today: NaiveDate) -> bool {
    r.date.year() == today.year()
}

#[derive(Default)]
struct WindowSums {
    distance_km: f64,
    duration_min: f64,
    calories: f64,
    sessions: usize,
}

fn sum_window<'a>(rs: impl Iterator<Item = &'a PerformanceRecord>) -> WindowSums {
    let mut s = WindowSums::default();
    for r in rs {
        s.distance_km += r.distance_km;
        s.duration_min += r.duration_min;
        s.calories += r.calories;
        s.sessions += 1;
    }
    s
}

/// Fremdrift mot målene for inneværende ISO-uke, måned og kalenderår.
pub fn goal_progress(log: &PerformanceLog, goals: &Goals, today: NaiveDate) -> GoalProgress {
    let week = sum_window(log.iter().filter(|r| in_week(r, today)));
    let month = sum_window(log.iter().filter(|r| in_month(r, today)));
    let year = sum_window(log.iter().filter(|r| in_year(r, today)));

    GoalProgress {
        today,
        week_start: week_start(today),
        weekly_distance: line(week.distance_km, goals.weekly_distance_km),
        monthly_distance: line(month.distance_km, goals.monthly_distance_km),
        weekly_sessions: line(week.sessions as f64, goals.weekly_sessions as f64),
        weekly_calories: line(week.calories, goals.weekly_calories),
        weekly_duration: line(week.duration_min, goals.weekly_duration_min),
        yearly_distance: line(year.distance_km, goals.yearly_distance_km),
    }
}

/// Samme som `goal_progress`, med lokal dato fra klokken.
pub fn goal_progress_now(log: &PerformanceLog, goals: &Goals) -> GoalProgress {
    goal_progress(log, goals, chrono::Local::now().date_naive())
}

/// Ukewidget: distanse, tid, økter, aktive dager og årsdistanse.
pub fn weekly_snapshot(log: &PerformanceLog, goals: &Goals, today: NaiveDate) -> WeeklySnapshot {
    let week = sum_window(log.iter().filter(|r| in_week(r, today)));
    let year = sum_window(log.iter().filter(|r| in_year(r, today)));

    let mut active_days = [false; 7];
    for r in log.iter().filter(|r| in_week(r, today)) {
        active_days[r.date.weekday().num_days_from_monday() as usize] = true;
    }

    let total_min = week.duration_min.max(0.0);
    WeeklySnapshot {
        week_start: week_start(today),
        distance_km: week.distance_km,
        duration_hours: (total_min / 60.0).floor() as u32,
        duration_minutes: (total_min % 60.0).floor() as u32,
        sessions: week.sessions,
        active_days,
        year_distance_km: year.distance_km,
        week_progress_pct: capped_percent(week.distance_km, goals.weekly_distance_km),
        year_progress_pct: capped_percent(year.distance_km, goals.yearly_distance_km),
    }
}
