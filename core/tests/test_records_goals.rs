// tests/test_records_goals.rs
use chrono::NaiveDate;
use sportperf_core::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rec(date: NaiveDate, sport: &str, dur: f64, dist: f64, cal: f64, speed: f64) -> PerformanceRecord {
    PerformanceRecord {
        date,
        sport: sport.to_string(),
        training_type: "Endurance".to_string(),
        duration_min: dur,
        distance_km: dist,
        calories: cal,
        hr_avg: 140.0,
        hr_max: 170.0,
        speed_avg: speed,
        elevation_m: 0.0,
        notes: None,
    }
}

#[test]
fn best_pace_uses_duration_of_longest_session() {
    let log = PerformanceLog::from(vec![
        rec(d(2024, 1, 1), "Running", 50.0, 10.0, 500.0, 12.0),
        rec(d(2024, 1, 5), "Running", 40.0, 10.0, 480.0, 15.0),
        rec(d(2024, 1, 7), "Running", 30.0, 8.0, 400.0, 16.0),
        rec(d(2024, 1, 9), "Cycling", 90.0, 40.0, 900.0, 26.7),
    ]);
    let pr = personal_records(&log);
    assert_eq!(pr.len(), 2);

    let run = &pr[0];
    assert_eq!(run.sport, "Running");
    assert_eq!(run.max_distance_km, 10.0);
    assert_eq!(run.max_duration_min, 50.0);
    assert_eq!(run.max_speed_kmh, 16.0);
    assert_eq!(run.max_calories, 500.0);
    // Første økt med 10 km (50 min) vinner, ikke den raskere på 40 min
    assert!((run.best_pace - 12.0).abs() < 1e-9, "best_pace={}", run.best_pace);

    assert!((pr[1].best_pace - 40.0 / 90.0 * 60.0).abs() < 1e-9);
}

#[test]
fn best_pace_zero_without_distance() {
    let log = PerformanceLog::from(vec![rec(d(2024, 1, 1), "Yoga", 60.0, 0.0, 200.0, 0.0)]);
    let pr = personal_records(&log);
    assert_eq!(pr[0].best_pace, 0.0);
    assert!(personal_records(&PerformanceLog::new()).is_empty());
}

fn goal_log() -> PerformanceLog {
    PerformanceLog::from(vec![
        rec(d(2024, 1, 15), "Running", 50.0, 10.0, 500.0, 12.0), // mandag
        rec(d(2024, 1, 17), "Cycling", 60.0, 30.0, 600.0, 30.0), // onsdag
        rec(d(2024, 1, 8), "Running", 30.0, 5.0, 300.0, 10.0),   // forrige uke
        rec(d(2023, 12, 31), "Running", 40.0, 8.0, 400.0, 12.0), // forrige år
    ])
}

#[test]
fn goal_progress_windows() {
    let today = d(2024, 1, 17);
    let g = goal_progress(&goal_log(), &Goals::default(), today);

    assert_eq!(g.week_start, d(2024, 1, 15));
    assert!((g.weekly_distance.actual - 40.0).abs() < 1e-9);
    assert!((g.weekly_distance.percent - 80.0).abs() < 1e-9);
    assert_eq!(g.weekly_sessions.actual, 2.0);
    assert!((g.weekly_sessions.percent - 50.0).abs() < 1e-9);
    assert!((g.weekly_calories.percent - 55.0).abs() < 1e-9);
    assert!((g.weekly_duration.actual - 110.0).abs() < 1e-9);
    assert!((g.monthly_distance.actual - 45.0).abs() < 1e-9);
    assert!((g.yearly_distance.actual - 45.0).abs() < 1e-9);
    assert!((g.yearly_distance.percent - 9.0).abs() < 1e-9);
}

#[test]
fn goal_percent_is_capped_but_actual_is_not() {
    let goals = Goals { weekly_distance_km: 20.0, ..Goals::default() };
    let g = goal_progress(&goal_log(), &goals, d(2024, 1, 17));
    assert_eq!(g.weekly_distance.percent, 100.0);
    assert!((g.weekly_distance.actual - 40.0).abs() < 1e-9);

    assert_eq!(capped_percent(10.0, 0.0), 0.0);
}

#[test]
fn weekly_snapshot_active_days() {
    let s = weekly_snapshot(&goal_log(), &Goals::default(), d(2024, 1, 17));
    assert_eq!(s.active_days, [true, false, true, false, false, false, false]);
    assert_eq!(s.sessions, 2);
    assert_eq!((s.duration_hours, s.duration_minutes), (1, 50));
    assert!((s.year_distance_km - 45.0).abs() < 1e-9);
    assert!((s.week_progress_pct - 80.0).abs() < 1e-9);
}

#[test]
fn week_window_crosses_year_boundary() {
    // 2024-01-01 er en mandag; 2023-12-31 er søndagen før → ulik uke
    let g = goal_progress(&goal_log(), &Goals::default(), d(2023, 12, 31));
    assert_eq!(g.week_start, d(2023, 12, 25));
    assert!((g.weekly_distance.actual - 8.0).abs() < 1e-9);
    assert!((g.yearly_distance.actual - 8.0).abs() < 1e-9);
}

#[test]
fn best_pace_zero_when_longest_session_has_no_duration() {
    let log = PerformanceLog::from(vec![
        rec(d(2024, 1, 1), "Running", 0.0, 12.0, 0.0, 0.0),
        rec(d(2024, 1, 2), "Running", 45.0, 9.0, 450.0, 12.0),
    ]);
    let pr = personal_records(&log);
    assert_eq!(pr[0].max_distance_km, 12.0);
    assert_eq!(pr[0].best_pace, 0.0);
    assert!(pr[0].best_pace.is_finite());
}
