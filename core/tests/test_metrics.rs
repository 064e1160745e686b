// tests/test_metrics.rs
use chrono::NaiveDate;
use sportperf_core::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rec(date: NaiveDate, sport: &str, kind: &str, dur: f64, dist: f64, cal: f64, hr: f64, speed: f64) -> PerformanceRecord {
    PerformanceRecord {
        date,
        sport: sport.to_string(),
        training_type: kind.to_string(),
        duration_min: dur,
        distance_km: dist,
        calories: cal,
        hr_avg: hr,
        hr_max: hr + 20.0,
        speed_avg: speed,
        elevation_m: 50.0,
        notes: None,
    }
}

fn sample_log() -> PerformanceLog {
    // Registreringsrekkefølge ≠ datorekkefølge med vilje
    PerformanceLog::from(vec![
        rec(d(2024, 1, 17), "Cycling", "Interval", 60.0, 25.0, 600.0, 135.0, 25.0),
        rec(d(2024, 1, 8), "Running", "Endurance", 50.0, 10.0, 500.0, 150.0, 12.0),
        rec(d(2024, 1, 15), "Running", "Tempo", 45.0, 9.0, 450.0, 155.0, 12.0),
        rec(d(2024, 1, 20), "Running", "Endurance", 60.0, 12.0, 650.0, 145.0, 12.0),
    ])
}

#[test]
fn aggregate_sums_and_means() {
    let m = aggregate_metrics(&sample_log()).expect("non-empty");
    assert_eq!(m.count, 4);
    assert!((m.total_duration_min - 215.0).abs() < 1e-9);
    assert!((m.total_distance_km - 56.0).abs() < 1e-9);
    assert!((m.total_calories - 2200.0).abs() < 1e-9);
    assert!((m.total_elevation_m - 200.0).abs() < 1e-9);
    assert!((m.mean_speed_kmh - 15.25).abs() < 1e-9);
    assert!((m.mean_hr_avg - 146.25).abs() < 1e-9);

    // Progresjon følger dato, ikke registrering: 01-08 (10 km) → 01-20 (12 km)
    let p = m.distance_progression_pct.expect("two or more records");
    assert!((p - 20.0).abs() < 1e-9, "progression={p}");
    assert_eq!(m.speed_progression_pct, Some(0.0));
}

#[test]
fn aggregate_empty_is_none() {
    assert!(aggregate_metrics(&PerformanceLog::new()).is_none());
}

#[test]
fn single_record_has_no_progression() {
    let log = PerformanceLog::from(vec![rec(d(2024, 1, 8), "Running", "Endurance", 50.0, 10.0, 500.0, 150.0, 12.0)]);
    let m = aggregate_metrics(&log).unwrap();
    assert!(m.distance_progression_pct.is_none());
    assert!(m.speed_progression_pct.is_none());
}

#[test]
fn progression_zero_first_distance() {
    let log = PerformanceLog::from(vec![
        rec(d(2024, 1, 1), "Yoga", "Recovery", 30.0, 0.0, 100.0, 90.0, 0.0),
        rec(d(2024, 1, 2), "Running", "Endurance", 30.0, 5.0, 300.0, 140.0, 10.0),
    ]);
    let m = aggregate_metrics(&log).unwrap();
    assert_eq!(m.distance_progression_pct, Some(0.0));
    assert_eq!(m.speed_progression_pct, Some(0.0));
}

#[test]
fn breakdown_by_sport_first_appearance() {
    let b = sport_breakdown(&sample_log());
    assert_eq!(b.len(), 2);
    assert_eq!(b[0].sport, "Cycling");
    assert_eq!(b[1].sport, "Running");
    assert_eq!(b[1].count, 3);
    assert!((b[1].total_distance_km - 31.0).abs() < 1e-9);
    assert!((b[1].mean_distance_km - 10.33).abs() < 1e-9);
    assert!((b[1].mean_calories - 533.33).abs() < 1e-9);
}

#[test]
fn weekly_load_groups_iso_weeks() {
    let profile = UserProfile::default();
    let weeks = weekly_load(&sample_log(), &profile);
    assert_eq!(weeks.len(), 2);

    assert_eq!(weeks[0].week_start, d(2024, 1, 8));
    assert_eq!(weeks[0].week_end, d(2024, 1, 14));
    assert_eq!(weeks[0].sessions, 1);

    // 15., 17. og 20. januar er samme uke
    assert_eq!(weeks[1].week_start, d(2024, 1, 15));
    assert_eq!(weeks[1].sessions, 3);
    assert!((weeks[1].distance_km - 46.0).abs() < 1e-9);
    assert!(weeks[1].trimp > weeks[0].trimp);

    let single = session_trimp(&sample_log().records()[1], &profile);
    assert!((weeks[0].trimp - single).abs() < 0.05);
}

#[test]
fn distribution_sorted_by_count() {
    let dist = distribution(&sample_log());
    assert_eq!(dist.by_sport[0].category, "Running");
    assert_eq!(dist.by_sport[0].count, 3);
    assert_eq!(dist.by_sport[1].category, "Cycling");

    // Endurance (2) først, så Interval og Tempo i første-forekomst-rekkefølge
    let kinds: Vec<&str> = dist.by_training_type.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(kinds, vec!["Endurance", "Interval", "Tempo"]);
}

#[test]
fn filter_by_sport_and_dates() {
    let log = sample_log();
    let running = log.filter(&LogFilter::sport("Running"));
    assert_eq!(running.len(), 3);

    let window = log.filter(&LogFilter::between(d(2024, 1, 15), d(2024, 1, 17)));
    assert_eq!(window.len(), 2);

    assert_eq!(log.filter(&LogFilter::all()).len(), 4);
    assert_eq!(log.sports(), vec!["Cycling".to_string(), "Running".to_string()]);
    assert_eq!(log.first_date(), Some(d(2024, 1, 8)));
    assert_eq!(log.last_date(), Some(d(2024, 1, 20)));
}

#[test]
fn analysis_period_is_inclusive() {
    let log = sample_log();
    let today = d(2024, 1, 22);
    // 7 dager tilbake = 15. januar, inklusiv
    let last7 = AnalysisPeriod::Last7Days.apply(&log, today);
    assert_eq!(last7.len(), 3);
    assert_eq!(AnalysisPeriod::All.apply(&log, today).len(), 4);
    assert_eq!(AnalysisPeriod::Last3Months.start(today), Some(d(2023, 10, 24)));

    let p: AnalysisPeriod = serde_json::from_str("\"last_30_days\"").unwrap();
    assert_eq!(p, AnalysisPeriod::Last30Days);
}

#[test]
fn sorted_by_date_is_stable() {
    let log = PerformanceLog::from(vec![
        rec(d(2024, 2, 1), "B", "x", 1.0, 1.0, 1.0, 100.0, 1.0),
        rec(d(2024, 1, 1), "A", "x", 1.0, 1.0, 1.0, 100.0, 1.0),
        rec(d(2024, 2, 1), "C", "x", 1.0, 1.0, 1.0, 100.0, 1.0),
    ]);
    let sports: Vec<&str> = log.sorted_by_date().iter().map(|r| r.sport.as_str()).collect();
    assert_eq!(sports, vec!["A", "B", "C"]);
    assert_eq!(log.tail(2).len(), 2);
    assert_eq!(log.tail(10).len(), 3);
}
