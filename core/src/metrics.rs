use chrono::{Datelike, Duration, NaiveDate};
use ordered_float::OrderedFloat;

use crate::formulas::RoundTo;
use crate::models::{PerformanceRecord, UserProfile};
use crate::perflog::PerformanceLog;
use crate::trimp::session_trimp;
use crate::types::{AggregateMetrics, CategoryCount, Distribution, SportBreakdown, WeeklyLoad};

fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for x in xs {
        sum += x;
        cnt += 1;
    }
    if cnt == 0 { 0.0 } else { sum / cnt as f64 }
}

/// (siste - første) / første * 100. 0 når første == 0 (policy, ikke avledet).
pub fn progression_pct(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        return 0.0;
    }
    let pct = (last - first) / first * 100.0;
    if pct.is_finite() { pct } else { 0.0 }
}

/// Nøkkeltall for utsnittet. None = "ingen data" (egen tilstand, ikke nullfylt).
pub fn aggregate_metrics(log: &PerformanceLog) -> Option<AggregateMetrics> {
    if log.is_empty() {
        return None;
    }

    let mut m = AggregateMetrics {
        count: log.len(),
        total_duration_min: log.iter().map(|r| r.duration_min).sum(),
        total_distance_km: log.iter().map(|r| r.distance_km).sum(),
        total_calories: log.iter().map(|r| r.calories).sum(),
        total_elevation_m: log.iter().map(|r| r.elevation_m).sum(),
        mean_speed_kmh: mean(log.iter().map(|r| r.speed_avg)),
        mean_hr_avg: mean(log.iter().map(|r| r.hr_avg)),
        distance_progression_pct: None,
        speed_progression_pct: None,
    };

    if log.len() > 1 {
        let sorted = log.sorted_by_date();
        if let (Some(first), Some(last)) = (sorted.first(), sorted.last()) {
            m.distance_progression_pct = Some(progression_pct(first.distance_km, last.distance_km));
            m.speed_progression_pct = Some(progression_pct(first.speed_avg, last.speed_avg));
        }
    }

    Some(m)
}

/// Grupperer på sport i første-forekomst-rekkefølge.
pub(crate) fn group_by_sport(log: &PerformanceLog) -> Vec<(String, Vec<&PerformanceRecord>)> {
    let mut groups: Vec<(String, Vec<&PerformanceRecord>)> = Vec::new();
    for r in log {
        match groups.iter_mut().find(|(s, _)| s == &r.sport) {
            Some((_, rs)) => rs.push(r),
            None => groups.push((r.sport.clone(), vec![r])),
        }
    }
    groups
}

/// Per-sport sum/snitt, to desimaler.
pub fn sport_breakdown(log: &PerformanceLog) -> Vec<SportBreakdown> {
    group_by_sport(log)
        .into_iter()
        .map(|(sport, rs)| {
            let total_distance_km: f64 = rs.iter().map(|r| r.distance_km).sum();
            let total_duration_min: f64 = rs.iter().map(|r| r.duration_min).sum();
            let total_calories: f64 = rs.iter().map(|r| r.calories).sum();
            let n = rs.len() as f64;
            SportBreakdown {
                sport,
                count: rs.len(),
                total_distance_km: total_distance_km.round_to(2),
                mean_distance_km: (total_distance_km / n).round_to(2),
                total_duration_min: total_duration_min.round_to(2),
                mean_duration_min: (total_duration_min / n).round_to(2),
                total_calories: total_calories.round_to(2),
                mean_calories: (total_calories / n).round_to(2),
                mean_speed_kmh: mean(rs.iter().map(|r| r.speed_avg)).round_to(2),
            }
        })
        .collect()
}

/// Mandag i ISO-uken til `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Ukesummer (stigende), inkl. summert TRIMP fra profilens pulsverdier.
pub fn weekly_load(log: &PerformanceLog, profile: &UserProfile) -> Vec<WeeklyLoad> {
    let mut weeks: Vec<WeeklyLoad> = Vec::new();
    for r in log {
        let start = week_start(r.date);
        let idx = match weeks.iter().position(|w| w.week_start == start) {
            Some(i) => i,
            None => {
                weeks.push(WeeklyLoad {
                    week_start: start,
                    week_end: start + Duration::days(6),
                    sessions: 0,
                    distance_km: 0.0,
                    duration_min: 0.0,
                    calories: 0.0,
                    trimp: 0.0,
                });
                weeks.len() - 1
            }
        };
        let w = &mut weeks[idx];
        w.sessions += 1;
        w.distance_km += r.distance_km;
        w.duration_min += r.duration_min;
        w.calories += r.calories;
        w.trimp += session_trimp(r, profile);
    }
    for w in &mut weeks {
        w.trimp = w.trimp.round_to(1);
    }
    weeks.sort_by_key(|w| w.week_start);
    weeks
}

fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut out: Vec<CategoryCount> = Vec::new();
    for k in keys {
        match out.iter_mut().find(|c| c.category == k) {
            Some(c) => c.count += 1,
            None => out.push(CategoryCount { category: k.to_string(), count: 1 }),
        }
    }
    // Stabil: like antall beholder første-forekomst-rekkefølge
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Fordeling per sport og per treningstype, synkende antall.
pub fn distribution(log: &PerformanceLog) -> Distribution {
    Distribution {
        by_sport: count_by(log.iter().map(|r| r.sport.as_str())),
        by_training_type: count_by(log.iter().map(|r| r.training_type.as_str())),
    }
}

/// NaN-sikker maks over en kolonne. 0 for tomt utsnitt.
pub(crate) fn column_max<'a>(
    rs: impl Iterator<Item = &'a PerformanceRecord>,
    f: impl Fn(&PerformanceRecord) -> f64,
) -> f64 {
    rs.map(|r| OrderedFloat(f(r)))
        .max()
        .map(|v| v.into_inner())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_monday() {
        // 2024-01-17 er en onsdag
        let d = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        assert_eq!(week_start(d), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn progression_guards_zero_first() {
        assert_eq!(progression_pct(0.0, 12.0), 0.0);
        assert!((progression_pct(10.0, 12.0) - 20.0).abs() < 1e-12);
    }
}
