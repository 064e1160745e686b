use crate::metrics::{column_max, group_by_sport};
use crate::perflog::PerformanceLog;
use crate::types::PersonalRecords;

/// Personlige rekorder per sport (første-forekomst-rekkefølge). Tom logg → tom liste.
///
/// "best_pace" bruker varigheten til økten med lengst distanse – ikke en
/// uavhengig optimert allure. Ved likhet vinner den første økten.
pub fn personal_records(log: &PerformanceLog) -> Vec<PersonalRecords> {
    group_by_sport(log)
        .into_iter()
        .map(|(sport, rs)| {
            let max_distance_km = column_max(rs.iter().copied(), |r| r.distance_km);

            // Første post som oppnår max_distance
            let best_pace = match rs.iter().find(|r| r.distance_km == max_distance_km) {
                Some(r) if max_distance_km > 0.0 && r.duration_min > 0.0 => {
                    max_distance_km / r.duration_min * 60.0
                }
                _ => 0.0,
            };

            PersonalRecords {
                sport,
                max_distance_km,
                max_duration_min: column_max(rs.iter().copied(), |r| r.duration_min),
                max_speed_kmh: column_max(rs.iter().copied(), |r| r.speed_avg),
                max_calories: column_max(rs.iter().copied(), |r| r.calories),
                best_pace,
            }
        })
        .collect()
}
