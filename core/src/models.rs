use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    #[serde(alias = "Male", alias = "Homme", alias = "homme", alias = "M")]
    Male,
    #[serde(alias = "Female", alias = "Femme", alias = "femme", alias = "F")]
    Female,
}

impl FromStr for Sex {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "homme" | "m" => Ok(Sex::Male),
            "female" | "femme" | "f" => Ok(Sex::Female),
            _ => Err(EngineError::InvalidSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

/// Én treningsøkt, ferdig normalisert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub date: NaiveDate,
    pub sport: String,
    pub training_type: String,
    pub duration_min: f64,
    pub distance_km: f64,
    pub calories: f64,
    pub hr_avg: f64,  // bpm
    pub hr_max: f64,  // bpm
    pub speed_avg: f64, // km/h
    pub elevation_m: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Løs inngang fra skjema/JSON. Tall kan være hva som helst; normaliseres i `from_draft`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub sport: String,
    #[serde(default, alias = "type_entrainement")]
    pub training_type: String,
    #[serde(default, alias = "duree_min")]
    pub duration_min: f64,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default, alias = "frequence_cardiaque_moy")]
    pub hr_avg: f64,
    #[serde(default, alias = "frequence_cardiaque_max")]
    pub hr_max: f64,
    #[serde(default, alias = "vitesse_moy")]
    pub speed_avg: f64,
    #[serde(default)]
    pub elevation_m: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Ikke-finitte tall → 0, negative → 0.
#[inline]
pub(crate) fn clamp_nonneg(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}

#[inline]
pub(crate) fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

impl PerformanceRecord {
    pub fn from_draft(d: RecordDraft) -> Self {
        let notes = d
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let rec = PerformanceRecord {
            date: d.date,
            sport: d.sport.trim().to_string(),
            training_type: d.training_type.trim().to_string(),
            duration_min: clamp_nonneg(d.duration_min),
            distance_km: clamp_nonneg(d.distance_km),
            calories: clamp_nonneg(d.calories),
            hr_avg: finite_or_zero(d.hr_avg),
            hr_max: finite_or_zero(d.hr_max),
            speed_avg: clamp_nonneg(d.speed_avg),
            elevation_m: clamp_nonneg(d.elevation_m),
            notes,
        };

        // Tolereres, men logges
        if rec.hr_max > 0.0 && rec.hr_max < rec.hr_avg {
            log::warn!(
                "record {} ({}): hr_max {} < hr_avg {} – accepted as-is",
                rec.date, rec.sport, rec.hr_max, rec.hr_avg
            );
        }
        rec
    }
}

/// Brukerprofil – kun standardverdier for formlene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(alias = "age_years")]
    pub age: u32,
    #[serde(alias = "poids")]
    pub weight_kg: f64,
    #[serde(alias = "taille")]
    pub height_cm: f64,
    #[serde(alias = "fc_repos")]
    pub resting_hr: f64,
    #[serde(alias = "fc_max")]
    pub max_hr: f64,
    #[serde(alias = "sexe")]
    pub sex: Sex,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            weight_kg: 70.0,
            height_cm: 175.0,
            resting_hr: 60.0,
            max_hr: 190.0,
            sex: Sex::Male,
        }
    }
}

/// Mål – ren konfigurasjon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    pub weekly_distance_km: f64,
    pub monthly_distance_km: f64,
    pub weekly_sessions: u32,
    pub weekly_calories: f64,
    pub weekly_duration_min: f64,
    pub yearly_distance_km: f64,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            weekly_distance_km: 50.0,
            monthly_distance_km: 200.0,
            weekly_sessions: 4,
            weekly_calories: 2000.0,
            weekly_duration_min: 300.0,
            yearly_distance_km: 500.0,
        }
    }
}
