use serde::{Deserialize, Serialize};

use crate::formulas::RoundTo;
use crate::models::{PerformanceRecord, Sex, UserProfile};

/// Banister TRIMP – varighet × ΔHR × vektfaktor, én desimal.
/// 0 når hr_max <= hr_resting (degenerert nevner).
pub fn trimp(duration_min: f64, hr_avg: f64, hr_resting: f64, hr_max: f64, sex: Sex) -> f64 {
    if hr_max <= hr_resting {
        return 0.0;
    }
    let delta = ((hr_avg - hr_resting) / (hr_max - hr_resting)).clamp(0.0, 1.0);

    // Kjønnsspesifikk eksponentiell vekt
    let y = match sex {
        Sex::Male => 0.64 * (1.92 * delta).exp(),
        Sex::Female => 0.86 * (1.67 * delta).exp(),
    };

    (duration_min * delta * y).round_to(1)
}

/// TRIMP for én økt: postens snittpuls mot profilens hvile-/makspuls.
pub fn session_trimp(record: &PerformanceRecord, profile: &UserProfile) -> f64 {
    if profile.max_hr <= profile.resting_hr {
        log::debug!(
            "profile max_hr {} <= resting_hr {} – TRIMP defined as 0",
            profile.max_hr, profile.resting_hr
        );
    }
    trimp(
        record.duration_min,
        record.hr_avg,
        profile.resting_hr,
        profile.max_hr,
        profile.sex,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBand {
    Light,
    Moderate,
    High,
    VeryHigh,
}

impl LoadBand {
    pub fn label(self) -> &'static str {
        match self {
            LoadBand::Light => "Light",
            LoadBand::Moderate => "Moderate",
            LoadBand::High => "High",
            LoadBand::VeryHigh => "Very high",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LoadBand::Light => "Recovery session",
            LoadBand::Moderate => "Standard training",
            LoadBand::High => "Intense session",
            LoadBand::VeryHigh => "Very demanding session",
        }
    }
}

/// Visningsbånd: <50 lett, <100 moderat, <150 høy, ellers svært høy.
pub fn classify_trimp(trimp: f64) -> LoadBand {
    match trimp {
        t if t < 50.0 => LoadBand::Light,
        t if t < 100.0 => LoadBand::Moderate,
        t if t < 150.0 => LoadBand::High,
        _ => LoadBand::VeryHigh,
    }
}
