// core/src/formulas.rs
// Lukkede formler: allure, Riegel, BMI, Tanaka, Uth, MET.
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RIEGEL_EXPONENT: f64 = 1.06;
pub const UTH_FACTOR: f64 = 15.3;

/// Standard konkurransedistanser (km): 5k, 10k, halvmaraton, maraton.
pub const RACE_DISTANCES_KM: [f64; 4] = [5.0, 10.0, 21.1, 42.195];

// --- RoundTo trait (offentlig, brukt av alle moduler) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Allure (min/km) som hele minutter + avrundede sekunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Pace {
    pub minutes: i64,
    pub seconds: i64,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:02}\"", self.minutes, self.seconds)
    }
}

/// Allure fra varighet og distanse. (0,0) når distanse <= 0.
pub fn pace(distance_km: f64, duration_min: f64) -> Pace {
    if distance_km.is_nan() || distance_km <= 0.0 {
        return Pace::default();
    }
    let total = duration_min / distance_km;
    if !total.is_finite() {
        return Pace::default();
    }
    let mut minutes = total.floor() as i64;
    let mut seconds = ((total - total.floor()) * 60.0).round() as i64;
    // 59.6 s → 60 s skal bli neste minutt
    if seconds >= 60 {
        minutes += 1;
        seconds -= 60;
    }
    Pace { minutes, seconds }
}

/// Snittfart (km/t) fra distanse og varighet. 0 når varighet <= 0.
pub fn average_speed_kmh(distance_km: f64, duration_min: f64) -> f64 {
    if duration_min <= 0.0 {
        return 0.0;
    }
    distance_km / (duration_min / 60.0)
}

/// Riegel: T2 = T1 * (D2/D1)^1.06. 0 når referansen ikke er positiv.
pub fn riegel_predict(ref_distance_km: f64, ref_time_min: f64, target_distance_km: f64) -> f64 {
    if ref_distance_km <= 0.0 || ref_time_min <= 0.0 {
        return 0.0;
    }
    ref_time_min * (target_distance_km / ref_distance_km).powf(RIEGEL_EXPONENT)
}

/// Minutter splittet i t/min/s (avkuttet, slik prediksjonen vises).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceTime {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl RaceTime {
    pub fn from_minutes(total_min: f64) -> Self {
        let t = if total_min.is_finite() { total_min } else { 0.0 };
        RaceTime {
            hours: (t / 60.0).floor() as i64,
            minutes: (t % 60.0).floor() as i64,
            seconds: ((t % 1.0) * 60.0).floor() as i64,
        }
    }
}

impl fmt::Display for RaceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours > 0 {
            write!(f, "{}h {}'{:02}\"", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{}'{:02}\"", self.minutes, self.seconds)
        }
    }
}

/// BMI med én desimal. 0 når høyden ikke er positiv.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let h_m = height_cm / 100.0;
    if h_m <= 0.0 {
        return 0.0;
    }
    (weight_kg / (h_m * h_m)).round_to(1)
}

/// Teoretisk makspuls (Tanaka): round(208 - 0.7 * alder).
pub fn theoretical_max_hr(age: u32) -> i64 {
    (208.0 - 0.7 * age as f64).round() as i64
}

/// Estimert VO2max (Uth): 15.3 * (HRmax / HRhvile), én desimal. 0 når hvilepuls <= 0.
pub fn vo2max_estimate(hr_max: f64, hr_resting: f64) -> f64 {
    if hr_resting <= 0.0 {
        return 0.0;
    }
    (UTH_FACTOR * (hr_max / hr_resting)).round_to(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    pub fn label(self) -> &'static str {
        match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
        }
    }
}

pub fn classify_bmi(bmi: f64) -> BmiClass {
    match bmi {
        b if b < 18.5 => BmiClass::Underweight,
        b if b < 25.0 => BmiClass::Normal,
        b if b < 30.0 => BmiClass::Overweight,
        _ => BmiClass::Obese,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vo2maxClass {
    Low,
    Average,
    Good,
    Excellent,
}

impl Vo2maxClass {
    pub fn label(self) -> &'static str {
        match self {
            Vo2maxClass::Low => "Low",
            Vo2maxClass::Average => "Average",
            Vo2maxClass::Good => "Good",
            Vo2maxClass::Excellent => "Excellent",
        }
    }
}

pub fn classify_vo2max(vo2max: f64) -> Vo2maxClass {
    match vo2max {
        v if v < 30.0 => Vo2maxClass::Low,
        v if v < 40.0 => Vo2maxClass::Average,
        v if v < 50.0 => Vo2maxClass::Good,
        _ => Vo2maxClass::Excellent,
    }
}

/// Aktiviteter med fast MET-verdi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetActivity {
    #[serde(rename = "running_10kmh")]
    Running10Kmh,
    #[serde(rename = "running_12kmh")]
    Running12Kmh,
    #[serde(rename = "cycling_20kmh")]
    Cycling20Kmh,
    #[serde(rename = "cycling_25kmh")]
    Cycling25Kmh,
    SwimmingLeisure,
    SwimmingIntensive,
    BriskWalking,
    Hiking,
}

impl MetActivity {
    pub const ALL: [MetActivity; 8] = [
        MetActivity::Running10Kmh,
        MetActivity::Running12Kmh,
        MetActivity::Cycling20Kmh,
        MetActivity::Cycling25Kmh,
        MetActivity::SwimmingLeisure,
        MetActivity::SwimmingIntensive,
        MetActivity::BriskWalking,
        MetActivity::Hiking,
    ];

    pub fn met(self) -> f64 {
        match self {
            MetActivity::Running10Kmh => 10.0,
            MetActivity::Running12Kmh => 12.5,
            MetActivity::Cycling20Kmh => 8.0,
            MetActivity::Cycling25Kmh => 10.0,
            MetActivity::SwimmingLeisure => 6.0,
            MetActivity::SwimmingIntensive => 10.0,
            MetActivity::BriskWalking => 5.0,
            MetActivity::Hiking => 6.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetActivity::Running10Kmh => "Running (10 km/h)",
            MetActivity::Running12Kmh => "Running (12 km/h)",
            MetActivity::Cycling20Kmh => "Cycling (20 km/h)",
            MetActivity::Cycling25Kmh => "Cycling (25 km/h)",
            MetActivity::SwimmingLeisure => "Swimming (leisure)",
            MetActivity::SwimmingIntensive => "Swimming (intensive)",
            MetActivity::BriskWalking => "Brisk walking",
            MetActivity::Hiking => "Hiking",
        }
    }
}

/// kcal = MET * vekt (kg) * timer.
pub fn met_calories(activity: MetActivity, weight_kg: f64, duration_min: f64) -> f64 {
    activity.met() * weight_kg * (duration_min / 60.0)
}
