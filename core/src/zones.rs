use serde::{Deserialize, Serialize};

pub const DEFAULT_RESTING_HR: f64 = 60.0;

/// (navn, nedre andel, øvre andel) av pulsreserven (Karvonen).
const ZONE_TABLE: [(&str, f64, f64); 5] = [
    ("Zone 1 (Recovery)", 0.5, 0.6),
    ("Zone 2 (Endurance)", 0.6, 0.7),
    ("Zone 3 (Tempo)", 0.7, 0.8),
    ("Zone 4 (Threshold)", 0.8, 0.9),
    ("Zone 5 (VO2 Max)", 0.9, 1.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrZone {
    pub zone: u8,
    pub name: String,
    pub lower_bpm: f64,
    pub upper_bpm: f64,
}

/// Fem sammenhengende pulssoner, sone 1 → 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrZones {
    pub hr_max: f64,
    pub hr_resting: f64,
    pub zones: Vec<HrZone>,
}

/// Ingen klemming: hr_max < hr_resting gir meningsløse (men definerte) grenser.
pub fn hr_zones(hr_max: f64, hr_resting: f64) -> HrZones {
    let reserve = hr_max - hr_resting;
    let zones = ZONE_TABLE
        .iter()
        .enumerate()
        .map(|(i, (name, lo, hi))| {
            let lower_bpm = hr_resting + lo * reserve;
            // Sone 5 slutter eksakt på hr_max
            let upper_bpm = if i == ZONE_TABLE.len() - 1 {
                hr_max
            } else {
                hr_resting + hi * reserve
            };
            HrZone {
                zone: (i + 1) as u8,
                name: (*name).to_string(),
                lower_bpm,
                upper_bpm,
            }
        })
        .collect();

    HrZones { hr_max, hr_resting, zones }
}

impl HrZones {
    /// Sonen som inneholder `hr`. Nedre grense inklusiv; sone 5 også øvre.
    pub fn zone_for(&self, hr: f64) -> Option<&HrZone> {
        let last = self.zones.len().checked_sub(1)?;
        self.zones.iter().enumerate().find_map(|(i, z)| {
            let in_zone = if i == last {
                hr >= z.lower_bpm && hr <= z.upper_bpm
            } else {
                hr >= z.lower_bpm && hr < z.upper_bpm
            };
            in_zone.then_some(z)
        })
    }

    /// Andel av pulsreserven ved sonens øvre grense (for måler i UI).
    /// 0.5 når reserven ikke er positiv.
    pub fn reserve_fraction(&self, zone: &HrZone) -> f64 {
        let range = self.hr_max - self.hr_resting;
        if range > 0.0 {
            (zone.upper_bpm - self.hr_resting) / range
        } else {
            0.5
        }
    }
}
