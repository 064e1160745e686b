use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{from_json_str, EngineError};
use crate::zones::DEFAULT_RESTING_HR;

/// Motorkonfigurasjon. Alle felt er valgfrie i JSON; manglende → standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hvilepuls når kallet ikke oppgir en.
    pub default_resting_hr: f64,
    /// Antall siste økter i rapportens detaljtabell.
    pub report_detail_rows: usize,
    /// UTF-8 BOM foran eksportert CSV (regnearkvennlig).
    pub export_bom: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_resting_hr: DEFAULT_RESTING_HR,
            report_detail_rows: 10,
            export_bom: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json_in: &str) -> Result<Self, EngineError> {
        let cfg: EngineConfig = from_json_str("EngineConfig", json_in)?;
        log::debug!("engine config loaded: {:?}", cfg);
        Ok(cfg)
    }

    /// Leser konfig fra disk (JSON). Finnes ikke filen → standardverdier.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let cfg = Self::from_json(&contents)?;
            log::info!("config loaded from {}", path.display());
            Ok(cfg)
        } else {
            log::info!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
