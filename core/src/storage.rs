// core/src/storage.rs
// CSV-import/eksport av treningsloggen. Kolonnenavnene følger dashboardets format.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

use crate::counters::counters;
use crate::error::EngineError;
use crate::models::{clamp_nonneg, PerformanceRecord};
use crate::perflog::PerformanceLog;

pub const COLUMNS: [&str; 11] = [
    "date",
    "sport",
    "type_entrainement",
    "duree_min",
    "distance_km",
    "calories",
    "frequence_cardiaque_moy",
    "frequence_cardiaque_max",
    "vitesse_moy",
    "elevation_m",
    "notes",
];

const DATE_FMT: &str = "%Y-%m-%d";
const BOM: &str = "\u{feff}";

/// Import: legg til eller erstatt eksisterende logg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    #[default]
    Append,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRow {
    /// 1-basert linjenummer i filen (header = linje 1).
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImportOutcome {
    pub records: Vec<PerformanceRecord>,
    pub rejected: Vec<RejectedRow>,
    /// Antall numeriske celler som ble satt til 0.
    pub coerced_values: usize,
}

/// Kolonneindekser fra header; `date` og `sport` er påkrevd.
struct ColumnMap {
    idx: [Option<usize>; 11],
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, EngineError> {
        let mut idx = [None; 11];
        for (i, h) in headers.iter().enumerate() {
            let h = h.trim_start_matches(BOM).trim();
            if let Some(pos) = COLUMNS.iter().position(|c| *c == h) {
                idx[pos] = Some(i);
            }
        }
        if idx[0].is_none() {
            return Err(EngineError::MissingColumn("date"));
        }
        if idx[1].is_none() {
            return Err(EngineError::MissingColumn("sport"));
        }
        Ok(Self { idx })
    }

    fn get<'r>(&self, row: &'r csv::StringRecord, col: usize) -> Option<&'r str> {
        self.idx[col].and_then(|i| row.get(i)).map(str::trim)
    }
}

/// Tolerant tall: tom/ugyldig/ikke-finitt → 0 (telles).
fn numeric(cell: Option<&str>, coerced: &mut usize) -> f64 {
    match cell {
        None => 0.0, // kolonnen mangler helt – ikke en tvangskonvertering
        Some(s) => match s.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                *coerced += 1;
                0.0
            }
        },
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Leser CSV fra en hvilken som helst kilde.
pub fn import_csv<R: Read>(reader: R) -> Result<ImportOutcome, EngineError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let cols = ColumnMap::from_headers(rdr.headers()?)?;
    let mut out = ImportOutcome::default();

    // Bytevis: én ugyldig UTF-8-celle skal ikke velte hele importen
    for (i, raw) in rdr.byte_records().enumerate() {
        let raw = raw?;
        let line = raw.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        let row = match csv::StringRecord::from_byte_record(raw) {
            Ok(row) => row,
            Err(e) => {
                log::warn!("csv line {line}: invalid UTF-8, decoded lossily");
                csv::StringRecord::from_byte_record_lossy(e.into_byte_record())
            }
        };

        let date = match parse_date(cols.get(&row, 0).unwrap_or("")) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("csv line {line}: rejected ({e})");
                out.rejected.push(RejectedRow { line, reason: e.to_string() });
                continue;
            }
        };

        let mut coerced = 0usize;
        let notes = cols
            .get(&row, 10)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let record = PerformanceRecord {
            date,
            sport: cols.get(&row, 1).unwrap_or("").to_string(),
            training_type: cols.get(&row, 2).unwrap_or("").to_string(),
            duration_min: clamp_nonneg(numeric(cols.get(&row, 3), &mut coerced)),
            distance_km: clamp_nonneg(numeric(cols.get(&row, 4), &mut coerced)),
            calories: clamp_nonneg(numeric(cols.get(&row, 5), &mut coerced)),
            hr_avg: numeric(cols.get(&row, 6), &mut coerced),
            hr_max: numeric(cols.get(&row, 7), &mut coerced),
            speed_avg: clamp_nonneg(numeric(cols.get(&row, 8), &mut coerced)),
            elevation_m: clamp_nonneg(numeric(cols.get(&row, 9), &mut coerced)),
            notes,
        };

        if coerced > 0 {
            log::debug!("csv line {line}: {coerced} value(s) coerced to 0");
        }
        out.coerced_values += coerced;
        out.records.push(record);
    }

    counters().records_imported.inc_by(out.records.len() as u64);
    counters().import_rows_rejected.inc_by(out.rejected.len() as u64);
    counters().import_values_coerced.inc_by(out.coerced_values as u64);
    log::info!(
        "csv import: {} accepted, {} rejected, {} value(s) coerced",
        out.records.len(),
        out.rejected.len(),
        out.coerced_values
    );
    Ok(out)
}

pub fn import_csv_str(text: &str) -> Result<ImportOutcome, EngineError> {
    import_csv(text.as_bytes())
}

pub fn import_csv_path(path: impl AsRef<Path>) -> Result<ImportOutcome, EngineError> {
    let file = std::fs::File::open(path.as_ref())?;
    import_csv(std::io::BufReader::new(file))
}

/// Skriver loggen som CSV i fast kolonnerekkefølge.
pub fn export_csv<W: Write>(log: &PerformanceLog, mut writer: W, bom: bool) -> Result<(), EngineError> {
    if bom {
        writer.write_all(BOM.as_bytes())?;
    }
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for r in log {
        wtr.write_record([
            r.date.format(DATE_FMT).to_string(),
            r.sport.clone(),
            r.training_type.clone(),
            r.duration_min.to_string(),
            r.distance_km.to_string(),
            r.calories.to_string(),
            r.hr_avg.to_string(),
            r.hr_max.to_string(),
            r.speed_avg.to_string(),
            r.elevation_m.to_string(),
            r.notes.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_csv_string(log: &PerformanceLog, bom: bool) -> Result<String, EngineError> {
    let mut buf = Vec::new();
    export_csv(log, &mut buf, bom)?;
    String::from_utf8(buf)
        .map_err(|e| EngineError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn export_csv_path(log: &PerformanceLog, path: impl AsRef<Path>, bom: bool) -> Result<(), EngineError> {
    let file = std::fs::File::create(path.as_ref())?;
    export_csv(log, std::io::BufWriter::new(file), bom)?;
    log::info!("exported {} record(s) to {}", log.len(), path.as_ref().display());
    Ok(())
}

/// Mal med to eksempelrader for brukere som skal fylle inn egne data.
pub fn template_log() -> PerformanceLog {
    let row = |date: (i32, u32, u32), sport: &str, kind: &str, dur, dist, cal, hr, hrmax, speed, elev, notes: &str| {
        PerformanceRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
            sport: sport.to_string(),
            training_type: kind.to_string(),
            duration_min: dur,
            distance_km: dist,
            calories: cal,
            hr_avg: hr,
            hr_max: hrmax,
            speed_avg: speed,
            elevation_m: elev,
            notes: Some(notes.to_string()),
        }
    };
    PerformanceLog::from(vec![
        row((2024, 1, 15), "Running", "Endurance", 45.0, 8.5, 450.0, 145.0, 175.0, 11.3, 120.0, "Good session"),
        row((2024, 1, 17), "Cycling", "Interval", 60.0, 25.0, 600.0, 135.0, 165.0, 25.0, 350.0, "Hilly ride"),
    ])
}

pub fn template_csv(bom: bool) -> Result<String, EngineError> {
    export_csv_string(&template_log(), bom)
}
