// Python-bindinger. Alt inn/ut går som JSON-strenger (serde_path_to_error for
// feilsti), slik at UI-laget slipper å kjenne Rust-typene.
use chrono::{NaiveDate, NaiveDateTime};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use serde::Serialize;
use serde_json::Value;

use crate::error::{from_json_str, EngineError};
use crate::formulas::{self, MetActivity, RaceTime};
use crate::perflog::{AnalysisPeriod, LogFilter, PerformanceLog};
use crate::storage::{self, ImportMode};
use crate::{
    aggregate_metrics, build_report, distribution, goals, hr_zones, personal_records,
    sport_breakdown, trimp as trimp_mod, weekly_load, EngineConfig, Goals, RecordDraft, Session,
    Sex, UserProfile,
};

// ──────────────────────────────────────────────────────────────────────────────
// Hjelpere
// ──────────────────────────────────────────────────────────────────────────────

fn py_err(e: EngineError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn to_json<T: Serialize>(v: &T) -> PyResult<String> {
    serde_json::to_string(v).map_err(|e| PyValueError::new_err(format!("serialize error: {e}")))
}

fn parse_json<T: serde::de::DeserializeOwned>(what: &'static str, json_in: &str) -> PyResult<T> {
    from_json_str(what, json_in).map_err(py_err)
}

/// Enum fra ren streng ("append", "last_30_days", "running_10kmh" ...).
fn parse_tag<T: serde::de::DeserializeOwned>(what: &'static str, tag: &str) -> PyResult<T> {
    serde_json::from_value(Value::String(tag.trim().to_string()))
        .map_err(|e| PyValueError::new_err(format!("invalid {what} `{tag}`: {e}")))
}

fn today_or(s: Option<&str>) -> PyResult<NaiveDate> {
    match s {
        Some(s) => storage::parse_date(s).map_err(py_err),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Session (eksplisitt tilstand, eid av Python-objektet)
// ──────────────────────────────────────────────────────────────────────────────

#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

impl PySession {
    /// Filter (JSON) + periode → utsnitt av loggen.
    fn view(&self, filter_json: Option<&str>, period: Option<&str>, today: Option<&str>) -> PyResult<PerformanceLog> {
        let filter: LogFilter = match filter_json {
            Some(j) => parse_json("LogFilter", j)?,
            None => LogFilter::all(),
        };
        let mut out = self.inner.log().filter(&filter);
        if let Some(p) = period {
            let p: AnalysisPeriod = parse_tag("period", p)?;
            out = p.apply(&out, today_or(today)?);
        }
        Ok(out)
    }
}

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(j) => EngineConfig::from_json(j).map_err(py_err)?,
            None => EngineConfig::default(),
        };
        Ok(Self { inner: Session::new(config) })
    }

    fn __len__(&self) -> usize {
        self.inner.log().len()
    }

    /// Skjemainnsending → normalisert post som JSON.
    fn add_record_json(&mut self, draft_json: &str) -> PyResult<String> {
        let draft: RecordDraft = parse_json("RecordDraft", draft_json)?;
        let rec = self.inner.add_record(draft);
        to_json(&rec)
    }

    #[pyo3(signature = (text, mode="append"))]
    fn import_csv_text(&mut self, text: &str, mode: &str) -> PyResult<String> {
        let mode: ImportMode = parse_tag("import mode", mode)?;
        let outcome = storage::import_csv_str(text).map_err(py_err)?;
        let summary = serde_json::json!({
            "accepted": outcome.records.len(),
            "rejected": outcome.rejected,
            "coerced_values": outcome.coerced_values,
        });
        self.inner.import(outcome.records, mode);
        to_json(&summary)
    }

    fn export_csv_text(&self) -> PyResult<String> {
        storage::export_csv_string(self.inner.log(), self.inner.config().export_bom).map_err(py_err)
    }

    fn log_json(&self) -> PyResult<String> {
        to_json(self.inner.log())
    }

    fn sports(&self) -> Vec<String> {
        self.inner.log().sports()
    }

    fn set_profile_json(&mut self, profile_json: &str) -> PyResult<()> {
        let p: UserProfile = parse_json("UserProfile", profile_json)?;
        self.inner.set_profile(p);
        Ok(())
    }

    fn set_goals_json(&mut self, goals_json: &str) -> PyResult<()> {
        let g: Goals = parse_json("Goals", goals_json)?;
        self.inner.set_goals(g);
        Ok(())
    }

    fn profile_json(&self) -> PyResult<String> {
        to_json(self.inner.profile())
    }

    fn goals_json(&self) -> PyResult<String> {
        to_json(self.inner.goals())
    }

    /// "null" når utsnittet er tomt.
    #[pyo3(signature = (filter_json=None, period=None, today=None))]
    fn aggregate_json(&self, filter_json: Option<&str>, period: Option<&str>, today: Option<&str>) -> PyResult<String> {
        let v = self.view(filter_json, period, today)?;
        to_json(&aggregate_metrics(&v))
    }

    #[pyo3(signature = (filter_json=None, period=None, today=None))]
    fn sport_breakdown_json(&self, filter_json: Option<&str>, period: Option<&str>, today: Option<&str>) -> PyResult<String> {
        let v = self.view(filter_json, period, today)?;
        to_json(&sport_breakdown(&v))
    }

    #[pyo3(signature = (filter_json=None, period=None, today=None))]
    fn weekly_load_json(&self, filter_json: Option<&str>, period: Option<&str>, today: Option<&str>) -> PyResult<String> {
        let v = self.view(filter_json, period, today)?;
        to_json(&weekly_load(&v, self.inner.profile()))
    }

    #[pyo3(signature = (filter_json=None, period=None, today=None))]
    fn distribution_json(&self, filter_json: Option<&str>, period: Option<&str>, today: Option<&str>) -> PyResult<String> {
        let v = self.view(filter_json, period, today)?;
        to_json(&distribution(&v))
    }

    fn personal_records_json(&self) -> PyResult<String> {
        to_json(&personal_records(self.inner.log()))
    }

    #[pyo3(signature = (today=None))]
    fn goal_progress_json(&self, today: Option<&str>) -> PyResult<String> {
        let today = today_or(today)?;
        to_json(&goals::goal_progress(self.inner.log(), self.inner.goals(), today))
    }

    #[pyo3(signature = (today=None))]
    fn weekly_snapshot_json(&self, today: Option<&str>) -> PyResult<String> {
        let today = today_or(today)?;
        to_json(&goals::weekly_snapshot(self.inner.log(), self.inner.goals(), today))
    }

    /// format: "text" eller "json".
    #[pyo3(signature = (format="text", generated_at=None))]
    fn report(&self, format: &str, generated_at: Option<&str>) -> PyResult<String> {
        let at = match generated_at {
            Some(s) => NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S")
                .map_err(|e| PyValueError::new_err(format!("invalid generated_at `{s}`: {e}")))?,
            None => chrono::Local::now().naive_local(),
        };
        let doc = build_report(self.inner.log(), self.inner.config(), at).map_err(py_err)?;
        match format {
            "json" => doc.to_json().map_err(py_err),
            _ => Ok(doc.to_text()),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Tilstandsløse formler
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (hr_max, hr_resting=None))]
fn hr_zones_json(hr_max: f64, hr_resting: Option<f64>) -> PyResult<String> {
    let rest = hr_resting.unwrap_or(crate::zones::DEFAULT_RESTING_HR);
    to_json(&hr_zones(hr_max, rest))
}

/// → (trimp, båndetikett, beskrivelse)
#[pyfunction]
#[pyo3(signature = (duration_min, hr_avg, hr_resting, hr_max, sex="male"))]
fn trimp(duration_min: f64, hr_avg: f64, hr_resting: f64, hr_max: f64, sex: &str) -> PyResult<(f64, String, String)> {
    let sex: Sex = sex.parse().map_err(py_err)?;
    let t = trimp_mod::trimp(duration_min, hr_avg, hr_resting, hr_max, sex);
    let band = trimp_mod::classify_trimp(t);
    Ok((t, band.label().to_string(), band.description().to_string()))
}

/// → (minutter, sekunder, "M'SS\"")
#[pyfunction]
fn pace(distance_km: f64, duration_min: f64) -> (i64, i64, String) {
    let p = formulas::pace(distance_km, duration_min);
    (p.minutes, p.seconds, p.to_string())
}

/// → (minutter, "HH:MM:SS")
#[pyfunction]
fn riegel_predict(ref_distance_km: f64, ref_time_min: f64, target_distance_km: f64) -> (f64, String) {
    let t = formulas::riegel_predict(ref_distance_km, ref_time_min, target_distance_km);
    (t, RaceTime::from_minutes(t).to_string())
}

#[pyfunction]
fn bmi(weight_kg: f64, height_cm: f64) -> (f64, String) {
    let b = formulas::bmi(weight_kg, height_cm);
    (b, formulas::classify_bmi(b).label().to_string())
}

#[pyfunction]
fn theoretical_max_hr(age: u32) -> i64 {
    formulas::theoretical_max_hr(age)
}

#[pyfunction]
fn vo2max_estimate(hr_max: f64, hr_resting: f64) -> (f64, String) {
    let v = formulas::vo2max_estimate(hr_max, hr_resting);
    (v, formulas::classify_vo2max(v).label().to_string())
}

#[pyfunction]
fn met_calories(activity: &str, weight_kg: f64, duration_min: f64) -> PyResult<f64> {
    let a: MetActivity = parse_tag("activity", activity)?;
    Ok(formulas::met_calories(a, weight_kg, duration_min))
}

#[pyfunction]
#[pyo3(signature = (bom=true))]
fn template_csv(bom: bool) -> PyResult<String> {
    storage::template_csv(bom).map_err(py_err)
}

#[pyfunction]
fn metrics_text() -> String {
    crate::gather_text()
}

#[pymodule]
fn sportperf_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PySession>()?;

    m.add_function(wrap_pyfunction!(hr_zones_json, m)?)?;
    m.add_function(wrap_pyfunction!(trimp, m)?)?;
    m.add_function(wrap_pyfunction!(pace, m)?)?;
    m.add_function(wrap_pyfunction!(riegel_predict, m)?)?;
    m.add_function(wrap_pyfunction!(bmi, m)?)?;
    m.add_function(wrap_pyfunction!(theoretical_max_hr, m)?)?;
    m.add_function(wrap_pyfunction!(vo2max_estimate, m)?)?;
    m.add_function(wrap_pyfunction!(met_calories, m)?)?;

    // CSV-mal og driftstellere
    m.add_function(wrap_pyfunction!(template_csv, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
