use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::PerformanceRecord;

/// Treningsloggen: innsettingsrekkefølge = registreringsrekkefølge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceLog {
    records: Vec<PerformanceRecord>,
}

impl PerformanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PerformanceRecord) {
        self.records.push(record);
    }

    /// Konkatenering (import i "legg til"-modus).
    pub fn extend<I: IntoIterator<Item = PerformanceRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    pub fn replace(&mut self, records: Vec<PerformanceRecord>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PerformanceRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    /// Stabil sortering: like datoer beholder registreringsrekkefølgen.
    pub fn sorted_by_date(&self) -> Vec<&PerformanceRecord> {
        let mut out: Vec<&PerformanceRecord> = self.records.iter().collect();
        out.sort_by_key(|r| r.date);
        out
    }

    pub fn filter(&self, f: &LogFilter) -> PerformanceLog {
        self.records
            .iter()
            .filter(|r| f.matches(r))
            .cloned()
            .collect()
    }

    /// De siste `n` postene i registreringsrekkefølge.
    pub fn tail(&self, n: usize) -> &[PerformanceRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    /// Distinkte sporter i den rekkefølgen de først dukker opp.
    pub fn sports(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|s| s == &r.sport) {
                out.push(r.sport.clone());
            }
        }
        out
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }
}

impl FromIterator<PerformanceRecord> for PerformanceLog {
    fn from_iter<I: IntoIterator<Item = PerformanceRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl From<Vec<PerformanceRecord>> for PerformanceLog {
    fn from(records: Vec<PerformanceRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a PerformanceLog {
    type Item = &'a PerformanceRecord;
    type IntoIter = std::slice::Iter<'a, PerformanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Sport- og datofilter. Tom `sports` = alle. Datogrensene er inklusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFilter {
    pub sports: Vec<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl LogFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn sport(sport: impl Into<String>) -> Self {
        Self { sports: vec![sport.into()], ..Self::default() }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self { sports: Vec::new(), from: Some(from), to: Some(to) }
    }

    pub fn matches(&self, r: &PerformanceRecord) -> bool {
        if !self.sports.is_empty() && !self.sports.iter().any(|s| s == &r.sport) {
            return false;
        }
        if let Some(from) = self.from {
            if r.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if r.date > to {
                return false;
            }
        }
        true
    }
}

/// Analyseperiode relativt til dagens dato.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPeriod {
    Last7Days,
    Last30Days,
    Last3Months,
    Last6Months,
    #[default]
    All,
}

impl AnalysisPeriod {
    pub fn lookback_days(self) -> Option<i64> {
        match self {
            AnalysisPeriod::Last7Days => Some(7),
            AnalysisPeriod::Last30Days => Some(30),
            AnalysisPeriod::Last3Months => Some(90),
            AnalysisPeriod::Last6Months => Some(180),
            AnalysisPeriod::All => None,
        }
    }

    /// Inklusiv nedre grense, None for `All`.
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        self.lookback_days().map(|d| today - Duration::days(d))
    }

    pub fn apply(self, log: &PerformanceLog, today: NaiveDate) -> PerformanceLog {
        let f = LogFilter { from: self.start(today), ..LogFilter::default() };
        log.filter(&f)
    }
}
