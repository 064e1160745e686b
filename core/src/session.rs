// core/src/session.rs
// Eksplisitt applikasjonstilstand: logg, profil, mål og konfig. Ingen globale variabler.
use crate::config::EngineConfig;
use crate::counters::counters;
use crate::models::{Goals, PerformanceRecord, RecordDraft, UserProfile};
use crate::perflog::PerformanceLog;
use crate::storage::ImportMode;

#[derive(Debug, Clone, Default)]
pub struct Session {
    log: PerformanceLog,
    profile: UserProfile,
    goals: Goals,
    config: EngineConfig,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let profile = UserProfile {
            resting_hr: config.default_resting_hr,
            ..UserProfile::default()
        };
        Self {
            log: PerformanceLog::new(),
            profile,
            goals: Goals::default(),
            config,
        }
    }

    /// Skjemainnsending: normaliser og legg til.
    pub fn add_record(&mut self, draft: RecordDraft) -> PerformanceRecord {
        let record = PerformanceRecord::from_draft(draft);
        log::debug!("append {} on {} ({} min)", record.sport, record.date, record.duration_min);
        self.log.push(record.clone());
        counters().records_appended.inc();
        record
    }

    pub fn import(&mut self, records: Vec<PerformanceRecord>, mode: ImportMode) {
        let n = records.len();
        match mode {
            ImportMode::Append => self.log.extend(records),
            ImportMode::Replace => self.log.replace(records),
        }
        log::info!("import ({mode:?}): {n} record(s), log now holds {}", self.log.len());
    }

    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile = profile;
    }

    pub fn set_goals(&mut self, goals: Goals) {
        self.goals = goals;
    }

    pub fn log(&self) -> &PerformanceLog {
        &self.log
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn goals(&self) -> &Goals {
        &self.goals
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
