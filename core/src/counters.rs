use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// Driftstellere for motoren (import, registrering, rapporter).
pub struct Counters {
    registry: Registry,
    pub records_appended: IntCounter,
    pub records_imported: IntCounter,
    pub import_rows_rejected: IntCounter,
    pub import_values_coerced: IntCounter,
    pub reports_built: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).expect("valid counter name");
    registry
        .register(Box::new(c.clone()))
        .expect("counter registered once");
    c
}

impl Counters {
    fn new() -> Self {
        let registry = Registry::new();
        Self {
            records_appended: counter(
                &registry,
                "sportperf_records_appended_total",
                "Records added through form submission",
            ),
            records_imported: counter(
                &registry,
                "sportperf_records_imported_total",
                "Records accepted from CSV import",
            ),
            import_rows_rejected: counter(
                &registry,
                "sportperf_import_rows_rejected_total",
                "CSV rows rejected at import (unparseable date)",
            ),
            import_values_coerced: counter(
                &registry,
                "sportperf_import_values_coerced_total",
                "Numeric CSV cells coerced to 0",
            ),
            reports_built: counter(
                &registry,
                "sportperf_reports_built_total",
                "Summary reports generated",
            ),
            registry,
        }
    }
}

static COUNTERS: Lazy<Counters> = Lazy::new(Counters::new);

pub fn counters() -> &'static Counters {
    &COUNTERS
}

/// Prometheus tekstformat av alle tellere.
pub fn gather_text() -> String {
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&COUNTERS.registry.gather(), &mut buf) {
        log::warn!("failed to encode counters: {e}");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_text_lists_all_counters() {
        counters().reports_built.inc();
        let txt = gather_text();
        assert!(txt.contains("sportperf_reports_built_total"));
        assert!(txt.contains("sportperf_records_imported_total"));
    }
}
