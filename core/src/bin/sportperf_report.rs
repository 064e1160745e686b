// sportperf-report: leser en treningslogg (CSV) og skriver sammendragsrapporten.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sportperf_core::{build_report, import_csv_path, EngineConfig, PerformanceLog};

#[derive(Debug, Parser)]
#[command(name = "sportperf-report")]
#[command(about = "Summary report for a sports performance log (CSV)", long_about = None)]
struct Args {
    /// Treningslogg i CSV-format
    csv_path: PathBuf,
    /// Motorkonfig (JSON); mangler filen brukes standardverdier
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skriv rapporten som JSON i stedet for tekst
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // log-makroene i kjernen rutes via tracing-log
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(p) => EngineConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => EngineConfig::default(),
    };

    let outcome = import_csv_path(&args.csv_path)
        .with_context(|| format!("reading {}", args.csv_path.display()))?;
    for r in &outcome.rejected {
        eprintln!("skipped line {}: {}", r.line, r.reason);
    }

    let log = PerformanceLog::from(outcome.records);
    let doc = build_report(&log, &config, chrono::Local::now().naive_local())?;

    if args.json {
        println!("{}", doc.to_json()?);
    } else {
        print!("{}", doc.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_flags() {
        let a = Args::try_parse_from(["sportperf-report", "log.csv", "--config", "engine.json", "--json"]).unwrap();
        assert_eq!(a.csv_path, PathBuf::from("log.csv"));
        assert_eq!(a.config, Some(PathBuf::from("engine.json")));
        assert!(a.json);
    }

    #[test]
    fn config_flag_requires_a_value() {
        // --json skal ikke tolkes som konfigsti
        assert!(Args::try_parse_from(["sportperf-report", "--config", "--json", "log.csv"]).is_err());
    }

    #[test]
    fn rejects_second_positional() {
        assert!(Args::try_parse_from(["sportperf-report", "a.csv", "b.csv"]).is_err());
        assert!(Args::try_parse_from(["sportperf-report"]).is_err());
    }
}
