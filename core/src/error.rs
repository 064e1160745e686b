use thiserror::Error;

/// Feil fra grensesnittet mot omverdenen (import, eksport, konfig, rapport).
/// Selve formlene feiler aldri – de returnerer 0 ved nulldivisjon.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error ({what}) at {path}: {message}")]
    Json {
        what: &'static str,
        path: String,
        message: String,
    },

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid sex `{0}` (expected male/female)")]
    InvalidSex(String),

    #[error("no data: the performance log is empty")]
    EmptyLog,
}

impl EngineError {
    pub(crate) fn json(what: &'static str, e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        EngineError::Json {
            what,
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        }
    }
}

/// Parser en JSON-streng med sti-sporing, slik at feilmeldingen peker på feltet.
pub(crate) fn from_json_str<T>(what: &'static str, json_in: &str) -> Result<T, EngineError>
where
    T: serde::de::DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_str(json_in);
    serde_path_to_error::deserialize(&mut de).map_err(|e| EngineError::json(what, e))
}
