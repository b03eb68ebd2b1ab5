use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a run. All variants terminate the pipeline at
/// the first occurrence; nothing is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration value `{key}` is not set (expected in ${var})")]
    MissingConfig { key: &'static str, var: String },

    #[error("invalid collector server url `{url}`: {source}")]
    InvalidServerUrl { url: String, source: url::ParseError },

    #[error("could not parse LCOV info file {path:?}: {detail}")]
    Parse { path: PathBuf, detail: String },

    #[error("upload failed: {status} {status_text}")]
    Upload { status: u16, status_text: String },

    #[error("upload request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),
}
