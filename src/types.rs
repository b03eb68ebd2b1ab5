use crate::error::ReportError;

use serde::Serialize;
use std::path::PathBuf;

pub type ResultT<T> = Result<T, ReportError>;

/// Counters taken from one `SF:` block of a tracefile.
#[derive(Debug, Clone)]
pub struct CoverageRecord {
    pub source_file: PathBuf,
    pub lines_found: u64,
    pub lines_hit: u64,
    pub functions_found: u64,
    pub functions_hit: u64,
}

/// Aggregate over a whole report. Both ratios are in [0, 1] whenever the
/// corresponding `found` sum is nonzero; an empty report divides 0/0 and
/// the resulting NaN is passed through as-is.
#[derive(Debug, Clone, Copy)]
pub struct CoverageSummary {
    pub line_ratio: f64,
    pub function_ratio: f64,
}

/// Wire format expected by the collector. The function ratio is computed
/// but never part of the payload; adding it would change the collector's
/// contract.
#[derive(Debug, Serialize)]
pub struct UploadPayload {
    pub coverage_total: f64,
    pub build_number: String,
}
