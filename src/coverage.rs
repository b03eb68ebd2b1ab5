use crate::error::ReportError;
use crate::types::{CoverageRecord, ResultT};

use lcov::{Reader, Record};
use std::path::Path;

/// Reads an LCOV tracefile and folds every `SF:` block into one record.
/// A missing, unreadable or malformed file fails the run; nothing past the
/// first bad record is consumed.
pub fn parse_info_file(path: &Path) -> ResultT<Vec<CoverageRecord>> {
    let parse_err = |detail: String| ReportError::Parse {
        path: path.to_path_buf(),
        detail,
    };

    let reader = Reader::open_file(path).map_err(|e| parse_err(e.to_string()))?;

    let mut records = Vec::new();
    let mut current: Option<CoverageRecord> = None;
    for item in reader {
        let record = item.map_err(|e| parse_err(e.to_string()))?;
        match record {
            Record::SourceFile { path: source_file } => {
                current = Some(CoverageRecord {
                    source_file,
                    lines_found: 0,
                    lines_hit: 0,
                    functions_found: 0,
                    functions_hit: 0,
                });
            }
            Record::LinesFound { found } => {
                if let Some(rec) = current.as_mut() {
                    rec.lines_found = u64::from(found);
                }
            }
            Record::LinesHit { hit } => {
                if let Some(rec) = current.as_mut() {
                    rec.lines_hit = u64::from(hit);
                }
            }
            Record::FunctionsFound { found } => {
                if let Some(rec) = current.as_mut() {
                    rec.functions_found = u64::from(found);
                }
            }
            Record::FunctionsHit { hit } => {
                if let Some(rec) = current.as_mut() {
                    rec.functions_hit = u64::from(hit);
                }
            }
            Record::EndOfRecord => {
                if let Some(rec) = current.take() {
                    records.push(rec);
                }
            }
            // Per-line and per-function detail records carry no totals
            _ => {}
        }
    }

    Ok(records)
}
