use crate::types::{CoverageRecord, CoverageSummary};

/// Sums hit and found counts across all records before dividing, so a large
/// file weighs proportionally more than a small one. A zero `found` sum
/// divides 0/0 and the NaN is handed through untouched.
pub fn compute_summary(records: &[CoverageRecord]) -> CoverageSummary {
    let lines_hit: u64 = records.iter().map(|r| r.lines_hit).sum();
    let lines_found: u64 = records.iter().map(|r| r.lines_found).sum();
    let functions_hit: u64 = records.iter().map(|r| r.functions_hit).sum();
    let functions_found: u64 = records.iter().map(|r| r.functions_found).sum();

    CoverageSummary {
        line_ratio: lines_hit as f64 / lines_found as f64,
        function_ratio: functions_hit as f64 / functions_found as f64,
    }
}
