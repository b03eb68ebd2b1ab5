mod args;
mod config;
mod coverage;
mod error;
mod summary;
#[cfg(test)]
mod test_utils;
mod types;
mod upload;

use crate::args::ARGS;
use crate::config::ReportConfig;
use crate::types::ResultT;

use log::{debug, error, info};
use std::process::exit;

fn main() {
    // Logger Setup
    let default_filter = if ARGS.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_level(true)
        .format_timestamp_secs()
        .init();

    if let Err(e) = run() {
        error!("Failed to upload coverage info: {}", e);
        exit(1);
    }
}

fn run() -> ResultT<()> {
    let config = ReportConfig::from_env(&ARGS.profile.mapping())?;
    run_pipeline(&config)
}

/// The whole program: parse, aggregate, submit. Each stage only starts
/// after the previous one completed; the first error ends the run.
fn run_pipeline(config: &ReportConfig) -> ResultT<()> {
    info!("reading LCOV info from {}", config.info_file.display());
    let records = coverage::parse_info_file(&config.info_file)?;
    for record in &records {
        debug!(
            "parsed {}: {}/{} lines, {}/{} functions",
            record.source_file.display(),
            record.lines_hit,
            record.lines_found,
            record.functions_hit,
            record.functions_found
        );
    }

    let summary = summary::compute_summary(&records);
    info!(
        "info file parsed ({} files): line ratio {:.4}, function ratio {:.4}",
        records.len(),
        summary.line_ratio,
        summary.function_ratio
    );

    upload::submit(&summary, config)
}
