use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::types::{CoverageSummary, ResultT, UploadPayload};

use log::{error, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

/// Joins server base, repo, branch and the literal `coverage` segment under
/// RFC 3986 resolution rules.
pub fn build_target(config: &ReportConfig) -> ResultT<Url> {
    let relative = format!("{}/{}/coverage", config.repo, config.branch);
    config
        .server
        .join(&relative)
        .map_err(|source| ReportError::InvalidServerUrl {
            url: config.server.to_string(),
            source,
        })
}

/// Uploads the aggregated summary to the collector. Exactly one POST, no
/// retries, no timeout beyond the transport defaults. The collector answers
/// 201 on a stored report; every other status fails the run.
pub fn submit(summary: &CoverageSummary, config: &ReportConfig) -> ResultT<()> {
    let target = build_target(config)?;
    info!("uploading summary to {}", target);

    let payload = UploadPayload {
        coverage_total: 100.0 * summary.line_ratio,
        build_number: config.build_number.clone(),
    };

    let client = Client::builder().build()?;
    let response = client
        .post(target)
        .bearer_auth(&config.token)
        .json(&payload)
        .send()?;

    let status = response.status();
    if status.is_success() && status == StatusCode::CREATED {
        info!("upload complete");
        Ok(())
    } else {
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        let body = response.text().unwrap_or_default();
        error!(
            "upload failed: {} {} (response body: {:?})",
            status.as_u16(),
            status_text,
            body
        );
        Err(ReportError::Upload {
            status: status.as_u16(),
            status_text,
        })
    }
}
