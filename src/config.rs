use crate::args::EnvProfile;
use crate::error::ReportError;
use crate::types::ResultT;

use std::env;
use std::path::PathBuf;
use url::Url;

/// Environment variable names for the six required configuration values.
/// The upload pipeline itself is identical for every CI; only this mapping
/// differs between deployments.
#[derive(Debug, Clone, Copy)]
pub struct EnvMapping {
    pub server: &'static str,
    pub repo: &'static str,
    pub branch: &'static str,
    pub token: &'static str,
    pub build_number: &'static str,
    pub info_file: &'static str,
}

impl EnvProfile {
    pub fn mapping(&self) -> EnvMapping {
        match self {
            EnvProfile::Drone => EnvMapping {
                server: "PLUGIN_SERVER",
                repo: "DRONE_REPO",
                branch: "DRONE_COMMIT_BRANCH",
                token: "DRONECOV_ACCESS_TOKEN",
                build_number: "DRONE_BUILD_NUMBER",
                info_file: "PLUGIN_LCOV_INFO",
            },
            EnvProfile::Woodpecker => EnvMapping {
                server: "PLUGIN_SERVER",
                repo: "CI_REPO",
                branch: "CI_COMMIT_BRANCH",
                token: "PLUGIN_ACCESS_TOKEN",
                build_number: "CI_BUILD_NUMBER",
                info_file: "PLUGIN_LCOV_INFO",
            },
        }
    }
}

/// Fully resolved run configuration. Constructed once at startup; every
/// field is mandatory.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub server: Url,
    pub repo: String,
    pub branch: String,
    pub token: String,
    pub build_number: String,
    pub info_file: PathBuf,
}

impl ReportConfig {
    pub fn from_env(mapping: &EnvMapping) -> ResultT<Self> {
        Self::resolve(mapping, |var| env::var(var).ok())
    }

    /// Resolves all six values through `lookup`. Absent and empty values are
    /// rejected up front so that no malformed request (e.g. an empty bearer
    /// token) can reach the collector.
    pub fn resolve<F>(mapping: &EnvMapping, lookup: F) -> ResultT<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str, var: &'static str| -> ResultT<String> {
            match lookup(var) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ReportError::MissingConfig {
                    key,
                    var: var.to_string(),
                }),
            }
        };

        let server_raw = require("server", mapping.server)?;
        let server = Url::parse(&server_raw).map_err(|source| ReportError::InvalidServerUrl {
            url: server_raw.clone(),
            source,
        })?;

        Ok(Self {
            server,
            repo: require("repo", mapping.repo)?,
            branch: require("branch", mapping.branch)?,
            token: require("token", mapping.token)?,
            build_number: require("build_number", mapping.build_number)?,
            info_file: PathBuf::from(require("info_file", mapping.info_file)?),
        })
    }
}
