//! Host environment probe for the lab dashboard.
//!
//! Interpreter version, platform and host name are resolved once when the
//! service is created; only the timestamp changes between snapshots.

use chrono::Local;
use sysinfo::System;
use tracing::{debug, warn};

use crate::config::LabConfig;
use crate::error::{Error, Result};
use crate::models::{EnvironmentSnapshot, TIME_FORMAT};

/// Reported when no interpreter could be found.
const UNKNOWN_VERSION: &str = "unknown";

/// Interpreters tried, in order, when no version is configured.
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Service describing the machine the lab runs on.
#[derive(Debug, Clone)]
pub struct EnvironmentService {
    python_version: String,
    platform: String,
    hostname: String,
}

impl EnvironmentService {
    /// Resolve host facts, probing the Python interpreter unless configured.
    pub async fn probe(config: &LabConfig) -> Self {
        let python_version = match &config.python_version {
            Some(version) => version.clone(),
            None => probe_python_version().await,
        };

        let service = Self {
            python_version,
            platform: platform_string(),
            hostname: System::host_name().unwrap_or_else(|| "localhost".to_string()),
        };

        debug!(
            python_version = %service.python_version,
            platform = %service.platform,
            hostname = %service.hostname,
            "Resolved lab environment"
        );

        service
    }

    /// Create a service with fixed facts.
    pub fn with_facts(
        python_version: impl Into<String>,
        platform: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            python_version: python_version.into(),
            platform: platform.into(),
            hostname: hostname.into(),
        }
    }

    /// Capture the environment at the current local time.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            python_version: self.python_version.clone(),
            platform: self.platform.clone(),
            hostname: self.hostname.clone(),
            current_time: Local::now().format(TIME_FORMAT).to_string(),
        }
    }
}

async fn probe_python_version() -> String {
    for program in PYTHON_CANDIDATES {
        match python_version_of(program).await {
            Ok(version) => return version,
            Err(e) => debug!(program, error = %e, "Interpreter probe failed"),
        }
    }
    warn!("No Python interpreter found, reporting version as {}", UNKNOWN_VERSION);
    UNKNOWN_VERSION.to_string()
}

/// Run `<program> --version` and extract the version number.
async fn python_version_of(program: &str) -> Result<String> {
    let output = tokio::process::Command::new(program)
        .arg("--version")
        .output()
        .await
        .map_err(|e| Error::Internal(format!("Failed to run {} --version: {}", program, e)))?;

    if !output.status.success() {
        return Err(Error::Internal(format!(
            "{} --version exited with {}",
            program, output.status
        )));
    }

    // Python 2 prints its version on stderr.
    let text = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr)
    } else {
        String::from_utf8_lossy(&output.stdout)
    };

    parse_python_version(&text)
        .ok_or_else(|| Error::Internal(format!("Unexpected version output: {}", text.trim())))
}

/// Parse the output of `python --version`, e.g. `Python 3.11.4`.
fn parse_python_version(output: &str) -> Option<String> {
    let version = output.trim().strip_prefix("Python")?.trim();
    if version.is_empty() || !version.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Some(version.to_string())
}

/// Platform descriptor in the form `<System>-<kernel release>-<arch>`.
fn platform_string() -> String {
    format_platform(
        system_name(std::env::consts::OS),
        System::kernel_version().as_deref(),
        std::env::consts::ARCH,
    )
}

fn system_name(os: &str) -> &str {
    match os {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

fn format_platform(system: &str, kernel: Option<&str>, arch: &str) -> String {
    match kernel.map(str::trim).filter(|k| !k.is_empty()) {
        Some(kernel) => format!("{}-{}-{}", system, kernel, arch),
        None => format!("{}-{}", system, arch),
    }
}
