use std::fmt;

#[cfg(test)]
use mockall::automock;

use crate::error::InstallError;

/// Identifies what to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    name: String,
}

impl InstallRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Human-readable outcome of an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallResult {
    message: String,
}

impl InstallResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for InstallResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What an [`Installer`] reports for one `install` call.
///
/// A result may accompany an error. Callers must not assume `result` is present
/// when `error` is set, nor that `success` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub success: bool,
    pub result: Option<InstallResult>,
    pub error: Option<InstallError>,
}

impl InstallOutcome {
    pub fn new(success: bool, result: Option<InstallResult>, error: Option<InstallError>) -> Self {
        Self { success, result, error }
    }

    pub fn succeeded(result: InstallResult) -> Self {
        Self { success: true, result: Some(result), error: None }
    }

    pub fn failed(error: InstallError) -> Self {
        Self { success: false, result: None, error: Some(error) }
    }

    pub fn failed_with(result: InstallResult, error: InstallError) -> Self {
        Self { success: false, result: Some(result), error: Some(error) }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result.as_ref().map(InstallResult::message).unwrap_or("<none>");
        match &self.error {
            Some(e) => write!(f, "success={} result={result} error={e}", self.success),
            None => write!(f, "success={} result={result}", self.success),
        }
    }
}

/// Performs (or simulates) installing and removing something under an id.
///
/// No retry or idempotence is implied: each call is attempted at most once.
#[cfg_attr(test, automock)]
pub trait Installer {
    fn install(&mut self, id: i64, request: &InstallRequest) -> InstallOutcome;

    fn uninstall(&mut self, id: i64) -> Result<(), InstallError>;
}

/// Fixed-response fake that remembers every call it receives.
#[derive(Debug, Clone)]
pub struct FixedInstaller {
    outcome: InstallOutcome,
    installs: Vec<(i64, InstallRequest)>,
    uninstalls: Vec<i64>,
}

impl FixedInstaller {
    pub fn new(outcome: InstallOutcome) -> Self {
        Self { outcome, installs: Vec::new(), uninstalls: Vec::new() }
    }

    pub fn installs(&self) -> &[(i64, InstallRequest)] {
        &self.installs
    }

    pub fn uninstalls(&self) -> &[i64] {
        &self.uninstalls
    }
}

impl Installer for FixedInstaller {
    fn install(&mut self, id: i64, request: &InstallRequest) -> InstallOutcome {
        self.installs.push((id, request.clone()));
        self.outcome.clone()
    }

    fn uninstall(&mut self, id: i64) -> Result<(), InstallError> {
        self.uninstalls.push(id);
        Ok(())
    }
}
