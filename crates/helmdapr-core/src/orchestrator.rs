use tracing::{info, warn};

#[cfg(test)]
use mockall::automock;

use crate::installer::{InstallOutcome, InstallRequest, Installer};

/// Sink that receives every install outcome.
#[cfg_attr(test, automock)]
pub trait Reporter {
    fn report(&self, id: i64, request: &InstallRequest, outcome: &InstallOutcome);
}

/// Logs outcomes through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, id: i64, request: &InstallRequest, outcome: &InstallOutcome) {
        match &outcome.error {
            Some(e) => warn!(id, request = request.name(), success = outcome.success, "Install {id} returned error: {e}"),
            None => info!(id, request = request.name(), success = outcome.success, "Install {id}: {outcome}"),
        }
    }
}

/// Runs `installer.install` once and logs the outcome.
pub fn execute_install<I>(id: i64, request: &InstallRequest, installer: &mut I)
where
    I: Installer + ?Sized,
{
    execute_install_with(id, request, installer, &TracingReporter);
}

/// Runs `installer.install` once and hands the outcome to `reporter` unchanged.
///
/// Nothing is retried or translated; the returned outcome is the one reported.
pub fn execute_install_with<I, R>(id: i64, request: &InstallRequest, installer: &mut I, reporter: &R) -> InstallOutcome
where
    I: Installer + ?Sized,
    R: Reporter + ?Sized,
{
    let outcome = installer.install(id, request);
    reporter.report(id, request, &outcome);
    outcome
}
