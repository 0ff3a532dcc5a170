use tracing::debug;

use crate::error::InstallError;
use crate::installer::{InstallOutcome, InstallRequest, InstallResult, Installer};

const CONF_MARKER: &str = "conf-HelmDapr";

/// Sample installer. It performs no real work; each call only stamps `conf`.
#[derive(Debug, Clone, Default)]
pub struct HelmDapr {
    pub conf: String,
}

impl HelmDapr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_conf(conf: impl Into<String>) -> Self {
        Self { conf: conf.into() }
    }
}

impl Installer for HelmDapr {
    fn install(&mut self, id: i64, request: &InstallRequest) -> InstallOutcome {
        debug!("HelmDapr install {id}: {}", request.name());
        self.conf = CONF_MARKER.to_string();
        InstallOutcome::succeeded(InstallResult::new("installed success"))
    }

    fn uninstall(&mut self, id: i64) -> Result<(), InstallError> {
        debug!("HelmDapr uninstall {id}");
        self.conf = CONF_MARKER.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_reports_success_and_stamps_conf() {
        let mut installer = HelmDapr::new();
        let outcome = installer.install(1, &InstallRequest::new("dapr"));

        assert!(outcome.success);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.result, Some(InstallResult::new("installed success")));
        assert_eq!(installer.conf, "conf-HelmDapr");
    }

    #[test]
    fn uninstall_accepts_any_id() {
        let mut installer = HelmDapr::with_conf("initial");
        for id in [0, -1, i64::MIN, 42, i64::MAX] {
            assert_eq!(installer.uninstall(id), Ok(()));
        }
        assert_eq!(installer.conf, "conf-HelmDapr");
    }
}
