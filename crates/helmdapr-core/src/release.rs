use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::InstallError;
use crate::installer::{InstallOutcome, InstallRequest, InstallResult, Installer};

pub type Values = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseStatus {
    Unknown,
    Deployed,
    Uninstalled,
    Superseded,
    Failed,
    Uninstalling,
    PendingInstall,
    PendingUpgrade,
    PendingRollback,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Deployed => write!(f, "deployed"),
            Self::Uninstalled => write!(f, "uninstalled"),
            Self::Superseded => write!(f, "superseded"),
            Self::Failed => write!(f, "failed"),
            Self::Uninstalling => write!(f, "uninstalling"),
            Self::PendingInstall => write!(f, "pending-install"),
            Self::PendingUpgrade => write!(f, "pending-upgrade"),
            Self::PendingRollback => write!(f, "pending-rollback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub name: String,
    pub namespace: String,
    pub status: ReleaseStatus,
}

/// Installs a chart and returns the resulting release.
pub trait ReleaseClient {
    fn install_release(&self, chart_path: &str, namespace: &str, values: &Values) -> Result<Release, InstallError>;
}

/// Answers every install with the same deployed release.
#[derive(Debug, Default)]
pub struct FakeReleaseClient {
    calls: Cell<usize>,
}

impl FakeReleaseClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ReleaseClient for FakeReleaseClient {
    fn install_release(&self, chart_path: &str, namespace: &str, _values: &Values) -> Result<Release, InstallError> {
        self.calls.set(self.calls.get() + 1);
        debug!("Fake release install of {chart_path} into {namespace}");
        Ok(Release { name: "fake-release".into(), namespace: "default".into(), status: ReleaseStatus::Deployed })
    }
}

/// [`Installer`] that treats the request name as a chart path.
pub struct ReleaseInstaller<C> {
    client: C,
    namespace: String,
    values: Values,
    releases: HashMap<i64, Release>,
}

impl<C: ReleaseClient> ReleaseInstaller<C> {
    pub fn new(client: C, namespace: impl Into<String>) -> Self {
        Self { client, namespace: namespace.into(), values: Values::new(), releases: HashMap::new() }
    }

    pub fn with_values(mut self, values: Values) -> Self {
        self.values = values;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn release(&self, id: i64) -> Option<&Release> {
        self.releases.get(&id)
    }
}

impl<C: ReleaseClient> Installer for ReleaseInstaller<C> {
    fn install(&mut self, id: i64, request: &InstallRequest) -> InstallOutcome {
        let release = match self.client.install_release(request.name(), &self.namespace, &self.values) {
            Ok(release) => release,
            Err(e) => {
                warn!("Release install {id} of {} failed: {e}", request.name());
                return InstallOutcome::failed(e);
            }
        };

        let result = InstallResult::new(format!("release {} {} in {}", release.name, release.status, release.namespace));
        let status = release.status;
        self.releases.insert(id, release);

        if status == ReleaseStatus::Deployed {
            InstallOutcome::succeeded(result)
        } else {
            InstallOutcome::failed_with(result, InstallError::Failed(format!("release status is {status}")))
        }
    }

    fn uninstall(&mut self, id: i64) -> Result<(), InstallError> {
        match self.releases.remove(&id) {
            Some(release) => {
                debug!("Forgot release {} for id {id}", release.name);
                Ok(())
            }
            None => Err(InstallError::NotInstalled(id)),
        }
    }
}
