pub mod cluster;
pub mod error;
pub mod helm_dapr;
pub mod installer;
pub mod orchestrator;
pub mod release;
pub mod summary;

pub use cluster::{ClusterApi, FakeApiServer, KubeCluster};
pub use error::{ClusterError, InstallError};
pub use helm_dapr::HelmDapr;
pub use installer::{FixedInstaller, InstallOutcome, InstallRequest, InstallResult, Installer};
pub use orchestrator::{execute_install, execute_install_with, Reporter, TracingReporter};
pub use release::{FakeReleaseClient, Release, ReleaseClient, ReleaseInstaller, ReleaseStatus};
pub use summary::PodSummary;
