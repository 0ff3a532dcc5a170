use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InstallerConfig {
    pub conf: String,
    #[serde(alias = "release-namespace")]
    pub release_namespace: String,
    pub chart: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self { conf: String::new(), release_namespace: "dapr-system".into(), chart: "dapr/dapr".into() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Namespace `helmdapr demo` lists pods in.
    #[serde(alias = "default-namespace")]
    pub default_namespace: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self { default_namespace: "default".into() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info".into() }
    }
}
