use k8s_openapi::api::core::v1::Pod;

/// One row of `helmdapr demo`'s pod table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    pub phase: String,
    pub node: String,
}

impl PodSummary {
    pub const HEADERS: [&'static str; 4] = ["NAME", "NAMESPACE", "STATUS", "NODE"];

    pub fn cells(&self) -> [&str; 4] {
        [self.name.as_str(), self.namespace.as_str(), self.phase.as_str(), self.node.as_str()]
    }
}

impl From<&Pod> for PodSummary {
    fn from(pod: &Pod) -> Self {
        let or_none = |value: Option<&String>| value.cloned().unwrap_or_else(|| "<none>".into());
        Self {
            name: or_none(pod.metadata.name.as_ref()),
            namespace: or_none(pod.metadata.namespace.as_ref()),
            phase: pod.status.as_ref().and_then(|s| s.phase.clone()).unwrap_or_else(|| "Unknown".into()),
            node: or_none(pod.spec.as_ref().and_then(|s| s.node_name.as_ref())),
        }
    }
}
