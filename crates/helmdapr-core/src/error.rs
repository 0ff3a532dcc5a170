use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallError {
    Failed(String),
    NotInstalled(i64),
    Release(String),
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(msg) => write!(f, "Install failed: {msg}"),
            Self::NotInstalled(id) => write!(f, "Nothing installed under id {id}"),
            Self::Release(msg) => write!(f, "Release error: {msg}"),
        }
    }
}

impl std::error::Error for InstallError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    NotFound { kind: &'static str, name: String },
    AlreadyExists { kind: &'static str, name: String },
    Api(String),
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, name } => write!(f, "{kind} \"{name}\" not found"),
            Self::AlreadyExists { kind, name } => write!(f, "{kind} \"{name}\" already exists"),
            Self::Api(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl std::error::Error for ClusterError {}
