use crate::resource::ResourceKind;

/// Rejected check options, reported when a check is constructed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
    #[error("--warn must be > 0 and <= 1")]
    WarnOutOfRange(f64),
    #[error("--crit must be > 0 and <= 1")]
    CritOutOfRange(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("check {check} observes {expected} resources, got {got}")]
    KindMismatch {
        check: String,
        expected: ResourceKind,
        got: ResourceKind,
    },
    #[error("no resource snapshot received yet")]
    NoSnapshot,
    #[error("{kind} {name} has no status")]
    MissingStatus { kind: ResourceKind, name: String },
    #[error("{kind} {name} desires zero replicas")]
    NoDesiredReplicas { kind: ResourceKind, name: String },
    #[error("failed to encode check output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no check registered under {0:?}")]
    UnknownCheck(String),
    #[error("a check is already registered under {0:?}")]
    Duplicate(String),
    #[error("check {id}: {source}")]
    Config {
        id: String,
        #[source]
        source: ConfigError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("manifest has no kind")]
    MissingKind,
    #[error("unsupported resource kind {0:?}")]
    UnsupportedKind(String),
    #[error("{kind} manifest has apiVersion {found:?}, expected {expected:?}")]
    UnsupportedApiVersion {
        kind: ResourceKind,
        expected: &'static str,
        found: String,
    },
    #[error("failed to decode {kind} manifest: {source}")]
    Decode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },
}
