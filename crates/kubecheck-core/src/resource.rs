use std::str::FromStr;

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use kube::ResourceExt;
use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Resource kinds a check can declare interest in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Deployment,
    StatefulSet,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::StatefulSet => "statefulset",
        }
    }

    /// `apiVersion` of the k8s-openapi type backing this kind.
    pub fn api_version(&self) -> &'static str {
        match self {
            Self::Deployment => <Deployment as k8s_openapi::Resource>::API_VERSION,
            Self::StatefulSet => <StatefulSet as k8s_openapi::Resource>::API_VERSION,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ResourceError;

    /// Accepts both the lowercase tag (`deployment`) and the manifest
    /// kind (`Deployment`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deployment" => Ok(Self::Deployment),
            "statefulset" => Ok(Self::StatefulSet),
            _ => Err(ResourceError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A live object snapshot as delivered by a watcher.
///
/// Dispatch on the variant replaces an unchecked downcast: a check that
/// receives a kind it did not declare reports
/// [`CheckError::KindMismatch`](crate::CheckError::KindMismatch).
#[derive(Clone, Debug)]
pub enum Resource {
    Deployment(Box<Deployment>),
    StatefulSet(Box<StatefulSet>),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Deployment(_) => ResourceKind::Deployment,
            Self::StatefulSet(_) => ResourceKind::StatefulSet,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Deployment(d) => d.name_any(),
            Self::StatefulSet(s) => s.name_any(),
        }
    }

    pub fn namespace(&self) -> Option<String> {
        match self {
            Self::Deployment(d) => d.namespace(),
            Self::StatefulSet(s) => s.namespace(),
        }
    }

    /// Decode a manifest (JSON or YAML already parsed into a value) using
    /// its `kind` field to pick the variant.
    pub fn from_manifest(manifest: serde_json::Value) -> Result<Self, ResourceError> {
        let kind: ResourceKind = manifest
            .get("kind")
            .and_then(|k| k.as_str())
            .ok_or(ResourceError::MissingKind)?
            .parse()?;

        // A missing apiVersion is accepted; a different one is not.
        let expected = kind.api_version();
        if let Some(found) = manifest.get("apiVersion").and_then(|v| v.as_str()) {
            if found != expected {
                return Err(ResourceError::UnsupportedApiVersion {
                    kind,
                    expected,
                    found: found.to_string(),
                });
            }
        }

        let decode = |source| ResourceError::Decode { kind, source };
        match kind {
            ResourceKind::Deployment => serde_json::from_value(manifest)
                .map(|d| Self::Deployment(Box::new(d)))
                .map_err(decode),
            ResourceKind::StatefulSet => serde_json::from_value(manifest)
                .map(|s| Self::StatefulSet(Box::new(s)))
                .map_err(decode),
        }
    }
}

impl From<Deployment> for Resource {
    fn from(d: Deployment) -> Self {
        Self::Deployment(Box::new(d))
    }
}

impl From<StatefulSet> for Resource {
    fn from(s: StatefulSet) -> Self {
        Self::StatefulSet(Box::new(s))
    }
}
