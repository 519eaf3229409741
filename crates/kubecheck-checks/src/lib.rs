mod deployment;
mod replicas;
mod statefulset;
mod thresholds;

pub use deployment::*;
pub use replicas::*;
pub use statefulset::*;
pub use thresholds::*;

use kubecheck_core::{Registry, RegistryError};

/// Registry holding every check shipped in this crate.
pub fn builtin_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    DeploymentStatusCheck::register(&mut registry)?;
    StatefulSetStatusCheck::register(&mut registry)?;
    Ok(registry)
}
