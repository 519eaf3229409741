use kubecheck_core::{
    Check, CheckConfig, CheckError, CheckResult, CheckUsage, ConfigError, Registry,
    RegistryError, Resource, ResourceKind, render_output,
};
use serde::Serialize;
use tracing::debug;

use crate::thresholds::ThresholdConfig;

/// A workload whose status reports desired and available replica counts.
pub trait ReplicaWorkload: Sized + Send + 'static {
    /// Name the check is registered under.
    const CHECK_NAME: &'static str;
    const KIND: ResourceKind;
    const DESCRIPTION: &'static str;

    /// Status sub-object rendered as the check output.
    type Status: Serialize;

    /// Take the workload out of a resource, handing the resource back when
    /// it is a different kind.
    fn narrow(resource: Resource) -> Result<Box<Self>, Resource>;

    fn name(&self) -> String;

    fn status(&self) -> Option<&Self::Status>;

    fn desired(status: &Self::Status) -> i32;

    /// Missing counts read as zero.
    fn available(status: &Self::Status) -> i32;
}

/// Ratio of available to desired replicas.
pub fn replica_level(desired: i32, available: i32) -> Option<f64> {
    (desired > 0).then(|| f64::from(available) / f64::from(desired))
}

/// Classifies a workload by its available/desired replica ratio.
pub struct ReplicaStatusCheck<W: ReplicaWorkload> {
    config: CheckConfig,
    thresholds: ThresholdConfig,
    workload: Option<Box<W>>,
}

impl<W: ReplicaWorkload> ReplicaStatusCheck<W> {
    pub fn new(config: CheckConfig) -> Result<Self, ConfigError> {
        let thresholds = ThresholdConfig::from_argv(&config.argv)?;
        Ok(Self::with_thresholds(config, thresholds))
    }

    pub fn with_thresholds(config: CheckConfig, thresholds: ThresholdConfig) -> Self {
        Self {
            config,
            thresholds,
            workload: None,
        }
    }

    pub fn factory(config: CheckConfig) -> Result<Box<dyn Check>, ConfigError> {
        Ok(Box::new(Self::new(config)?))
    }

    pub fn describe() -> CheckUsage {
        CheckUsage {
            description: W::DESCRIPTION.to_string(),
            flags: ThresholdConfig::flag_usage(W::CHECK_NAME),
        }
    }

    pub fn register(registry: &mut Registry) -> Result<(), RegistryError> {
        registry.register(W::CHECK_NAME, Self::factory, Self::describe, &[W::KIND])
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }
}

impl<W: ReplicaWorkload> Check for ReplicaStatusCheck<W> {
    fn config(&self) -> &CheckConfig {
        &self.config
    }

    fn usage(&self) -> CheckUsage {
        Self::describe()
    }

    fn update(&mut self, resource: Resource) -> Result<(), CheckError> {
        let workload = W::narrow(resource).map_err(|other| CheckError::KindMismatch {
            check: self.config.name.clone(),
            expected: W::KIND,
            got: other.kind(),
        })?;
        debug!(check_id = %self.config.id, kind = %W::KIND, name = %workload.name(), "snapshot updated");
        self.workload = Some(workload);
        Ok(())
    }

    fn execute(&self) -> Result<CheckResult, CheckError> {
        let workload = self.workload.as_deref().ok_or(CheckError::NoSnapshot)?;
        let status = workload.status().ok_or_else(|| CheckError::MissingStatus {
            kind: W::KIND,
            name: workload.name(),
        })?;

        let desired = W::desired(status);
        let available = W::available(status);
        let level = replica_level(desired, available).ok_or_else(|| {
            CheckError::NoDesiredReplicas {
                kind: W::KIND,
                name: workload.name(),
            }
        })?;

        let mut res = CheckResult::from_config(&self.config);
        res.status = self.thresholds.classify(level);
        res.output = render_output(status)?;

        debug!(
            check_id = %self.config.id,
            desired,
            available,
            level,
            status = %res.status,
            "check executed"
        );
        Ok(res)
    }
}
