use k8s_openapi::api::apps::v1::{Deployment, DeploymentStatus};
use kube::ResourceExt;
use kubecheck_core::{Resource, ResourceKind};

use crate::replicas::{ReplicaStatusCheck, ReplicaWorkload};

/// `deployment_status`: compares `.status.availableReplicas` to
/// `.status.replicas`.
pub type DeploymentStatusCheck = ReplicaStatusCheck<Deployment>;

impl ReplicaWorkload for Deployment {
    const CHECK_NAME: &'static str = "deployment_status";
    const KIND: ResourceKind = ResourceKind::Deployment;
    const DESCRIPTION: &'static str = "Checks deployment pod levels via the status object \
        reported by Kubernetes. Provides the full deployment status object in the result output.";

    type Status = DeploymentStatus;

    fn narrow(resource: Resource) -> Result<Box<Self>, Resource> {
        match resource {
            Resource::Deployment(d) => Ok(d),
            other => Err(other),
        }
    }

    fn name(&self) -> String {
        self.name_any()
    }

    fn status(&self) -> Option<&DeploymentStatus> {
        self.status.as_ref()
    }

    fn desired(status: &DeploymentStatus) -> i32 {
        status.replicas.unwrap_or(0)
    }

    fn available(status: &DeploymentStatus) -> i32 {
        status.available_replicas.unwrap_or(0)
    }
}
