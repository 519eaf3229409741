use k8s_openapi::api::apps::v1::{StatefulSet, StatefulSetStatus};
use kube::ResourceExt;
use kubecheck_core::{Resource, ResourceKind};

use crate::replicas::{ReplicaStatusCheck, ReplicaWorkload};

/// `statefulset_status`: same thresholds as `deployment_status`, applied to
/// a StatefulSet's replica counts.
pub type StatefulSetStatusCheck = ReplicaStatusCheck<StatefulSet>;

impl ReplicaWorkload for StatefulSet {
    const CHECK_NAME: &'static str = "statefulset_status";
    const KIND: ResourceKind = ResourceKind::StatefulSet;
    const DESCRIPTION: &'static str = "Checks statefulset pod levels via the status object \
        reported by Kubernetes. Provides the full statefulset status object in the result output.";

    type Status = StatefulSetStatus;

    fn narrow(resource: Resource) -> Result<Box<Self>, Resource> {
        match resource {
            Resource::StatefulSet(s) => Ok(s),
            other => Err(other),
        }
    }

    fn name(&self) -> String {
        self.name_any()
    }

    fn status(&self) -> Option<&StatefulSetStatus> {
        self.status.as_ref()
    }

    fn desired(status: &StatefulSetStatus) -> i32 {
        status.replicas
    }

    fn available(status: &StatefulSetStatus) -> i32 {
        status.available_replicas.unwrap_or(0)
    }
}
