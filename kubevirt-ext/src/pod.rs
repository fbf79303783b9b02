use super::*;

/// Pod phase reported by the kubelet once all containers have been started
pub const POD_RUNNING: &str = "Running";

pub trait PodExt {
    fn phase(&self) -> Option<&str>;
    fn is_running(&self) -> bool;
    fn node_name(&self) -> Option<&str>;
    fn created(&self) -> Option<&metav1::Time>;
}

impl PodExt for corev1::Pod {
    fn phase(&self) -> Option<&str> {
        self.status.as_ref()?.phase.as_deref()
    }

    fn is_running(&self) -> bool {
        self.phase() == Some(POD_RUNNING)
    }

    fn node_name(&self) -> Option<&str> {
        self.spec.as_ref()?.node_name.as_deref()
    }

    fn created(&self) -> Option<&metav1::Time> {
        self.metadata.creation_timestamp.as_ref()
    }
}

/// Sort `pods` by creation timestamp, newest first.
///
/// Pods without a creation timestamp go last. The sort is stable, so pods
/// created at the same instant keep the order the API returned them in.
pub fn newest_first(pods: &mut [corev1::Pod]) {
    pods.sort_by(|a, b| b.created().cmp(&a.created()));
}
