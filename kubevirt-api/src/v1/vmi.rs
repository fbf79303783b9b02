use super::*;

/// `VirtualMachineInstance` is a running virtual machine workload.
///
/// The `spec` is intentionally not modelled; only identity and the
/// scheduling status are of interest to the test helpers.
///
/// `apiVersion` and `kind` are always emitted on serialization and ignored on
/// deserialization, like the generated `k8s-openapi` types do.
///
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstance {
    pub metadata: metav1::ObjectMeta,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualMachineInstanceStatus>,
}

/// `VirtualMachineInstanceStatus` represents information about the status of a VMI
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceStatus {
    /// Phase is the status of the VMI in kubernetes world
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<VirtualMachineInstancePhase>,

    /// NodeName is the name where the VMI is currently running
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
}

/// Lifecycle phase of a VMI
///
/// Phases this crate does not know about decode as `Unknown`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VirtualMachineInstancePhase {
    #[serde(rename = "")]
    Unset,
    Pending,
    Scheduling,
    Scheduled,
    Running,
    Succeeded,
    Failed,
    WaitingForSync,
    #[serde(other)]
    Unknown,
}

pub type VirtualMachineInstanceList = k8s::List<VirtualMachineInstance>;

impl VirtualMachineInstance {
    /// Create new `VirtualMachineInstance` with given `name` in `namespace`
    ///
    pub fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..metav1::ObjectMeta::default()
        };
        Self {
            metadata,
            status: None,
        }
    }

    /// Name of the node the VMI is currently scheduled to, if any
    ///
    pub fn node_name(&self) -> Option<&str> {
        self.status.as_ref()?.node_name.as_deref()
    }

    pub fn phase(&self) -> Option<VirtualMachineInstancePhase> {
        self.status.as_ref()?.phase
    }
}

impl Serialize for VirtualMachineInstance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct as _;

        let len = if self.status.is_some() { 4 } else { 3 };
        let mut state =
            serializer.serialize_struct(<Self as k8s::Resource>::KIND, len)?;
        state.serialize_field("apiVersion", <Self as k8s::Resource>::API_VERSION)?;
        state.serialize_field("kind", <Self as k8s::Resource>::KIND)?;
        state.serialize_field("metadata", &self.metadata)?;
        if let Some(status) = &self.status {
            state.serialize_field("status", status)?;
        }
        state.end()
    }
}

impl k8s::Resource for VirtualMachineInstance {
    const API_VERSION: &'static str = KUBEVIRT_API_GROUP_VERSION;
    const GROUP: &'static str = KUBEVIRT_API_GROUP;
    const KIND: &'static str = "VirtualMachineInstance";
    const VERSION: &'static str = KUBEVIRT_API_VERSION;
    const URL_PATH_SEGMENT: &'static str = "virtualmachineinstances";
    type Scope = k8s::NamespaceResourceScope;
}

impl k8s::ListableResource for VirtualMachineInstance {
    const LIST_KIND: &'static str = "VirtualMachineInstanceList";
}

impl k8s::Metadata for VirtualMachineInstance {
    type Ty = metav1::ObjectMeta;

    fn metadata(&self) -> &<Self as k8s::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut <Self as k8s::Metadata>::Ty {
        &mut self.metadata
    }
}
