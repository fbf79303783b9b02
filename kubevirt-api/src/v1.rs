use constcat::concat;

use super::*;

pub use vmi::VirtualMachineInstance;
pub use vmi::VirtualMachineInstanceList;
pub use vmi::VirtualMachineInstancePhase;
pub use vmi::VirtualMachineInstanceStatus;

pub const KUBEVIRT_API_GROUP: &str = "kubevirt.io";
pub const KUBEVIRT_API_VERSION: &str = "v1";
pub const KUBEVIRT_API_GROUP_VERSION: &str = concat!(KUBEVIRT_API_GROUP, "/", KUBEVIRT_API_VERSION);

/// Label key carried by every KubeVirt component pod, e.g. `kubevirt.io=virt-launcher`
///
pub const APP_LABEL: &str = "kubevirt.io";

/// Label set on virt-launcher pods to the uid of the VMI they run
///
pub const CREATED_BY_LABEL: &str = "kubevirt.io/created-by";

/// Value of [`APP_LABEL`] on virt-launcher pods
///
pub const VIRT_LAUNCHER: &str = "virt-launcher";

mod vmi;
