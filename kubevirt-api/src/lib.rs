//! Typed KubeVirt API objects.
//!
//! Only the parts of the KubeVirt API that the test helpers need are modelled
//! here. Unknown fields are ignored on deserialization.

use k8s_openapi as k8s;
use serde::{Deserialize, Serialize};

use k8s::apimachinery::pkg::apis::meta::v1 as metav1;

pub mod v1;
