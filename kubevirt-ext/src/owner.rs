use kube::ResourceExt as _;

use super::*;

/// Returns the owner reference of `resource` marked as its controller, if any.
///
/// At most one owner reference may have `controller: true`; the first one found wins.
///
/// # Examples
///
/// ```
/// # use kubevirt_ext::{controller_of, corev1};
/// let pod = corev1::Pod::default();
/// assert!(controller_of(&pod).is_none());
/// ```
pub fn controller_of<K>(resource: &K) -> Option<&metav1::OwnerReference>
where
    K: kube::Resource,
{
    resource
        .owner_references()
        .iter()
        .find(|owner| owner.controller == Some(true))
}

/// Whether `resource` is controlled by `owner`.
///
/// Returns `false` when `resource` has no controller owner reference, when
/// `owner` has no uid, or when the uids differ.
pub fn is_controlled_by<K, O>(resource: &K, owner: &O) -> bool
where
    K: kube::Resource,
    O: kube::Resource,
{
    match (controller_of(resource), owner.meta().uid.as_deref()) {
        (Some(controller), Some(uid)) => controller.uid == uid,
        _ => false,
    }
}
