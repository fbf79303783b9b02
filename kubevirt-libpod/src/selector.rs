//! Builders for the selector strings sent with pod list queries.

use kubevirt_ext::POD_RUNNING;

/// Equality-based label selector `key=value`
///
/// # Examples
///
/// ```
/// use kubevirt_libpod::selector::label_selector;
/// assert_eq!(label_selector("kubevirt.io", "virt-launcher"), "kubevirt.io=virt-launcher");
/// ```
pub fn label_selector(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

/// Field selector matching running pods, optionally pinned to `node`.
///
/// An empty node name is treated the same as no node.
///
/// # Examples
///
/// ```
/// use kubevirt_libpod::selector::running_field_selector;
/// assert_eq!(running_field_selector(None), "status.phase==Running");
/// assert_eq!(
///     running_field_selector(Some("node01")),
///     "status.phase==Running,spec.nodeName==node01"
/// );
/// ```
pub fn running_field_selector(node: Option<&str>) -> String {
    match node.filter(|node| !node.is_empty()) {
        Some(node) => format!("status.phase=={POD_RUNNING},spec.nodeName=={node}"),
        None => format!("status.phase=={POD_RUNNING}"),
    }
}
