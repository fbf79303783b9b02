pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
pub use kubevirt_api::v1 as kubevirtv1;

pub use owner::controller_of;
pub use owner::is_controlled_by;
pub use pod::newest_first;
pub use pod::PodExt;
pub use pod::POD_RUNNING;

mod owner;
mod pod;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn created(self, ts: impl Into<Option<metav1::Time>>) -> Self;
    fn with_uid(self, uid: impl ToString) -> Self;
    /// Append a controller owner reference pointing at `owner`.
    ///
    /// Nothing is appended when `owner` has no name or no uid.
    fn controlled_by<K>(self, owner: &K) -> Self
    where
        K: kube::Resource<DynamicType = ()>;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn created(self, ts: impl Into<Option<metav1::Time>>) -> Self {
        Self {
            creation_timestamp: ts.into(),
            ..self
        }
    }

    fn with_uid(self, uid: impl ToString) -> Self {
        Self {
            uid: Some(uid.to_string()),
            ..self
        }
    }

    fn controlled_by<K>(mut self, owner: &K) -> Self
    where
        K: kube::Resource<DynamicType = ()>,
    {
        if let Some(owner_ref) = owner.controller_owner_ref(&()) {
            self.owner_references
                .get_or_insert_with(Vec::new)
                .push(owner_ref);
        }
        self
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
