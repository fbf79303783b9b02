use std::fmt::Debug;

use kube::api;
use kube::ResourceExt as _;
use kubevirt_ext as k8s;

use k8s::corev1;
use k8s::kubevirtv1;

pub use error::Error;
pub use error::Result;

pub mod selector;

mod error;

#[derive(Clone)]
pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client configuration is inferred from the environment: `KUBECONFIG`,
    /// the local kubeconfig file, or the in-cluster service account.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = kubevirt_libpod::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The returned KubeApi starts every list query from default `ListParams`
    /// and uses `client` for all Kubernetes interactions.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// Find the newest running pod labelled `label_type=label` in `namespace`.
    ///
    /// When `node` is given (and not empty) only pods scheduled to that node are
    /// considered. A migrating workload may briefly have more than one running
    /// pod, so the result set is ordered by creation timestamp and the latest
    /// pod is returned.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no running pod matches, [`Error::Kube`] when the
    /// list call fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &kubevirt_libpod::KubeApi) -> kubevirt_libpod::Result<()> {
    /// let pod = api
    ///     .get_running_pod_by_label("virt-handler", "kubevirt.io", "kubevirt", Some("node01"))
    ///     .await?;
    /// println!("{:?}", pod.metadata.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_running_pod_by_label(
        &self,
        label: &str,
        label_type: &str,
        namespace: &str,
        node: Option<&str>,
    ) -> Result<corev1::Pod> {
        let labels = selector::label_selector(label_type, label);
        let fields = selector::running_field_selector(node);
        let lp = self.list_params().clone().labels(&labels).fields(&fields);

        let mut pods = self.list_pods(namespace, &lp).await?;
        if pods.len() > 1 {
            tracing::info!(
                namespace,
                %labels,
                count = pods.len(),
                "Multiple running pods, picking the newest"
            );
        }

        k8s::newest_first(&mut pods);
        pods.into_iter()
            .next()
            .ok_or_else(|| Error::not_found(format!("failed to find pod with the label {label}")))
    }

    /// Find the pod in `namespace` controlled by `vmi`.
    ///
    /// All pods in the namespace are listed and the first one whose controller
    /// owner reference carries the VMI's uid is returned. The scan follows the
    /// order of the list response.
    pub async fn get_pod_by_virtual_machine_instance(
        &self,
        vmi: &kubevirtv1::VirtualMachineInstance,
        namespace: &str,
    ) -> Result<corev1::Pod> {
        let pods = self.list_pods(namespace, self.list_params()).await?;

        pods.into_iter()
            .find(|pod| k8s::is_controlled_by(pod, vmi))
            .inspect(|pod| {
                tracing::debug!(
                    vmi = %vmi.name_any(),
                    pod = %pod.name_any(),
                    "Found controlled pod"
                );
            })
            .ok_or_else(|| Error::not_found("no controlled pod was found for VMI"))
    }

    /// Find the running virt-launcher pod of `vmi`.
    ///
    /// Launcher pods carry the `kubevirt.io/created-by` label set to the uid of
    /// their VMI. The lookup is pinned to the VMI's node when its status reports
    /// one, and falls back to the client's default namespace when the VMI has none.
    pub async fn get_running_pod_for_virtual_machine_instance(
        &self,
        vmi: &kubevirtv1::VirtualMachineInstance,
    ) -> Result<corev1::Pod> {
        let uid = vmi.metadata.uid.as_deref().ok_or_else(|| {
            Error::not_found(format!("VMI {} has no uid", vmi.name_any()))
        })?;
        let namespace = vmi
            .namespace()
            .unwrap_or_else(|| self.client.default_namespace().to_string());

        self.get_running_pod_by_label(
            uid,
            kubevirtv1::CREATED_BY_LABEL,
            &namespace,
            vmi.node_name(),
        )
        .await
    }

    async fn list_pods(
        &self,
        namespace: &str,
        lp: &api::ListParams,
    ) -> kube::Result<Vec<corev1::Pod>> {
        let pods = self.pods(namespace).list(lp).await?.items;
        tracing::debug!(
            namespace,
            labels = ?lp.label_selector,
            fields = ?lp.field_selector,
            count = pods.len(),
            "Listed pods"
        );
        Ok(pods)
    }

    /// Get an Api handle scoped to Pods in `namespace`.
    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing `list_params` while redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}
