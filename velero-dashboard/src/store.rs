use std::future::Future;

use kube::{
    api::{Api, ApiResource, DynamicObject, GroupVersionKind, ListParams},
    config::KubeConfigOptions,
    Client, Config,
};

use crate::error::{Error, Result};

/// The one thing the dashboard needs from the cluster.
pub trait ObjectStore: Send + Sync {
    /// List every object of `gvk` in `namespace`; the empty namespace means all namespaces.
    fn list(
        &self,
        gvk: &GroupVersionKind,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<DynamicObject>>> + Send;
}

#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    #[tracing::instrument]
    pub async fn from_kubeconfig(context: Option<String>) -> Result<Self> {
        let options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };
        let config = Config::from_kubeconfig(&options).await?;
        let client = Client::try_from(config)?;
        Ok(Self::new(client))
    }

    fn api(&self, gvk: &GroupVersionKind, namespace: &str) -> Api<DynamicObject> {
        // Velero plurals follow the default kind + "s" rule, no discovery round trip needed.
        let ar = ApiResource::from_gvk(gvk);
        if namespace.is_empty() {
            Api::all_with(self.client.clone(), &ar)
        } else {
            Api::namespaced_with(self.client.clone(), namespace, &ar)
        }
    }
}

impl ObjectStore for KubeStore {
    fn list(
        &self,
        gvk: &GroupVersionKind,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<DynamicObject>>> + Send {
        let api = self.api(gvk, namespace);
        let resource = format!("{}/{}, Kind={}", gvk.group, gvk.version, gvk.kind);
        let namespace = namespace.to_string();

        async move {
            api.list(&ListParams::default())
                .await
                .map(|list| list.items)
                .map_err(|e| Error::Listing {
                    resource,
                    namespace,
                    reason: e.to_string(),
                })
        }
    }
}
