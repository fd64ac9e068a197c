use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use futures::future::join_all;
use k8s_openapi::serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::component::{Capabilities, ContentResponse, Navigation, Table};
use crate::error::{Error, Result};
use crate::processors::VeleroKind;
use crate::store::ObjectStore;
use crate::structs::{ActionRequest, ContentRequest, NavigationRequest};

pub const PLUGIN_NAME: &str = "velero.io/octant-plugin";
pub const PLUGIN_DESCRIPTION: &str = "Velero Dashboard Plugin";
pub const DASHBOARD_TITLE: &str = "Velero Dashboard";
pub const DASHBOARD_ROUTE: &str = "velero-dashboard";
pub const DASHBOARD_ICON: &str = "cloud";

pub const SET_NAMESPACE_ACTION: &str = "action.octant.dev/setNamespace";
pub const DELETE_ACTION: &str = "velero.io/backupDelete";

/// Host-facing side of the plugin. The only mutable state is the namespace
/// the user last selected in the host.
#[derive(Debug)]
pub struct VeleroPlugin<S> {
    store: S,
    current_namespace: RwLock<String>,
}

impl<S: ObjectStore> VeleroPlugin<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current_namespace: RwLock::new(String::new()),
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            is_module: true,
            action_names: vec![SET_NAMESPACE_ACTION.into(), DELETE_ACTION.into()],
        }
    }

    pub fn set_namespace(&self, namespace: impl Into<String>) {
        let mut guard = self
            .current_namespace
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = namespace.into();
    }

    pub fn current_namespace(&self) -> String {
        self.current_namespace
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[tracing::instrument(skip(self))]
    pub fn handle_action(&self, request: &ActionRequest) -> Result<()> {
        match request.action_name.as_str() {
            SET_NAMESPACE_ACTION => {
                let namespace = payload_string(&request.payload, "namespace")?;
                info!(%namespace, "namespace changed");
                self.set_namespace(namespace);
                Ok(())
            }
            DELETE_ACTION => {
                // TODO: submit the delete to the store once confirmation and
                // progress reporting for deletions are settled.
                info!(payload = %request.payload, "delete requested, not implemented");
                Ok(())
            }
            other => Err(Error::UnregisteredAction {
                action: other.to_string(),
                plugin: PLUGIN_NAME,
            }),
        }
    }

    pub fn navigation(&self, request: &NavigationRequest) -> Navigation {
        Navigation {
            title: DASHBOARD_TITLE.into(),
            path: request.generate_path(DASHBOARD_ROUTE),
            icon_name: DASHBOARD_ICON.into(),
            children: Vec::new(),
        }
    }

    /// One table per kind, in display order. Listing failures leave the
    /// affected table empty and never fail the response. Once
    /// `request.timeout_ms` elapses, or `cancel` fires, listings still in
    /// flight are abandoned.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn build_content(
        &self,
        request: &ContentRequest,
        cancel: &CancellationToken,
    ) -> ContentResponse {
        let namespace = self.current_namespace();
        let deadline = cancel.child_token();

        let tables = join_all(
            VeleroKind::ALL
                .iter()
                .map(|kind| self.build_table(*kind, &namespace, &deadline)),
        );
        let timer = async {
            match request.timeout_ms {
                Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(tables, timer);

        let tables = loop {
            tokio::select! {
                tables = &mut tables => break tables,
                _ = &mut timer, if !deadline.is_cancelled() => {
                    warn!(timeout_ms = request.timeout_ms, "content request timed out");
                    deadline.cancel();
                }
            }
        };

        let mut response = ContentResponse::new(DASHBOARD_TITLE);
        response.add(tables);
        response
    }

    async fn build_table(
        &self,
        kind: VeleroKind,
        namespace: &str,
        cancel: &CancellationToken,
    ) -> Table {
        let mut table = Table::new(kind.table_title(), kind.placeholder(), kind.columns());
        let gvk = kind.gvk();

        let listed = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Listing {
                resource: gvk.kind.clone(),
                namespace: namespace.to_string(),
                reason: "request cancelled".into(),
            }),
            res = self.store.list(&gvk, namespace) => res,
        };

        match listed {
            Ok(items) => {
                for row in kind.process(&items) {
                    table.add(row);
                }
            }
            Err(e) => warn!(%kind, error = %e, "listing failed"),
        }

        table
    }
}

fn payload_string(payload: &Value, key: &str) -> Result<String> {
    match payload.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(Error::Payload(format!(
            "{key} must be a string, got {other}"
        ))),
        None => Err(Error::Payload(format!("missing field {key}"))),
    }
}
