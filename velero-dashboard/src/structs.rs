use k8s_openapi::serde_json::Value;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct PluginOptions {
    /// Kubeconfig context; the current context when unset.
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub action_name: String,
    #[serde(default)]
    pub payload: Value,
}

impl ActionRequest {
    pub fn new(action_name: impl Into<String>, payload: Value) -> Self {
        Self {
            action_name: action_name.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct NavigationRequest {
    /// Route prefix the host mounts this plugin under.
    pub base_path: String,
}

impl NavigationRequest {
    pub fn generate_path(&self, route: &str) -> String {
        format!("{}/{}", self.base_path.trim_end_matches('/'), route)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContentRequest {
    pub path: String,
    /// Deadline for the whole request; listings still running are abandoned.
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::serde_json::{self, json};

    #[test]
    fn test_generate_path() {
        let req = NavigationRequest {
            base_path: "/plugins/velero/".into(),
        };
        assert_eq!(req.generate_path("velero-dashboard"), "/plugins/velero/velero-dashboard");
        assert_eq!(
            NavigationRequest::default().generate_path("velero-dashboard"),
            "/velero-dashboard"
        );
    }

    #[test]
    fn test_action_request_defaults_payload() {
        let req: ActionRequest =
            serde_json::from_value(json!({ "action_name": "velero.io/backupDelete" })).unwrap();
        assert!(req.payload.is_null());
    }
}
