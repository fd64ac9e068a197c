use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The generic object does not have the shape of the expected Velero kind.
    #[error("unable to convert object to {kind}: {reason}")]
    Conversion { kind: String, reason: String },

    #[error("bad accessor {accessor:?}, no such resource kind")]
    UnknownAccessor { accessor: String },

    #[error("no action {action} registered for plugin {plugin}")]
    UnregisteredAction { action: String, plugin: &'static str },

    #[error("invalid action payload: {0}")]
    Payload(String),

    #[error("listing failed for {resource} in namespace {namespace:?}: {reason}")]
    Listing {
        resource: String,
        namespace: String,
        reason: String,
    },

    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error(transparent)]
    Kubeconfig(#[from] kube::config::KubeconfigError),
}

impl Error {
    pub(crate) fn conversion(kind: impl Into<String>, reason: impl ToString) -> Self {
        Self::Conversion {
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }
}
