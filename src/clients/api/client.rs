//! API client orchestrating token acquisition and resource reads.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::auth::oauth::{fetch_access_token, AuthError};
use crate::clients::api::ClientError;
use crate::clients::normalize::{normalize_error, NormalizedError};
use crate::clients::Transport;
use crate::config::ClientConfig;
use crate::rest::{build_resource_path, QueryOptions, ResourceId, ResourceQuery};

/// Observable lifecycle state of an [`ApiClient`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadinessState {
    /// The access token has not been obtained yet.
    Initializing,
    /// The transport is available; `get` can be used.
    Ready,
    /// The token fetch failed; the client will never become ready.
    Failed,
}

/// Write-once lifecycle cell contents.
#[derive(Clone, Debug)]
enum Readiness {
    Initializing,
    Ready(Arc<Transport>),
    Failed(AuthError),
}

impl Readiness {
    const fn state(&self) -> ReadinessState {
        match self {
            Self::Initializing => ReadinessState::Initializing,
            Self::Ready(_) => ReadinessState::Ready,
            Self::Failed(_) => ReadinessState::Failed,
        }
    }
}

/// Client for a client-credentials protected REST resource API.
///
/// On initialization the client fetches one access token and builds one
/// [`Transport`] bound to it. That transition happens exactly once; the token
/// is never refreshed. Clones share the same lifecycle and transport.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use resource_api::{ApiClient, ClientConfig};
/// use resource_api::rest::QueryOptions;
///
/// let client = ApiClient::connect(ClientConfig::from_env()?).await?;
///
/// let people = client
///     .get("people", None, Some(&QueryOptions::new().page_size(50)))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    state: watch::Receiver<Readiness>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client and starts fetching the access token in the background.
    ///
    /// Returns immediately. Until the fetch completes, [`ApiClient::get`]
    /// fails with [`ClientError::NotReady`]. A failed fetch is logged and
    /// leaves the client in [`ReadinessState::Failed`].
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let (sender, state) = watch::channel(Readiness::Initializing);

        tokio::spawn(async move {
            let outcome = Self::initialize(&config).await;
            sender.send_replace(outcome);
        });

        Self { state }
    }

    /// Creates a client and waits for initialization to finish.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InitializationFailed`] if the access token could
    /// not be obtained.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        match Self::initialize(&config).await {
            Readiness::Failed(error) => Err(ClientError::InitializationFailed(error)),
            outcome => {
                let (_sender, state) = watch::channel(outcome);
                Ok(Self { state })
            }
        }
    }

    async fn initialize(config: &ClientConfig) -> Readiness {
        match fetch_access_token(config.token_endpoint(), config.credentials()).await {
            Ok(token) => {
                let transport = Transport::from_config(&token, config);
                tracing::debug!(
                    "Access token obtained; transport ready for {}",
                    config.api_base_url()
                );
                Readiness::Ready(Arc::new(transport))
            }
            Err(error) => {
                tracing::error!(
                    "Failed to obtain access token from {}: {}",
                    config.token_endpoint(),
                    error
                );
                Readiness::Failed(error)
            }
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ReadinessState {
        self.state.borrow().state()
    }

    /// Waits until initialization has finished.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InitializationFailed`] if the token fetch failed
    /// - [`ClientError::InitializationAborted`] if the background task ended
    ///   without reporting (e.g., the runtime shut down)
    pub async fn wait_until_ready(&self) -> Result<(), ClientError> {
        let mut state = self.state.clone();
        let outcome = state
            .wait_for(|s| !matches!(s, Readiness::Initializing))
            .await
            .map(|s| (*s).clone());

        match outcome {
            Ok(Readiness::Ready(_)) => Ok(()),
            Ok(Readiness::Failed(error)) => Err(ClientError::InitializationFailed(error)),
            Ok(Readiness::Initializing) | Err(_) => Err(ClientError::InitializationAborted),
        }
    }

    /// Returns the transport if the client is ready.
    ///
    /// The readiness check happens synchronously, before any request is sent.
    fn transport(&self) -> Result<Arc<Transport>, ClientError> {
        match &*self.state.borrow() {
            Readiness::Ready(transport) => Ok(Arc::clone(transport)),
            Readiness::Initializing => Err(ClientError::NotReady),
            Readiness::Failed(error) => Err(ClientError::InitializationFailed(error.clone())),
        }
    }

    /// Reads a resource.
    ///
    /// Builds the request path with [`build_resource_path`] and issues a GET
    /// through the bound transport. The returned value has already been
    /// through the response-transform pipeline.
    ///
    /// Errors are not normalized; use [`ApiClient::normalize_error`] for that.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotReady`] if the access token has not been obtained yet
    /// - [`ClientError::InitializationFailed`] if it could not be obtained
    /// - [`ClientError::Http`] for transport failures
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // GET people
    /// let all = client.get("people", None, None).await?;
    ///
    /// // GET people/42?expansions=address&pagesize=1000
    /// let options = QueryOptions::new().expansions(["address"]);
    /// let one = client.get("people", Some(42.into()), Some(&options)).await?;
    /// ```
    pub async fn get(
        &self,
        resource_path: &str,
        id: Option<ResourceId>,
        options: Option<&QueryOptions>,
    ) -> Result<Value, ClientError> {
        let transport = self.transport()?;
        let path = build_resource_path(resource_path, id.as_ref(), options);
        Ok(transport.get(&path).await?)
    }

    /// Reads a resource described by a [`ResourceQuery`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`].
    pub async fn get_query(&self, query: &ResourceQuery) -> Result<Value, ClientError> {
        let transport = self.transport()?;
        Ok(transport.get(&query.to_path()).await?)
    }

    /// Normalizes an error into a single inspectable shape.
    ///
    /// Equivalent to [`normalize_error`]; usable without an instance.
    #[must_use]
    pub fn normalize_error(error: impl Into<ClientError>, prepend: Option<&str>) -> NormalizedError {
        normalize_error(error, prepend)
    }
}
