//! HTTP client helpers (REST).

use crate::logic::paths;
use crate::models::ApiFailure;
use gloo_net::http::{Request, Response};
use stratus_api_models::{CurrentUser, DeleteAccountRequest, ErrorBody, SettingsPatch, VersionInfo};
use web_sys::RequestCredentials;

/// Thin REST client for the Stratus API.
///
/// Session cookies carry authentication, so every request rides with
/// `credentials: include`; no token handling happens in the client.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Origin of the API server, without a trailing slash.
    pub base_url: String,
}

impl ApiClient {
    /// Create a client against the given API origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let resp = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if !resp.ok() {
            anyhow::bail!("GET {path} returned {}", resp.status());
        }
        Ok(resp.json::<T>().await?)
    }

    /// Fetch the authenticated user's profile envelope.
    ///
    /// # Errors
    /// Fails on transport errors or any non-2xx status; callers treat any
    /// failure as "no usable session".
    pub async fn fetch_me(&self) -> anyhow::Result<CurrentUser> {
        self.get_json(paths::CURRENT_USER).await
    }

    /// Fetch the deployed version string.
    ///
    /// # Errors
    /// Fails on transport errors or any non-2xx status.
    pub async fn fetch_version(&self) -> anyhow::Result<VersionInfo> {
        self.get_json(paths::VERSION).await
    }

    /// Apply a partial settings update.
    ///
    /// # Errors
    /// Returns an [`ApiFailure`] carrying the HTTP status for non-2xx
    /// responses (402 signals the premium gate) or status 0 for transport
    /// errors.
    pub async fn patch_settings(&self, patch: &SettingsPatch) -> Result<(), ApiFailure> {
        let resp = Request::patch(&self.url(paths::SETTINGS))
            .credentials(RequestCredentials::Include)
            .json(patch)?
            .send()
            .await?;
        check_status(resp).await
    }

    /// Tear down the server-side session.
    ///
    /// # Errors
    /// Returns an [`ApiFailure`] on transport errors or non-2xx responses.
    /// The settings screen intentionally only logs these.
    pub async fn logout(&self) -> Result<(), ApiFailure> {
        let resp = Request::post(&self.url(paths::LOGOUT))
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        check_status(resp).await
    }

    /// Request permanent account removal.
    ///
    /// # Errors
    /// Returns an [`ApiFailure`] whose message is the server-provided error
    /// text verbatim for non-2xx responses, or status 0 for transport errors.
    pub async fn delete_account(&self, request: &DeleteAccountRequest) -> Result<(), ApiFailure> {
        let resp = Request::post(&self.url(paths::DELETE_ACCOUNT))
            .credentials(RequestCredentials::Include)
            .json(request)?
            .send()
            .await?;
        check_status(resp).await
    }
}

impl From<gloo_net::Error> for ApiFailure {
    fn from(err: gloo_net::Error) -> Self {
        Self::transport(err.to_string())
    }
}

/// Map a non-2xx response into an [`ApiFailure`], preferring the server's
/// `{"error": ...}` body over the bare status text.
async fn check_status(resp: Response) -> Result<(), ApiFailure> {
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => resp.status_text(),
    };
    Err(ApiFailure::status(status, message))
}
