//! Shared view models for the client.
//!
//! # Design
//! - Keep these as plain data so every consumer (components, shell, tests)
//!   can construct and compare them without wasm.
//! - API failures carry the HTTP status so call sites can branch on gate
//!   codes without re-parsing transport errors.

use stratus_api_models::CurrentUser;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Short display title for the toast.
    pub title: String,
    /// Optional longer description rendered under the title.
    pub description: Option<String>,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Externally-supplied current-user input for the settings screen.
///
/// The shell owns the fetch; the screen only reads the phase. `Failed` means
/// the `GET /users/me` call errored, which in practice means the session is
/// absent or expired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Fetch outstanding; render a loading card.
    Loading,
    /// Profile available.
    Ready(CurrentUser),
    /// Fetch failed; the caller must route to the login screen.
    Failed,
}

/// Structured failure from an API call.
///
/// `status` is the HTTP status code, or `0` when the request never produced a
/// response (network/transport error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status code, `0` for transport errors.
    pub status: u16,
    /// Best-available human-readable message.
    pub message: String,
}

impl ApiFailure {
    /// Failure from a non-2xx HTTP response.
    #[must_use]
    pub const fn status(status: u16, message: String) -> Self {
        Self { status, message }
    }

    /// Failure before any HTTP response arrived.
    #[must_use]
    pub const fn transport(message: String) -> Self {
        Self { status: 0, message }
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            write!(f, "request failed: {}", self.message)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiFailure {}

#[cfg(test)]
mod tests {
    use super::ApiFailure;

    #[test]
    fn display_distinguishes_transport_from_status() {
        let transport = ApiFailure::transport("connection refused".into());
        assert_eq!(transport.to_string(), "request failed: connection refused");
        let gated = ApiFailure::status(402, "payment required".into());
        assert_eq!(gated.to_string(), "HTTP 402: payment required");
    }
}
