//! Environment helpers for the app shell.

use gloo::utils::window;
use web_sys::Url;

/// Derive the API origin from the current document location.
///
/// In development the UI is served by Trunk on port 8080 while the API
/// listens on 3000; in production both sit behind the same origin.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("3000"),
            other => Some(other),
        };

        let mut base = format!("{}//{}", protocol, host);
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:3000".to_string()
}
