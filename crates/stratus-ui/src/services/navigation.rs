//! Hard-navigation executors and service-worker teardown.
//!
//! # Design
//! - Callers decide *which* [`HardNavigation`] applies (pure logic);
//!   this module only performs it.
//! - Everything here is best-effort: a failed `location` call leaves the
//!   user on the current page, so failures are logged and swallowed.

use crate::logic::HardNavigation;
use gloo::console;
use gloo::utils::window;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// Perform a full-document navigation effect.
pub fn execute(nav: HardNavigation) {
    let location = window().location();
    let result = match nav {
        HardNavigation::ReplaceRoot => location.replace("/"),
        HardNavigation::Reload => location.reload(),
        // Forced variant asks the browser to bypass its HTTP cache so a new
        // deployment is picked up immediately.
        HardNavigation::ForceReload => location.reload_with_forceget(true),
    };
    if let Err(err) = result {
        console::error!("hard navigation failed", err);
    }
}

/// Unregister the active service worker, if any.
///
/// Used by the check-for-updates flow so the forced reload that follows is
/// served by the network instead of a stale worker. Absence of a worker (or
/// of service-worker support) is not an error.
pub async fn unregister_service_worker() {
    let container = window().navigator().service_worker();
    match JsFuture::from(container.get_registration()).await {
        Ok(value) => {
            // `get_registration` resolves to undefined when no worker is
            // registered for this scope.
            if let Ok(registration) = value.dyn_into::<ServiceWorkerRegistration>() {
                if let Err(err) = JsFuture::from(registration.unregister()).await {
                    console::error!("service worker unregister failed", err);
                }
            }
        }
        Err(err) => console::error!("service worker lookup failed", err),
    }
}
