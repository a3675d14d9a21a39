#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Stratus web client.
//!
//! Browser front-end (wasm32) for the Stratus file-sharing service, currently
//! centered on the account-settings screen. All persistence, authentication,
//! and validation happen on the API server; this crate renders state, issues
//! HTTP calls, and reacts to the responses.
//!
//! Pure view logic (session directives, save-outcome mapping, form
//! validation, navigation effects) lives in non-wasm modules so it runs under
//! native `cargo test`; DOM, network, and router code is gated behind
//! `target_arch = "wasm32"`.

pub mod logic;
pub mod models;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
