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
//! Shared HTTP DTOs for the Stratus public API.
//!
//! These types are the single source of truth for the wire contract between
//! the web client and the API server. Field names and enum spellings are
//! fixed by the server's JSON encoding; serde attributes below encode that
//! contract rather than Rust naming preferences.

use serde::{Deserialize, Serialize};

/// Subscription tier attached to a user account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    /// Default tier.
    Free,
    /// Paid tier; unlocks plan-gated preferences.
    Premium,
}

/// Color theme preference persisted with the account.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme.
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Per-account preference record, merged server-side on partial updates.
///
/// The server may omit either field for accounts that never touched it, so
/// both carry serde defaults.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    /// Whether file listings render with expandable rows.
    #[serde(default)]
    pub expandable_rows: bool,
    /// Persisted color theme.
    #[serde(default)]
    pub theme: Theme,
}

/// Public profile fields for the authenticated user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Unique handle.
    pub username: String,
    /// Subscription tier.
    pub plan: Plan,
    /// Preference record.
    #[serde(default)]
    pub settings: UserSettings,
}

/// Envelope returned by `GET /users/me`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// The authenticated user's profile.
    pub user: UserProfile,
}

/// Body for `PATCH /users/me/settings`.
///
/// Only the fields present in [`SettingsPatchBody`] are applied; the server
/// merges the patch into the stored record. `None` fields are omitted from
/// the serialized JSON so an absent field is distinguishable from an
/// explicit value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsPatch {
    /// The partial preference record to merge.
    pub settings: SettingsPatchBody,
}

/// Partial preference record carried by a [`SettingsPatch`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsPatchBody {
    /// New expandable-rows flag, when patching it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expandable_rows: Option<bool>,
    /// New theme, when patching it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl SettingsPatch {
    /// Patch that sets only the expandable-rows flag.
    #[must_use]
    pub const fn expandable_rows(value: bool) -> Self {
        Self {
            settings: SettingsPatchBody {
                expandable_rows: Some(value),
                theme: None,
            },
        }
    }

    /// Patch that sets only the theme.
    #[must_use]
    pub const fn theme(value: Theme) -> Self {
        Self {
            settings: SettingsPatchBody {
                expandable_rows: None,
                theme: Some(value),
            },
        }
    }
}

/// Payload of `GET /utils/version`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfo {
    /// Deployed application version string.
    pub version: String,
}

/// Body for `POST /users/me/delete`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteAccountRequest {
    /// Confirmation text typed by the user.
    pub agreement: String,
    /// Free-form reason for leaving.
    pub reason: String,
}

/// Error payload returned with non-2xx responses.
///
/// The `error` message is written for end users and is surfaced verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_envelope_matches_wire_shape() {
        let json = r#"{
            "user": {
                "name": "Ada Lovelace",
                "username": "ada",
                "plan": "premium",
                "settings": { "expandable_rows": true, "theme": "dark" }
            }
        }"#;
        let me: CurrentUser = serde_json::from_str(json).expect("envelope decodes");
        assert_eq!(me.user.name, "Ada Lovelace");
        assert_eq!(me.user.plan, Plan::Premium);
        assert!(me.user.settings.expandable_rows);
        assert_eq!(me.user.settings.theme, Theme::Dark);
    }

    #[test]
    fn settings_default_when_server_omits_fields() {
        let json = r#"{"user":{"name":"n","username":"u","plan":"free"}}"#;
        let me: CurrentUser = serde_json::from_str(json).expect("envelope decodes");
        assert!(!me.user.settings.expandable_rows);
        assert_eq!(me.user.settings.theme, Theme::Light);
    }

    #[test]
    fn expandable_rows_patch_omits_theme() {
        let body = serde_json::to_value(SettingsPatch::expandable_rows(true)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"settings": {"expandable_rows": true}})
        );
    }

    #[test]
    fn theme_patch_omits_expandable_rows() {
        let body = serde_json::to_value(SettingsPatch::theme(Theme::Dark)).unwrap();
        assert_eq!(body, serde_json::json!({"settings": {"theme": "dark"}}));
    }

    #[test]
    fn plans_and_themes_encode_lowercase() {
        assert_eq!(serde_json::to_value(Plan::Free).unwrap(), "free");
        assert_eq!(serde_json::to_value(Plan::Premium).unwrap(), "premium");
        assert_eq!(serde_json::to_value(Theme::Light).unwrap(), "light");
        assert_eq!(serde_json::to_value(Theme::Dark).unwrap(), "dark");
    }

    #[test]
    fn error_body_surfaces_server_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error":"Invalid deletion request"}"#).unwrap();
        assert_eq!(body.error, "Invalid deletion request");
    }
}
