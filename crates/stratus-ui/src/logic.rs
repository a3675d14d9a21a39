//! Pure settings-screen logic extracted from components for non-wasm testing.
//!
//! # Design
//! - Every user action resolves to data first (a patch, a notice, a
//!   navigation effect); components only execute what this module decides.
//! - Hard navigations (full document reload/replace) are explicit values,
//!   distinct from client-side route transitions, because they reset all
//!   in-memory state.

use crate::models::{ApiFailure, SessionPhase, ToastKind};
use stratus_api_models::{DeleteAccountRequest, SettingsPatch, Theme};

/// Confirmation phrase shown next to the deletion agreement field.
///
/// Displayed as guidance only: the submitted agreement is required to be
/// non-empty but is not matched against this phrase, mirroring the deployed
/// behavior of the screen.
pub const CONFIRM_PHRASE: &str = "permanently removed";

/// API endpoint paths used by the settings screen.
pub mod paths {
    /// Deployed version string.
    pub const VERSION: &str = "/utils/version";
    /// Authenticated user's profile envelope.
    pub const CURRENT_USER: &str = "/users/me";
    /// Partial preference update.
    pub const SETTINGS: &str = "/users/me/settings";
    /// Session teardown.
    pub const LOGOUT: &str = "/auth/logout";
    /// Account removal.
    pub const DELETE_ACCOUNT: &str = "/users/me/delete";
}

/// Absolute URL for the account avatar image.
#[must_use]
pub fn photo_url(base_url: &str) -> String {
    format!("{}/users/me/photo", base_url.trim_end_matches('/'))
}

/// Which preference a save request touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    /// The expandable-rows switch.
    ExpandableRows,
    /// The dark-mode switch.
    Theme,
}

/// Result classification for a settings save.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Server accepted the patch.
    Saved,
    /// Server rejected the patch with the plan gate (HTTP 402).
    PremiumRequired,
    /// Any other failure.
    Failed,
}

/// Classify a settings-save response.
#[must_use]
pub const fn save_outcome(result: &Result<(), ApiFailure>) -> SaveOutcome {
    match result {
        Ok(()) => SaveOutcome::Saved,
        Err(failure) if failure.status == 402 => SaveOutcome::PremiumRequired,
        Err(_) => SaveOutcome::Failed,
    }
}

/// User-facing notification content, independent of the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity classification.
    pub kind: ToastKind,
    /// Short display title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
}

/// Notification for a settings-save outcome.
#[must_use]
pub fn toast_for_save(outcome: SaveOutcome) -> Notice {
    match outcome {
        SaveOutcome::Saved => Notice {
            kind: ToastKind::Success,
            title: "Settings saved".into(),
            description: None,
        },
        SaveOutcome::PremiumRequired => Notice {
            kind: ToastKind::Error,
            title: "Premium Feature".into(),
            description: Some("Please upgrade your plan to use this feature".into()),
        },
        SaveOutcome::Failed => Notice {
            kind: ToastKind::Error,
            title: "Something went wrong. Please try again.".into(),
            description: None,
        },
    }
}

/// Notification for a failed account deletion; surfaces the server message
/// verbatim.
#[must_use]
pub fn toast_for_deletion_failure(failure: &ApiFailure) -> Notice {
    Notice {
        kind: ToastKind::Error,
        title: "Error".into(),
        description: Some(failure.message.clone()),
    }
}

/// Full-document navigation effects, as opposed to client-side routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardNavigation {
    /// `location.replace("/")` — leave the app entirely.
    ReplaceRoot,
    /// `location.reload()` — re-boot the app with current caches.
    Reload,
    /// Forced reload bypassing HTTP caches, after dropping the service
    /// worker.
    ForceReload,
}

/// Navigation required after a settings save settles.
///
/// A theme change only takes effect through a full re-render of the document
/// (styles are applied at boot), so a successful dark-mode save reloads the
/// page. The expandable-rows flag is picked up by the next profile refresh
/// and never navigates.
#[must_use]
pub const fn after_save(field: SettingsField, outcome: SaveOutcome) -> Option<HardNavigation> {
    match (field, outcome) {
        (SettingsField::Theme, SaveOutcome::Saved) => Some(HardNavigation::Reload),
        _ => None,
    }
}

/// Patch for the dark-mode switch position.
#[must_use]
pub const fn dark_mode_patch(enabled: bool) -> SettingsPatch {
    SettingsPatch::theme(if enabled { Theme::Dark } else { Theme::Light })
}

/// Local state of the expandable-rows switch across save round-trips.
///
/// The switch updates optimistically: [`ToggleState::request`] records the
/// requested value before the PATCH is issued, and nothing reverts it when
/// the save fails — the value only changes again on the next seed from a
/// profile refresh. This mirrors the deployed screen's behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    value: Option<bool>,
}

impl ToggleState {
    /// Unseeded state: switch renders unchecked and disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Re-seed from the externally-owned profile when it (re)arrives.
    pub const fn seed(&mut self, phase: &SessionPhase) {
        if let Some(value) = crate::session::initial_toggle(phase) {
            self.value = Some(value);
        }
    }

    /// Optimistically record the requested value and build the patch for it.
    pub const fn request(&mut self, value: bool) -> SettingsPatch {
        self.value = Some(value);
        SettingsPatch::expandable_rows(value)
    }

    /// Current switch position; `None` until a profile has been seen.
    #[must_use]
    pub const fn value(&self) -> Option<bool> {
        self.value
    }
}

/// Per-field validation failures for the deletion form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeleteFormErrors {
    /// The reason field was empty.
    pub reason_required: bool,
    /// The agreement field was empty.
    pub agreement_required: bool,
}

/// Validate the deletion form.
///
/// Both fields must be non-empty after trimming. The agreement is *not*
/// compared against [`CONFIRM_PHRASE`]; any non-empty text passes.
///
/// # Errors
/// Returns [`DeleteFormErrors`] flagging each empty field.
pub fn validate_deletion(
    reason: &str,
    agreement: &str,
) -> Result<DeleteAccountRequest, DeleteFormErrors> {
    let errors = DeleteFormErrors {
        reason_required: reason.trim().is_empty(),
        agreement_required: agreement.trim().is_empty(),
    };
    if errors.reason_required || errors.agreement_required {
        return Err(errors);
    }
    Ok(DeleteAccountRequest {
        agreement: agreement.trim().to_string(),
        reason: reason.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_api_models::{CurrentUser, Plan, SettingsPatchBody, UserProfile, UserSettings};

    fn ready(expandable_rows: bool) -> SessionPhase {
        SessionPhase::Ready(CurrentUser {
            user: UserProfile {
                name: "Ada Lovelace".into(),
                username: "ada".into(),
                plan: Plan::Free,
                settings: UserSettings {
                    expandable_rows,
                    theme: Theme::Light,
                },
            },
        })
    }

    #[test]
    fn toggle_request_is_optimistic_and_builds_one_patch() {
        let mut state = ToggleState::new();
        state.seed(&ready(false));
        let patch = state.request(true);
        assert_eq!(state.value(), Some(true));
        assert_eq!(
            patch,
            SettingsPatch {
                settings: SettingsPatchBody {
                    expandable_rows: Some(true),
                    theme: None,
                },
            }
        );
    }

    #[test]
    fn failed_save_keeps_optimistic_value() {
        // Deliberate: there is no revert path. After a failed save the switch
        // stays where the user put it until the next profile seed.
        let mut state = ToggleState::new();
        state.seed(&ready(false));
        let _patch = state.request(true);
        let outcome = save_outcome(&Err(ApiFailure::status(402, "payment required".into())));
        assert_eq!(outcome, SaveOutcome::PremiumRequired);
        assert_eq!(state.value(), Some(true));
    }

    #[test]
    fn reseed_overwrites_local_value() {
        let mut state = ToggleState::new();
        let _patch = state.request(true);
        state.seed(&ready(false));
        assert_eq!(state.value(), Some(false));
    }

    #[test]
    fn seed_ignores_loading_and_failed_phases() {
        let mut state = ToggleState::new();
        state.seed(&SessionPhase::Loading);
        state.seed(&SessionPhase::Failed);
        assert_eq!(state.value(), None);
    }

    #[test]
    fn outcome_classification_maps_the_premium_gate() {
        assert_eq!(save_outcome(&Ok(())), SaveOutcome::Saved);
        assert_eq!(
            save_outcome(&Err(ApiFailure::status(402, "gated".into()))),
            SaveOutcome::PremiumRequired
        );
        assert_eq!(
            save_outcome(&Err(ApiFailure::status(500, "boom".into()))),
            SaveOutcome::Failed
        );
        assert_eq!(
            save_outcome(&Err(ApiFailure::transport("offline".into()))),
            SaveOutcome::Failed
        );
    }

    #[test]
    fn premium_gate_toast_is_titled_premium_feature() {
        let notice = toast_for_save(SaveOutcome::PremiumRequired);
        assert_eq!(notice.kind, ToastKind::Error);
        assert_eq!(notice.title, "Premium Feature");
        assert!(notice.description.is_some());
    }

    #[test]
    fn save_toasts_cover_all_outcomes() {
        assert_eq!(toast_for_save(SaveOutcome::Saved).kind, ToastKind::Success);
        assert_eq!(toast_for_save(SaveOutcome::Failed).kind, ToastKind::Error);
    }

    #[test]
    fn deletion_failure_surfaces_server_message_verbatim() {
        let failure = ApiFailure::status(400, "Invalid deletion request".into());
        let notice = toast_for_deletion_failure(&failure);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.description.as_deref(), Some("Invalid deletion request"));
    }

    #[test]
    fn dark_mode_save_reloads_only_on_success() {
        assert_eq!(
            after_save(SettingsField::Theme, SaveOutcome::Saved),
            Some(HardNavigation::Reload)
        );
        assert_eq!(after_save(SettingsField::Theme, SaveOutcome::Failed), None);
        assert_eq!(
            after_save(SettingsField::ExpandableRows, SaveOutcome::Saved),
            None
        );
    }

    #[test]
    fn dark_mode_patch_maps_switch_position_to_theme() {
        assert_eq!(
            dark_mode_patch(true).settings.theme,
            Some(Theme::Dark)
        );
        assert_eq!(dark_mode_patch(false).settings.theme, Some(Theme::Light));
        assert_eq!(dark_mode_patch(true).settings.expandable_rows, None);
    }

    #[test]
    fn deletion_requires_both_fields() {
        let err = validate_deletion("", "").unwrap_err();
        assert!(err.reason_required);
        assert!(err.agreement_required);
        let err = validate_deletion("too slow", " ").unwrap_err();
        assert!(!err.reason_required);
        assert!(err.agreement_required);
    }

    #[test]
    fn agreement_accepts_any_non_empty_phrase() {
        // Decision: the confirmation phrase is displayed but not enforced,
        // matching the deployed screen. "whatever" passes even though the UI
        // asks for "permanently removed".
        let request = validate_deletion("too slow", "whatever").unwrap();
        assert_eq!(request.agreement, "whatever");
        assert_eq!(request.reason, "too slow");
        assert_ne!(request.agreement, CONFIRM_PHRASE);
    }

    #[test]
    fn deletion_fields_are_trimmed() {
        let request = validate_deletion("  reason  ", " permanently removed ").unwrap();
        assert_eq!(request.reason, "reason");
        assert_eq!(request.agreement, CONFIRM_PHRASE);
    }

    #[test]
    fn photo_url_tolerates_trailing_slash() {
        assert_eq!(photo_url("http://x"), "http://x/users/me/photo");
        assert_eq!(photo_url("http://x/"), "http://x/users/me/photo");
    }
}
