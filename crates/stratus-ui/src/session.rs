//! Pure session-phase helpers for the settings screen.
//!
//! # Design
//! - The screen never fetches the current user itself; it interprets the
//!   phase the shell hands it and nothing else.
//! - A failed session fetch is indistinguishable from "not signed in" at this
//!   layer, so both collapse into a login redirect.

use crate::models::SessionPhase;
use stratus_api_models::{Plan, Theme};

/// What the settings screen should render for a given session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionDirective {
    /// Session fetch outstanding; render the loading card.
    ShowLoading,
    /// Profile available; render the settings content.
    ShowSettings,
    /// Session absent; route (client-side) to the login screen.
    RedirectLogin,
}

/// Map a session phase to a render directive.
#[must_use]
pub const fn session_directive(phase: &SessionPhase) -> SessionDirective {
    match phase {
        SessionPhase::Loading => SessionDirective::ShowLoading,
        SessionPhase::Ready(_) => SessionDirective::ShowSettings,
        SessionPhase::Failed => SessionDirective::RedirectLogin,
    }
}

/// Seed value for the expandable-rows switch.
///
/// `None` while the profile has not arrived; the switch stays unchecked and
/// disabled until then.
#[must_use]
pub const fn initial_toggle(phase: &SessionPhase) -> Option<bool> {
    match phase {
        SessionPhase::Ready(me) => Some(me.user.settings.expandable_rows),
        SessionPhase::Loading | SessionPhase::Failed => None,
    }
}

/// Whether the dark-mode switch renders checked.
#[must_use]
pub const fn dark_mode_checked(phase: &SessionPhase) -> bool {
    match phase {
        SessionPhase::Ready(me) => matches!(me.user.settings.theme, Theme::Dark),
        SessionPhase::Loading | SessionPhase::Failed => false,
    }
}

/// Whether the account carries the premium badge.
#[must_use]
pub const fn is_premium(phase: &SessionPhase) -> bool {
    match phase {
        SessionPhase::Ready(me) => matches!(me.user.plan, Plan::Premium),
        SessionPhase::Loading | SessionPhase::Failed => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratus_api_models::{CurrentUser, Plan, Theme, UserProfile, UserSettings};

    fn ready(plan: Plan, expandable_rows: bool, theme: Theme) -> SessionPhase {
        SessionPhase::Ready(CurrentUser {
            user: UserProfile {
                name: "Ada Lovelace".into(),
                username: "ada".into(),
                plan,
                settings: UserSettings {
                    expandable_rows,
                    theme,
                },
            },
        })
    }

    #[test]
    fn loading_shows_loading_card() {
        assert_eq!(
            session_directive(&SessionPhase::Loading),
            SessionDirective::ShowLoading
        );
        assert_eq!(initial_toggle(&SessionPhase::Loading), None);
    }

    #[test]
    fn failed_session_redirects_to_login() {
        assert_eq!(
            session_directive(&SessionPhase::Failed),
            SessionDirective::RedirectLogin
        );
    }

    #[test]
    fn ready_seeds_toggle_from_profile() {
        let phase = ready(Plan::Free, true, Theme::Light);
        assert_eq!(session_directive(&phase), SessionDirective::ShowSettings);
        assert_eq!(initial_toggle(&phase), Some(true));
        assert!(!dark_mode_checked(&phase));
    }

    #[test]
    fn dark_theme_checks_the_switch() {
        assert!(dark_mode_checked(&ready(Plan::Free, false, Theme::Dark)));
    }

    #[test]
    fn premium_badge_follows_plan() {
        assert!(is_premium(&ready(Plan::Premium, false, Theme::Light)));
        assert!(!is_premium(&ready(Plan::Free, false, Theme::Light)));
        assert!(!is_premium(&SessionPhase::Loading));
    }
}
