use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::components::account_delete::DeleteAccountModal;
use crate::components::modal::Modal;
use crate::logic::{
    HardNavigation, Notice, SaveOutcome, SettingsField, ToggleState, after_save, dark_mode_patch,
    photo_url, save_outcome, toast_for_deletion_failure, toast_for_save,
};
use crate::models::SessionPhase;
use crate::services::navigation;
use crate::session::{SessionDirective, dark_mode_checked, is_premium, session_directive};
use gloo::console;
use stratus_api_models::{DeleteAccountRequest, VersionInfo};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsPageProps {
    /// Externally-owned current-user input; the page never fetches it.
    pub phase: SessionPhase,
    /// Session-cached version string for the footer.
    pub version: Option<VersionInfo>,
    /// Ask the shell to re-fetch the current user.
    pub on_refresh: Callback<()>,
    /// Push a toast through the shell's host.
    pub on_notify: Callback<Notice>,
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page(props: &SettingsPageProps) -> Html {
    let Some(api) = use_context::<ApiCtx>() else {
        return html! {};
    };
    let toggle = use_state(ToggleState::new);
    let logout_open = use_state(|| false);
    let delete_open = use_state(|| false);
    let delete_busy = use_state(|| false);

    // Re-seed the switch whenever the profile (re)arrives, so a successful
    // save followed by the shell's refresh settles on the server-confirmed
    // value.
    {
        let toggle = toggle.clone();
        use_effect_with_deps(
            move |phase: &SessionPhase| {
                let mut next = *toggle;
                next.seed(phase);
                toggle.set(next);
                || ()
            },
            props.phase.clone(),
        );
    }

    let on_toggle_rows = {
        let toggle = toggle.clone();
        let api = api.clone();
        let on_refresh = props.on_refresh.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let mut next = *toggle;
            let patch = next.request(input.checked());
            toggle.set(next);
            let client = api.client.clone();
            let on_refresh = on_refresh.clone();
            let on_notify = on_notify.clone();
            yew::platform::spawn_local(async move {
                let outcome = save_outcome(&client.patch_settings(&patch).await);
                on_notify.emit(toast_for_save(outcome));
                if outcome == SaveOutcome::Saved {
                    on_refresh.emit(());
                }
            });
        })
    };

    let on_toggle_dark = {
        let api = api.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let patch = dark_mode_patch(input.checked());
            let client = api.client.clone();
            let on_notify = on_notify.clone();
            yew::platform::spawn_local(async move {
                let outcome = save_outcome(&client.patch_settings(&patch).await);
                on_notify.emit(toast_for_save(outcome));
                if let Some(nav) = after_save(SettingsField::Theme, outcome) {
                    navigation::execute(nav);
                }
            });
        })
    };

    let on_check_updates = Callback::from(move |_: MouseEvent| {
        yew::platform::spawn_local(async {
            navigation::unregister_service_worker().await;
            navigation::execute(HardNavigation::ForceReload);
        });
    });

    let on_logout_confirm = {
        let api = api.clone();
        Callback::from(move |_: MouseEvent| {
            let client = api.client.clone();
            yew::platform::spawn_local(async move {
                match client.logout().await {
                    Ok(()) => navigation::execute(HardNavigation::ReplaceRoot),
                    // No toast for this path: the action simply does not
                    // complete, matching the screen's unguarded logout.
                    Err(err) => console::error!("logout failed", err.to_string()),
                }
            });
        })
    };

    let on_delete_confirm = {
        let api = api.clone();
        let delete_busy = delete_busy.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |request: DeleteAccountRequest| {
            delete_busy.set(true);
            let client = api.client.clone();
            let delete_busy = delete_busy.clone();
            let on_notify = on_notify.clone();
            yew::platform::spawn_local(async move {
                match client.delete_account(&request).await {
                    Ok(()) => navigation::execute(HardNavigation::ReplaceRoot),
                    Err(failure) => {
                        on_notify.emit(toast_for_deletion_failure(&failure));
                        delete_busy.set(false);
                    }
                }
            });
        })
    };

    if session_directive(&props.phase) == SessionDirective::RedirectLogin {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let body = if let SessionPhase::Ready(me) = &props.phase {
        let avatar = photo_url(&api.client.base_url);
        html! {
            <section class="card">
                <header class="account">
                    <img class="avatar" src={avatar} alt="Account photo" />
                    <div>
                        <strong>{&me.user.name}</strong>
                        {if is_premium(&props.phase) {
                            html! { <span class="pill subtle" title="Premium plan">{"Premium"}</span> }
                        } else {
                            html! {}
                        }}
                        <p class="muted">{&me.user.username}</p>
                    </div>
                </header>
                <hr />
                <div class="setting-row">
                    <label for="expandable-rows">{"Expandable rows"}</label>
                    <input
                        id="expandable-rows"
                        type="checkbox"
                        class="toggle"
                        checked={toggle.value().unwrap_or(false)}
                        onchange={on_toggle_rows}
                    />
                </div>
                <div class="setting-row">
                    <label for="dark-mode">{"Dark mode"}</label>
                    <input
                        id="dark-mode"
                        type="checkbox"
                        class="toggle"
                        checked={dark_mode_checked(&props.phase)}
                        onchange={on_toggle_dark}
                    />
                </div>
                <div class="setting-row">
                    <span>{"Check updates"}</span>
                    <button class="btn btn-sm" onclick={on_check_updates}>{"Reload"}</button>
                </div>
                <div class="setting-row">
                    <span class="text-error">{"Delete account"}</span>
                    <button
                        class="btn btn-error btn-sm"
                        onclick={{
                            let delete_open = delete_open.clone();
                            Callback::from(move |_| delete_open.set(true))
                        }}
                    >
                        {"Delete"}
                    </button>
                </div>
                <hr />
                <div class="account-actions">
                    <button
                        class="btn btn-outline btn-error w-full"
                        onclick={{
                            let logout_open = logout_open.clone();
                            Callback::from(move |_| logout_open.set(true))
                        }}
                    >
                        {"Logout"}
                    </button>
                    <Link<Route> to={Route::Dashboard} classes={classes!("btn", "btn-ghost", "btn-sm", "w-full")}>
                        {"Back to dashboard"}
                    </Link<Route>>
                    {match &props.version {
                        Some(info) => html! { <p class="muted version">{format!("v{}", info.version)}</p> },
                        None => html! {},
                    }}
                </div>
            </section>
        }
    } else {
        html! {
            <section class="card loading" aria-busy="true">
                <p class="muted">{"Loading account…"}</p>
            </section>
        }
    };

    html! {
        <>
            <main class="settings-page">
                <h1>{"Settings"}</h1>
                {body}
            </main>

            <Modal open={*logout_open} on_close={{
                let logout_open = logout_open.clone();
                Callback::from(move |()| logout_open.set(false))
            }}>
                <div class="space-y-4">
                    <div>
                        <h3 class="text-lg font-semibold">{"Confirmation"}</h3>
                        <p class="text-sm muted">
                            {"Files you shared will no longer be downloadable once you sign out. Continue?"}
                        </p>
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            class="btn btn-ghost btn-sm"
                            onclick={{
                                let logout_open = logout_open.clone();
                                Callback::from(move |_| logout_open.set(false))
                            }}
                        >
                            {"Cancel"}
                        </button>
                        <button class="btn btn-error btn-sm" onclick={on_logout_confirm}>
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </Modal>

            <DeleteAccountModal
                open={*delete_open}
                busy={*delete_busy}
                on_confirm={on_delete_confirm}
                on_close={{
                    let delete_open = delete_open.clone();
                    Callback::from(move |()| delete_open.set(false))
                }}
            />
        </>
    }
}
