use crate::app::api::ApiCtx;
use crate::components::settings::SettingsPage;
use crate::components::toast::ToastHost;
use crate::logic::Notice;
use crate::models::{SessionPhase, Toast};
use config::api_base_url;
pub(crate) use routes::Route;
use stratus_api_models::VersionInfo;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod config;
mod routes;

#[function_component(StratusApp)]
pub(crate) fn stratus_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let phase = use_state(|| SessionPhase::Loading);
    let version = use_state(|| None::<VersionInfo>);
    let toasts = use_state(Vec::<Toast>::new);
    let toast_id = use_state(|| 0u64);
    let session_epoch = use_state(|| 0u32);

    // The shell owns the current-user fetch; the settings screen only sees
    // the resulting phase. Bumping the epoch re-fetches (the `mutate`
    // equivalent) without dropping the last known profile while the request
    // is in flight.
    {
        let phase = phase.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_me().await {
                        Ok(me) => phase.set(SessionPhase::Ready(me)),
                        Err(_) => phase.set(SessionPhase::Failed),
                    }
                });
                || ()
            },
            *session_epoch,
        );
    }
    // Version string is immutable for the session: fetched once per boot,
    // never revalidated. A failed fetch just leaves the footer empty.
    {
        let version = version.clone();
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    if let Ok(info) = client.fetch_version().await {
                        version.set(Some(info));
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_refresh = {
        let session_epoch = session_epoch.clone();
        Callback::from(move |()| session_epoch.set(*session_epoch + 1))
    };
    let on_notify = {
        let toasts = toasts.clone();
        let toast_id = toast_id.clone();
        Callback::from(move |notice: Notice| push_toast(&toasts, &toast_id, notice))
    };
    let dismiss_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| {
            toasts.set(
                (*toasts)
                    .iter()
                    .cloned()
                    .filter(|toast| toast.id != id)
                    .collect(),
            );
        })
    };

    let phase_value = (*phase).clone();
    let version_value = (*version).clone();

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={move |route| {
                    match route {
                        Route::Home => html! { <Redirect<Route> to={Route::Settings} /> },
                        Route::Settings => html! {
                            <SettingsPage
                                phase={phase_value.clone()}
                                version={version_value.clone()}
                                on_refresh={on_refresh.clone()}
                                on_notify={on_notify.clone()}
                            />
                        },
                        Route::Login => html! {
                            <Placeholder title="Sign in" body="Sign in to manage your files and account." />
                        },
                        Route::Dashboard => html! {
                            <Placeholder title="Dashboard" body="Your files live here." />
                        },
                        Route::NotFound => html! {
                            <Placeholder title="Not found" body="Use navigation to return to a supported view." />
                        },
                    }
                }} />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss_toast} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    pub title: String,
    pub body: String,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

fn push_toast(toasts: &UseStateHandle<Vec<Toast>>, next_id: &UseStateHandle<u64>, notice: Notice) {
    let id = **next_id + 1;
    next_id.set(id);
    let mut list = (**toasts).clone();
    list.push(Toast {
        id,
        title: notice.title,
        description: notice.description,
        kind: notice.kind,
    });
    if list.len() > 4 {
        let drain = list.len() - 4;
        list.drain(0..drain);
    }
    toasts.set(list);
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StratusApp>::with_root(root).render();
    } else {
        yew::Renderer::<StratusApp>::new().render();
    }
}
