use crate::components::modal::Modal;
use crate::logic::{CONFIRM_PHRASE, DeleteFormErrors, validate_deletion};
use stratus_api_models::DeleteAccountRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DeleteAccountModalProps {
    pub open: bool,
    pub busy: bool,
    pub on_confirm: Callback<DeleteAccountRequest>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteAccountModal)]
pub(crate) fn delete_account_modal(props: &DeleteAccountModalProps) -> Html {
    let reason = use_state(String::new);
    let agreement = use_state(String::new);
    let errors = use_state(DeleteFormErrors::default);

    {
        let reason = reason.clone();
        let agreement = agreement.clone();
        let errors = errors.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    reason.set(String::new());
                    agreement.set(String::new());
                    errors.set(DeleteFormErrors::default());
                }
                || ()
            },
            props.open,
        );
    }

    let on_reason_input = {
        let reason = reason.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                reason.set(input.value());
            }
        })
    };
    let on_agreement_input = {
        let agreement = agreement.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                agreement.set(input.value());
            }
        })
    };

    // Required-field validation only; an invalid form never reaches the
    // network. The confirmation phrase is shown as guidance but any
    // non-empty text is accepted.
    let on_confirm = {
        let reason = reason.clone();
        let agreement = agreement.clone();
        let errors = errors.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| match validate_deletion(&reason, &agreement) {
            Ok(request) => {
                errors.set(DeleteFormErrors::default());
                on_confirm.emit(request);
            }
            Err(form_errors) => errors.set(form_errors),
        })
    };

    let reason_class = classes!(
        "textarea",
        "w-full",
        errors.reason_required.then_some("input-error")
    );
    let agreement_class = classes!(
        "input",
        "w-full",
        errors.agreement_required.then_some("input-error")
    );

    html! {
        <Modal open={props.open} on_close={props.on_close.clone()}>
            <div class="space-y-4">
                <div>
                    <h3 class="text-lg font-semibold">{"This action cannot be undone"}</h3>
                    <p class="text-sm muted">
                        {"Your account and everything you shared will be permanently removed."}
                    </p>
                </div>
                <div class="space-y-2">
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">{"Reason"}</span>
                        <textarea
                            class={reason_class}
                            value={(*reason).clone()}
                            oninput={on_reason_input}
                            disabled={props.busy}
                        />
                        {if errors.reason_required {
                            html! { <p class="text-xs text-error">{"Please input your reason."}</p> }
                        } else {
                            html! {}
                        }}
                    </label>
                    <label class="form-control gap-1">
                        <span class="label-text text-xs">
                            {"Type "}
                            <span class="font-mono text-error">{CONFIRM_PHRASE}</span>
                            {" for your confirmation"}
                        </span>
                        <input
                            type="text"
                            class={agreement_class}
                            placeholder={CONFIRM_PHRASE}
                            value={(*agreement).clone()}
                            oninput={on_agreement_input}
                            disabled={props.busy}
                        />
                        {if errors.agreement_required {
                            html! { <p class="text-xs text-error">{"Please input the confirmation."}</p> }
                        } else {
                            html! {}
                        }}
                    </label>
                </div>
                <div class="flex justify-end gap-2">
                    <button
                        class="btn btn-ghost btn-sm"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                        disabled={props.busy}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        class="btn btn-error btn-sm"
                        onclick={on_confirm}
                        disabled={props.busy}
                    >
                        {"Delete account"}
                    </button>
                </div>
            </div>
        </Modal>
    }
}
