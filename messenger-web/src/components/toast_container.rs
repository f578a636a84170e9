use crate::models::toast::{ToastKind, ToastState};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Renders the toast stack in the top-right corner.
#[function_component(ToastContainer)]
pub fn toast_container() -> Html {
    let (i18n, _) = use_translation();
    let (state, dispatch) = use_store::<ToastState>();

    if state.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast toast-top toast-end z-50">
            { for state.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_close = dispatch.reduce_mut_callback(move |state: &mut ToastState| state.remove(id));
                let (alert_class, icon) = match toast.kind {
                    ToastKind::Success => (
                        "alert alert-success",
                        html! { <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-5 h-5" /> },
                    ),
                    ToastKind::Error => ("alert alert-error", html! { <span>{"✕"}</span> }),
                };
                html! {
                    <div key={id.to_string()} class={alert_class} role="status">
                        { icon }
                        <span>{ i18n.t(toast.notice.translation_key()) }</span>
                        <button class="btn btn-ghost btn-xs" onclick={on_close} title="Dismiss">{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
