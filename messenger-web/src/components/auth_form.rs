//! Sign-in / registration form.
//!
//! Owns the field values, mode and loading flag; hands submissions to an
//! [`AuthController`] that lives exactly as long as the form is mounted, and
//! leaves for the users page as soon as the session turns authenticated.

use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::models::SocialProvider;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::{use_selector, use_store};

use crate::api::MessengerClient;
use crate::auth::{
    AuthController, AuthMode, AuthServices, FieldErrors, FormField, FormValues, SessionWatcher,
};
use crate::components::auth_social_button::AuthSocialButton;
use crate::components::input::Input;
use crate::config::FrontendConfig;
use crate::models::session::{SessionState, SessionSync};
use crate::models::toast::{ToastNotifier, ToastState};

#[function_component(AuthForm)]
pub fn auth_form() -> Html {
    let (i18n, _) = use_translation();
    let mode = use_state(AuthMode::default);
    let values = use_state(FormValues::default);
    let errors = use_state(FieldErrors::default);
    let loading = use_state(|| false);

    let (_, session_dispatch) = use_store::<SessionState>();
    let (_, toast_dispatch) = use_store::<ToastState>();
    let controller = {
        let loading = loading.setter();
        use_memo((), move |_| {
            let client = MessengerClient::shared();
            let config = FrontendConfig::new();
            AuthController::new(
                AuthServices {
                    registrar: Rc::new(client.clone()),
                    authenticator: Rc::new(client.clone()),
                    session: Rc::new(SessionSync::new(client, session_dispatch)),
                    notifier: Rc::new(ToastNotifier::new(toast_dispatch, config.toast_duration_ms)),
                },
                Rc::new(move |value| loading.set(value)),
            )
        })
    };

    {
        let controller = Rc::clone(&controller);
        use_effect_with((), move |_| move || controller.shutdown());
    }

    // Session watcher: subscribed while mounted, dropped with the form.
    let status = use_selector(|state: &SessionState| state.status);
    let navigator = use_navigator();
    let watcher = use_mut_ref(move || {
        navigator.map(|navigator| SessionWatcher::new(Rc::new(navigator)))
    });
    {
        let watcher = watcher.clone();
        use_effect_with(*status, move |status| {
            if let Some(watcher) = watcher.borrow_mut().as_mut() {
                watcher.observe(*status);
            }
            || ()
        });
    }

    let on_input = {
        let values = values.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let mut next = (*values).clone();
            next.set(field, value);
            values.set(next);
        })
    };

    let toggle_mode = {
        let mode = mode.clone();
        let errors = errors.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            mode.set(mode.toggle());
            errors.set(FieldErrors::default());
        })
    };

    let onsubmit = {
        let controller = Rc::clone(&controller);
        let values = values.clone();
        let errors = errors.clone();
        let mode = *mode;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let submitted = (*values).clone();
            if let Err(field_errors) = submitted.validate(mode) {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());

            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.submit(&submitted, mode).await;
            });
        })
    };

    let on_social = {
        let controller = Rc::clone(&controller);
        Callback::from(move |provider: SocialProvider| {
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.social_action(provider.id()).await;
            });
        })
    };

    let is_loading = *loading;

    html! {
        <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <form class="space-y-6" {onsubmit}>
                        { for FormField::visible_in(*mode).map(|field| html! {
                            <Input
                                key={field.id()}
                                {field}
                                value={values.get(field).to_string()}
                                disabled={is_loading}
                                error={errors.get(field)}
                                on_input={on_input.clone()}
                            />
                        }) }
                        <button class="btn btn-primary w-full" type="submit" disabled={is_loading}>
                            { i18n.t(mode.submit_label_key()) }
                        </button>
                    </form>

                    <div class="divider text-sm text-base-content/60">{ i18n.t("auth.continue_with") }</div>

                    <div class="flex gap-2">
                        { for SocialProvider::iter().map(|provider| html! {
                            <AuthSocialButton
                                key={provider.id()}
                                {provider}
                                disabled={is_loading}
                                onclick={on_social.clone()}
                            />
                        }) }
                    </div>

                    <div class="mt-6 flex gap-2 justify-center text-sm text-base-content/60">
                        <span>{ i18n.t(mode.prompt_key()) }</span>
                        <a class="link" href="#" onclick={toggle_mode}>
                            { i18n.t(mode.toggle_link_key()) }
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
