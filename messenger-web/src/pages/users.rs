use crate::models::session::SessionState;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

/// Where signed-in users land.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let (i18n, _) = use_translation();
    let user = use_selector(|state: &SessionState| state.user.clone());
    let who = (*user)
        .as_ref()
        .and_then(|user| user.name.clone().or_else(|| user.email.clone()))
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("users.title") }</h1>
            <p>{ format!("{} {}", i18n.t("users.signed_in_as"), who) }</p>
        </div>
    }
}
