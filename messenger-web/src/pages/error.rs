use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("errors.not_found") }</h1>
            <Link<MainRoute> to={MainRoute::Auth} classes="btn btn-primary">
                { i18n.t("errors.back") }
            </Link<MainRoute>>
        </div>
    }
}
