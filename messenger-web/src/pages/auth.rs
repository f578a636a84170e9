use crate::components::AuthForm;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Landing page: brand header above the auth form.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="flex min-h-screen flex-col justify-center py-12 sm:px-6 lg:px-8 bg-base-200">
            <div class="sm:mx-auto sm:w-full sm:max-w-md flex flex-col items-center">
                <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-12 h-12 text-primary" />
                <h2 class="mt-6 text-center text-3xl font-bold tracking-tight">
                    { i18n.t("auth.title") }
                </h2>
            </div>
            <AuthForm />
        </div>
    }
}
