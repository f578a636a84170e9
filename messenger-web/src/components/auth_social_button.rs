use shared::models::SocialProvider;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AuthSocialButtonProps {
    pub provider: SocialProvider,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<SocialProvider>,
}

fn provider_name(provider: SocialProvider) -> &'static str {
    match provider {
        SocialProvider::Github => "GitHub",
        SocialProvider::Google => "Google",
    }
}

#[function_component(AuthSocialButton)]
pub fn auth_social_button(props: &AuthSocialButtonProps) -> Html {
    let provider = props.provider;
    let onclick = props.onclick.reform(move |_: MouseEvent| provider);

    html! {
        <button
            type="button"
            class="btn btn-outline flex-1"
            aria-label={provider.id()}
            disabled={props.disabled}
            {onclick}
        >
            { provider_name(provider) }
        </button>
    }
}
