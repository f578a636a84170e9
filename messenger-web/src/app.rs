use crate::api::MessengerClient;
use crate::components::ToastContainer;
use crate::models::session::{SessionState, SessionSync};
use crate::routes::{MainRoute, switch};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    let (_session, session_dispatch) = use_store::<SessionState>();

    use_effect_with((), move |_| {
        let sync = SessionSync::new(MessengerClient::shared(), session_dispatch);
        spawn_local(async move {
            if sync.load().await.is_err() {
                debug!("starting signed out");
            }
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
            <ToastContainer />
        </BrowserRouter>
    }
}
