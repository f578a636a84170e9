use crate::models::session::SessionState;
use crate::pages::{AuthPage, ErrorPage, UsersPage};
use shared::models::SessionStatus;
use strum::EnumIter;
use tracing::debug;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Auth,
    #[at("/users")]
    Users,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let status = use_selector(|state: &SessionState| state.status);

    match props.route {
        MainRoute::Auth => html! { <AuthPage /> },
        MainRoute::Users => match *status {
            SessionStatus::Authenticated => html! { <UsersPage /> },
            SessionStatus::Loading => html! { <crate::components::loading::Loading /> },
            SessionStatus::Unauthenticated => {
                html! { <Redirect<MainRoute> to={MainRoute::Auth} /> }
            }
        },
        MainRoute::NotFound => html! { <ErrorPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    debug!(?route, "switching route");
    html! { <MainRouteView {route} /> }
}
