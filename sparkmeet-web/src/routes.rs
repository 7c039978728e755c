use crate::containers::layout::Layout;
use crate::pages::{
    EventsPage, HomePage, LoginPage, MatchesPage, NotFoundPage, ProfileEditPage, ProfilePage,
    SignupPage,
};
use crate::services::{use_subject, SessionStore};
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/events")]
    Events,
    #[at("/matches")]
    Matches,
    #[at("/profile")]
    Profile,
    #[at("/profile/edit")]
    ProfileEdit,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown in the header navigation.
    #[must_use]
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Events => Some("Events"),
            Self::Matches => Some("Matches"),
            Self::Profile => Some("Profile"),
            _ => None,
        }
    }

    /// Whether the route is only meaningful for a signed-in user.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::Events | Self::Matches | Self::Profile | Self::ProfileEdit
        )
    }
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: MainRoute,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let session = SessionStore::shared();
    let logged_in = *use_subject(&session.is_logged_in());

    if props.route.requires_login() && !logged_in {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    let page = match props.route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => {
            if logged_in {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <LoginPage /> }
        }
        MainRoute::Signup => {
            if logged_in {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <SignupPage /> }
        }
        MainRoute::Events => html! { <EventsPage /> },
        MainRoute::Matches => html! { <MatchesPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::ProfileEdit => html! { <ProfileEditPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout current_route={props.route.clone()}>
            { page }
        </Layout>
    }
}

/// Switch function wiring every route through the login guard and layout.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route: {route:?}");
    html! { <RouteView {route} /> }
}
