use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: MainRoute,
}

/// One entry in the header navigation, highlighted when active.
#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let Some(label) = props.route.nav_label() else {
        return html! {};
    };
    let active = props.route == props.current_route;

    html! {
        <li>
            <Link<MainRoute>
                to={props.route.clone()}
                classes={classes!(active.then_some("active"))}
            >
                { label }
            </Link<MainRoute>>
        </li>
    }
}
