use crate::components::header_nav_item::HeaderNavItem;
use crate::routes::MainRoute;
use crate::services::{use_subject, SessionStore};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current_route: MainRoute,
}

/// Top navigation bar. Links follow the signed-in state: members see the
/// app sections and a logout button, visitors see login and signup.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = SessionStore::shared();
    let logged_in = *use_subject(&session.is_logged_in());
    let navigator = use_navigator();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Local sign-out always succeeds; the store reports any
                // remote failure through the notification bus.
                let _ = session.logout().await;
                if let Some(nav) = navigator {
                    nav.push(&MainRoute::Home);
                }
            });
        })
    };

    let nav_items = || -> Html {
        html! {
            { for MainRoute::iter()
                .filter(|route| route.nav_label().is_some())
                .map(|route| html! {
                    <HeaderNavItem
                        route={route}
                        current_route={props.current_route.clone()}
                    />
                })
            }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {"SparkMeet"}
            </Link<MainRoute>>
            if logged_in {
                <ul class="menu menu-horizontal">
                    { nav_items() }
                </ul>
            }
            <div class="flex items-center gap-2">
                {
                    if logged_in {
                        html! {
                            <>
                                <span class="text-sm text-base-content/80">
                                    { session.current_username() }
                                </span>
                                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                                    {"Log out"}
                                </button>
                            </>
                        }
                    } else {
                        html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                                    {"Log in"}
                                </Link<MainRoute>>
                                <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-sm">
                                    {"Sign up"}
                                </Link<MainRoute>>
                            </>
                        }
                    }
                }
            </div>
        </nav>
    }
}
