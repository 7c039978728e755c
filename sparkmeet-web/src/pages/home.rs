use crate::routes::MainRoute;
use crate::services::{use_subject, SessionStore};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Landing page: a short pitch for visitors, quick links for members.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = SessionStore::shared();
    let logged_in = *use_subject(&session.is_logged_in());

    html! {
        <div class="hero py-16">
            <div class="hero-content text-center">
                <div class="max-w-lg">
                    <h1 class="text-4xl font-bold">{"Seven dates. One evening."}</h1>
                    <p class="py-6">
                        {"SparkMeet hosts curated speed-dating evenings. Sign up, \
                          pick an event, and we take care of the seating."}
                    </p>
                    {
                        if logged_in {
                            html! {
                                <div class="flex justify-center gap-4">
                                    <Link<MainRoute> to={MainRoute::Events} classes="btn btn-primary">
                                        {"Browse events"}
                                    </Link<MainRoute>>
                                    <Link<MainRoute> to={MainRoute::Matches} classes="btn btn-outline">
                                        {"Your matches"}
                                    </Link<MainRoute>>
                                </div>
                            }
                        } else {
                            html! {
                                <div class="flex justify-center gap-4">
                                    <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary">
                                        {"Sign up"}
                                    </Link<MainRoute>>
                                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-outline">
                                        {"Log in"}
                                    </Link<MainRoute>>
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
