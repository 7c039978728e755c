use crate::api::SparkMeetClient;
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::services::{Notifier, SessionStore};
use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Read-only view of the signed-in user's profile.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_state(|| None::<User>);
    let loaded = use_state(|| false);

    {
        let user = user.clone();
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            let user_id = SessionStore::shared().current_user_id();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.get_user(&user_id).await {
                    Ok(profile) => user.set(Some(profile)),
                    Err(err) => {
                        Notifier::shared().show_error(format!("Failed to load profile: {err}"), 5);
                    }
                }
                loaded.set(true);
            });
            || ()
        });
    }

    if !*loaded {
        return html! { <Loading /> };
    }

    let Some(profile) = &*user else {
        return html! { <p class="text-base-content/70">{"Profile unavailable."}</p> };
    };

    let picture_url = SparkMeetClient::shared().user_picture_url(&profile.id);

    html! {
        <div class="card max-w-2xl mx-auto bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-center gap-4">
                    <div class="avatar">
                        <div class="w-24 rounded-full">
                            <img src={picture_url} alt="Profile picture" />
                        </div>
                    </div>
                    <div>
                        <h1 class="text-2xl font-bold">
                            { format!("{} {}", profile.first_name, profile.surname) }
                        </h1>
                        <p class="text-base-content/70">
                            { format!("@{} · {} · {}", profile.username, profile.age, profile.location) }
                        </p>
                    </div>
                </div>
                <div class="divider"></div>
                <dl class="grid grid-cols-2 gap-2 text-sm">
                    <dt class="font-semibold">{"Email"}</dt>
                    <dd>{ &profile.email }</dd>
                    <dt class="font-semibold">{"Phone"}</dt>
                    <dd>{ &profile.phone }</dd>
                    <dt class="font-semibold">{"Gender"}</dt>
                    <dd>{ profile.gender.to_string() }</dd>
                    <dt class="font-semibold">{"Registered events"}</dt>
                    <dd>{ profile.registered_events.len() }</dd>
                </dl>
                <div class="card-actions justify-end mt-4">
                    <Link<MainRoute> to={MainRoute::ProfileEdit} classes="btn btn-primary btn-sm">
                        {"Edit profile"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
