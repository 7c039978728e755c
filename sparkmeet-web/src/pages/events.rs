use crate::api::SparkMeetClient;
use crate::components::event_card::EventCard;
use crate::components::loading::Loading;
use crate::services::{Notifier, SessionStore};
use chrono::Utc;
use shared::models::Event;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Upcoming-events feed with register/unregister actions.
///
/// Events are fetched once on mount, sorted by date and filtered to
/// today-or-later. Register/unregister replace the affected event with
/// the server's updated copy, so spot counts stay accurate.
#[function_component(EventsPage)]
pub fn events_page() -> Html {
    let session = SessionStore::shared();
    let events = use_state(Vec::<Event>::new);
    let loaded = use_state(|| false);
    let user_id = session.current_user_id();
    let is_admin = session.is_admin();

    {
        let events = events.clone();
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.get_all_events().await {
                    Ok(mut all) => {
                        let today = Utc::now().date_naive();
                        all.retain(|event| event.date.date_naive() >= today);
                        all.sort_by_key(|event| event.date);
                        events.set(all);
                    }
                    Err(err) => {
                        Notifier::shared().show_error(format!("Failed to load events: {err}"), 5);
                    }
                }
                loaded.set(true);
            });
            || ()
        });
    }

    let replace_event = {
        let events = events.clone();
        move |updated: Event| {
            let mut next: Vec<Event> = (*events).clone();
            if let Some(slot) = next.iter_mut().find(|event| event.id == updated.id) {
                *slot = updated;
            }
            events.set(next);
        }
    };

    let on_register = {
        let replace_event = replace_event.clone();
        Callback::from(move |event_id: String| {
            let replace_event = replace_event.clone();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.register_for_event(&event_id).await {
                    Ok(updated) => {
                        Notifier::shared()
                            .show_success(format!("Successfully registered for {}!", updated.title), 3);
                        replace_event(updated);
                    }
                    Err(err) => {
                        Notifier::shared().show_error(format!("Registration failed: {err}"), 5);
                    }
                }
            });
        })
    };

    let on_unregister = {
        Callback::from(move |event_id: String| {
            let replace_event = replace_event.clone();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.unregister_from_event(&event_id).await {
                    Ok(updated) => {
                        Notifier::shared().show_success(
                            format!("Successfully unregistered from {}.", updated.title),
                            3,
                        );
                        replace_event(updated);
                    }
                    Err(err) => {
                        Notifier::shared().show_error(format!("Unregistration failed: {err}"), 5);
                    }
                }
            });
        })
    };

    if !*loaded {
        return html! { <Loading /> };
    }

    html! {
        <>
            <h1 class="text-3xl font-bold mb-4">{"Upcoming events"}</h1>
            {
                if events.is_empty() {
                    html! { <p class="text-base-content/70">{"No upcoming events right now. Check back soon!"}</p> }
                } else {
                    html! {
                        <div class="grid gap-4 md:grid-cols-2">
                            { for events.iter().map(|event| html! {
                                <EventCard
                                    key={event.id.clone()}
                                    event={event.clone()}
                                    registered={event.is_registered(&user_id)}
                                    show_admin_details={is_admin}
                                    on_register={on_register.clone()}
                                    on_unregister={on_unregister.clone()}
                                />
                            }) }
                        </div>
                    }
                }
            }
        </>
    }
}
