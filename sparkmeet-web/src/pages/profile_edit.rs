use crate::api::SparkMeetClient;
use crate::components::loading::Loading;
use crate::routes::MainRoute;
use crate::services::{Notifier, SessionStore};
use shared::models::{Interest, UserUpdate};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

const MAX_INTERESTS: usize = 5;

/// Applies a pick from one of the interest selects. A value already held
/// by another slot is ignored, so the same interest cannot be sent twice;
/// the select snaps back on the next render.
pub(crate) fn apply_interest_pick(interests: &mut Vec<String>, slot: usize, value: String) {
    interests.resize(MAX_INTERESTS, String::new());
    if slot < MAX_INTERESTS && (value.is_empty() || !interests.contains(&value)) {
        interests[slot] = value;
    }
    interests.retain(|id| !id.is_empty());
}

#[derive(Clone, Default, PartialEq)]
struct Draft {
    first_name: String,
    surname: String,
    email: String,
    phone: String,
    location: String,
    age: String,
    interests: Vec<String>,
}

/// Edit form for the signed-in user's profile.
///
/// Loads the current profile and the interest catalog on mount, then
/// sends a partial update and returns to the profile view.
#[function_component(ProfileEditPage)]
pub fn profile_edit_page() -> Html {
    let draft = use_state(Draft::default);
    let interests = use_state(Vec::<Interest>::new);
    let loaded = use_state(|| false);
    let saving = use_state(|| false);
    let navigator = use_navigator();

    {
        let draft = draft.clone();
        let interests = interests.clone();
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            let user_id = SessionStore::shared().current_user_id();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.get_user(&user_id).await {
                    Ok(profile) => draft.set(Draft {
                        first_name: profile.first_name,
                        surname: profile.surname,
                        email: profile.email,
                        phone: profile.phone,
                        location: profile.location,
                        age: profile.age.to_string(),
                        interests: profile.interests,
                    }),
                    Err(err) => {
                        Notifier::shared().show_error(format!("Failed to load profile: {err}"), 5);
                    }
                }
                match client.get_all_interests().await {
                    Ok(catalog) => interests.set(catalog),
                    Err(err) => {
                        Notifier::shared()
                            .show_error(format!("Failed to load interests: {err}"), 5);
                    }
                }
                loaded.set(true);
            });
            || ()
        });
    }

    let text_field = |label: &'static str,
                      id: &'static str,
                      value: String,
                      update: Box<dyn Fn(&mut Draft, String)>|
     -> Html {
        let draft = draft.clone();
        let oninput = Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                update(&mut next, input.value());
                draft.set(next);
            }
        });
        html! {
            <div class="form-control">
                <label class="label" for={id}>
                    <span class="label-text">{ label }</span>
                </label>
                <input {id} class="input input-bordered" type="text" value={value} {oninput} />
            </div>
        }
    };

    let on_interest_change = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let slot: usize = select.name().trim_start_matches("interest").parse().unwrap_or(0);
            let mut next = (*draft).clone();
            apply_interest_pick(&mut next.interests, slot, select.value());
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = (*draft).clone();
            let Ok(age) = current.age.parse::<u8>() else {
                Notifier::shared().show_error("Please enter a valid age", 3);
                return;
            };
            saving.set(true);
            let saving_ref = saving.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let update = UserUpdate {
                    first_name: Some(current.first_name),
                    surname: Some(current.surname),
                    email: Some(current.email),
                    phone: Some(current.phone),
                    location: Some(current.location),
                    age: Some(age),
                    interests: Some(current.interests),
                    ..UserUpdate::default()
                };
                let client = SparkMeetClient::shared();
                match client.update_user(&update).await {
                    Ok(_) => {
                        Notifier::shared().show_success("Profile updated successfully!", 3);
                        if let Some(nav) = navigator {
                            nav.push(&MainRoute::Profile);
                        }
                    }
                    Err(err) => {
                        Notifier::shared()
                            .show_error(format!("Failed to update profile: {err}"), 5);
                    }
                }
                saving_ref.set(false);
            });
        })
    };

    if !*loaded {
        return html! { <Loading /> };
    }

    let interest_selects = (0..MAX_INTERESTS).map(|slot| {
        let selected = draft.interests.get(slot).cloned().unwrap_or_default();
        html! {
            <select
                name={format!("interest{slot}")}
                class="select select-bordered select-sm"
                onchange={on_interest_change.clone()}
            >
                <option value="" selected={selected.is_empty()}>{"—"}</option>
                { for interests.iter().map(|interest| html! {
                    <option
                        value={interest.id.clone()}
                        selected={interest.id == selected}
                    >
                        { &interest.name }
                    </option>
                }) }
            </select>
        }
    });

    html! {
        <div class="card max-w-2xl mx-auto bg-base-100 shadow-md">
            <form class="card-body" {onsubmit}>
                <h1 class="card-title text-2xl">{"Edit profile"}</h1>
                { text_field("First name", "first-name", draft.first_name.clone(),
                    Box::new(|d, v| d.first_name = v)) }
                { text_field("Surname", "surname", draft.surname.clone(),
                    Box::new(|d, v| d.surname = v)) }
                { text_field("Email", "email", draft.email.clone(),
                    Box::new(|d, v| d.email = v)) }
                { text_field("Phone", "phone", draft.phone.clone(),
                    Box::new(|d, v| d.phone = v)) }
                { text_field("Location", "location", draft.location.clone(),
                    Box::new(|d, v| d.location = v)) }
                { text_field("Age", "age", draft.age.clone(),
                    Box::new(|d, v| d.age = v)) }
                <div class="form-control">
                    <span class="label-text mb-1">{"Interests (up to five)"}</span>
                    <div class="flex flex-wrap gap-2">
                        { for interest_selects }
                    </div>
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" type="submit" disabled={*saving}>
                        { if *saving { "Saving..." } else { "Save" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
