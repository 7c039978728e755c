use crate::api::SparkMeetClient;
use crate::routes::MainRoute;
use crate::services::{Notifier, SessionStore};
use shared::models::{Gender, Interest, UserRegistration};
use std::str::FromStr;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_navigator;

const MAX_INTERESTS: usize = 5;

#[derive(Clone, PartialEq)]
struct Draft {
    username: String,
    password: String,
    repeat_password: String,
    first_name: String,
    surname: String,
    email: String,
    phone: String,
    location: String,
    gender: Gender,
    age: String,
    interests: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            repeat_password: String::new(),
            first_name: String::new(),
            surname: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            gender: Gender::Woman,
            age: String::new(),
            interests: Vec::new(),
        }
    }
}

/// Account creation form. Registers the account, then logs straight in
/// with the fresh credentials and lands on the home page.
#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let draft = use_state(Draft::default);
    let interests = use_state(Vec::<Interest>::new);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    {
        let interests = interests.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SparkMeetClient::shared().get_all_interests().await {
                    Ok(catalog) => interests.set(catalog),
                    Err(err) => {
                        Notifier::shared()
                            .show_error(format!("Failed to load interests: {err}"), 5);
                    }
                }
            });
            || ()
        });
    }

    let text_field = |label: &'static str,
                      id: &'static str,
                      input_type: &'static str,
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
                <input {id} class="input input-bordered" type={input_type}
                    required=true value={value} {oninput} />
            </div>
        }
    };

    let on_gender_change = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(gender) = Gender::from_str(&select.value()) {
                    let mut next = (*draft).clone();
                    next.gender = gender;
                    draft.set(next);
                }
            }
        })
    };

    // Checkbox toggling, capped at five picks: extra checks are ignored
    // and the box snaps back unchecked on the next render.
    let on_interest_toggle = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let Some(checkbox) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let id = checkbox.value();
            let mut next = (*draft).clone();
            if checkbox.checked() {
                if next.interests.len() < MAX_INTERESTS && !next.interests.contains(&id) {
                    next.interests.push(id);
                }
            } else {
                next.interests.retain(|picked| picked != &id);
            }
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = (*draft).clone();
            if current.password != current.repeat_password {
                Notifier::shared().show_error("Passwords do not match", 3);
                return;
            }
            let Ok(age) = current.age.parse::<u8>() else {
                Notifier::shared().show_error("Please enter a valid age", 3);
                return;
            };
            submitting.set(true);
            let submitting_ref = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let registration = UserRegistration {
                    username: current.username.clone(),
                    password: current.password.clone(),
                    repeat_password: current.repeat_password,
                    first_name: current.first_name,
                    surname: current.surname,
                    email: current.email,
                    phone: current.phone,
                    location: current.location,
                    gender: current.gender,
                    age,
                    interests: current.interests,
                };
                let client = SparkMeetClient::shared();
                match client.register_user(&registration).await {
                    Ok(created) => {
                        // Log straight in with the fresh account.
                        let session = SessionStore::shared();
                        match session.login(&created.user.username, &current.password).await {
                            Ok(()) => {
                                if let Some(nav) = navigator {
                                    nav.push(&MainRoute::Home);
                                }
                            }
                            Err(err) => Notifier::shared().show_error(err.to_string(), 5),
                        }
                    }
                    Err(err) => {
                        Notifier::shared().show_error(format!("Signup failed: {err}"), 5);
                    }
                }
                submitting_ref.set(false);
            });
        })
    };

    let picks_left = MAX_INTERESTS.saturating_sub(draft.interests.len());

    html! {
        <div class="card max-w-2xl mx-auto bg-base-100 shadow-lg">
            <form class="card-body" {onsubmit}>
                <h1 class="card-title text-2xl">{"Create your account"}</h1>
                <div class="grid gap-2 md:grid-cols-2">
                    { text_field("Username", "username", "text", draft.username.clone(),
                        Box::new(|d, v| d.username = v)) }
                    { text_field("Email", "email", "email", draft.email.clone(),
                        Box::new(|d, v| d.email = v)) }
                    { text_field("Password", "password", "password", draft.password.clone(),
                        Box::new(|d, v| d.password = v)) }
                    { text_field("Repeat password", "repeat-password", "password", draft.repeat_password.clone(),
                        Box::new(|d, v| d.repeat_password = v)) }
                    { text_field("First name", "first-name", "text", draft.first_name.clone(),
                        Box::new(|d, v| d.first_name = v)) }
                    { text_field("Surname", "surname", "text", draft.surname.clone(),
                        Box::new(|d, v| d.surname = v)) }
                    { text_field("Phone", "phone", "tel", draft.phone.clone(),
                        Box::new(|d, v| d.phone = v)) }
                    { text_field("Location", "location", "text", draft.location.clone(),
                        Box::new(|d, v| d.location = v)) }
                    { text_field("Age", "age", "number", draft.age.clone(),
                        Box::new(|d, v| d.age = v)) }
                    <div class="form-control">
                        <label class="label" for="gender">
                            <span class="label-text">{"Gender"}</span>
                        </label>
                        <select id="gender" class="select select-bordered" onchange={on_gender_change}>
                            <option value="woman" selected={draft.gender == Gender::Woman}>{"Woman"}</option>
                            <option value="man" selected={draft.gender == Gender::Man}>{"Man"}</option>
                        </select>
                    </div>
                </div>
                <div class="form-control mt-2">
                    <span class="label-text mb-1">
                        { format!("Interests ({picks_left} picks left)") }
                    </span>
                    <div class="flex flex-wrap gap-3">
                        { for interests.iter().map(|interest| {
                            let checked = draft.interests.contains(&interest.id);
                            html! {
                                <label class="label cursor-pointer gap-2" key={interest.id.clone()}>
                                    <input
                                        type="checkbox"
                                        class="checkbox checkbox-sm"
                                        value={interest.id.clone()}
                                        checked={checked}
                                        onchange={on_interest_toggle.clone()}
                                    />
                                    <span class="label-text">{ &interest.name }</span>
                                </label>
                            }
                        }) }
                    </div>
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" type="submit" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Sign up" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
