use crate::api::SparkMeetClient;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::Loading;
use crate::services::{Notifier, SessionStore};
use shared::models::SharedContact;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// The signed-in user's matches: contact cards revealed after mutual
/// interest at an event. Removal goes through a confirmation dialog.
#[function_component(MatchesPage)]
pub fn matches_page() -> Html {
    let matches = use_state(Vec::<SharedContact>::new);
    let loaded = use_state(|| false);
    let pending_removal = use_state(|| None::<SharedContact>);

    {
        let matches = matches.clone();
        let loaded = loaded.clone();
        use_effect_with((), move |_| {
            let user_id = SessionStore::shared().current_user_id();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.get_user_matches(&user_id).await {
                    Ok(contacts) => matches.set(contacts),
                    Err(err) => {
                        Notifier::shared().show_error(format!("Failed to load matches: {err}"), 5);
                    }
                }
                loaded.set(true);
            });
            || ()
        });
    }

    let on_remove_click = {
        let pending_removal = pending_removal.clone();
        Callback::from(move |contact: SharedContact| pending_removal.set(Some(contact)))
    };

    let on_modal_close = {
        let matches = matches.clone();
        let pending_removal = pending_removal.clone();
        Callback::from(move |confirmed: bool| {
            let selected = (*pending_removal).clone();
            pending_removal.set(None);
            let Some(contact) = selected else { return };
            if !confirmed {
                return;
            }
            let matches = matches.clone();
            spawn_local(async move {
                let client = SparkMeetClient::shared();
                match client.remove_match(&contact.id).await {
                    Ok(()) => {
                        let remaining: Vec<SharedContact> = matches
                            .iter()
                            .filter(|m| m.id != contact.id)
                            .cloned()
                            .collect();
                        matches.set(remaining);
                        Notifier::shared().show_success("Shared contact removed.", 3);
                    }
                    Err(err) => {
                        Notifier::shared()
                            .show_error(format!("Failed to remove shared contact: {err}"), 5);
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
            <h1 class="text-3xl font-bold mb-4">{"Your matches"}</h1>
            {
                if matches.is_empty() {
                    html! { <p class="text-base-content/70">{"No matches yet. Register for an event to meet someone!"}</p> }
                } else {
                    html! {
                        <div class="grid gap-4 md:grid-cols-3">
                            { for matches.iter().map(|contact| {
                                let on_remove = {
                                    let on_remove_click = on_remove_click.clone();
                                    let contact = contact.clone();
                                    Callback::from(move |_: MouseEvent| on_remove_click.emit(contact.clone()))
                                };
                                html! {
                                    <div class="card bg-base-100 shadow-md" key={contact.id.clone()}>
                                        <figure class="pt-4">
                                            <img
                                                class="rounded-full w-24 h-24 object-cover"
                                                src={contact.img.clone()}
                                                alt={format!("{} {}", contact.first_name, contact.surname)}
                                            />
                                        </figure>
                                        <div class="card-body">
                                            <h3 class="card-title">
                                                { format!("{} {}", contact.first_name, contact.surname) }
                                            </h3>
                                            <p class="text-sm">{ &contact.email }</p>
                                            <p class="text-sm">{ &contact.phone }</p>
                                            <p class="text-xs text-base-content/60">
                                                { format!("Matched {}", contact.matched_at.format("%e %B %Y")) }
                                            </p>
                                            <div class="card-actions justify-end">
                                                <button class="btn btn-ghost btn-sm text-error" onclick={on_remove}>
                                                    {"Remove"}
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
            <ConfirmModal
                open={pending_removal.is_some()}
                title="Remove match?"
                message="The shared contact details will be deleted for both of you."
                confirm_text="Remove"
                on_close={on_modal_close}
            />
        </>
    }
}
