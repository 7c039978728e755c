use shared::models::Event;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventCardProps {
    pub event: Event,
    /// Whether the viewing user is registered for this event.
    pub registered: bool,
    /// Admins also see the per-gender registration breakdown.
    #[prop_or_default]
    pub show_admin_details: bool,
    pub on_register: Callback<String>,
    pub on_unregister: Callback<String>,
}

/// Card for one speed-dating event with a register/unregister action.
#[function_component(EventCard)]
pub fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let taken = event.registration_count();
    let capacity = (event.max_spots as usize) * 2;
    let full = taken >= capacity;

    let on_register = {
        let callback = props.on_register.clone();
        let id = event.id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };
    let on_unregister = {
        let callback = props.on_unregister.clone();
        let id = event.id.clone();
        Callback::from(move |_: MouseEvent| callback.emit(id.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <h3 class="card-title">{ &event.title }</h3>
                <p class="text-sm text-base-content/70">
                    { event.date.format("%A %e %B %Y, %H:%M").to_string() }
                    { " · " }
                    { &event.location }
                </p>
                <p>{ &event.description }</p>
                <p class="text-sm">
                    { format!("{taken} of {capacity} spots filled") }
                </p>
                if props.show_admin_details {
                    <p class="text-xs text-base-content/60">
                        { format!(
                            "men: {} / {}, women: {} / {}",
                            event.registered_men.len(),
                            event.max_spots,
                            event.registered_women.len(),
                            event.max_spots,
                        ) }
                    </p>
                }
                <div class="card-actions justify-end">
                    {
                        if props.registered {
                            html! {
                                <button class="btn btn-outline btn-sm" onclick={on_unregister}>
                                    {"Unregister"}
                                </button>
                            }
                        } else {
                            html! {
                                <button
                                    class="btn btn-primary btn-sm"
                                    disabled={full}
                                    onclick={on_register}
                                >
                                    { if full { "Full" } else { "Register" } }
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
