use crate::services::{use_subject, Notifier};
use yew::prelude::*;

/// Global banner rendering the live notification, if any.
///
/// Subscribes to the notification bus; clicking the close button clears
/// the slot (and with it any pending auto-close timer).
#[function_component(MessageBanner)]
pub fn message_banner() -> Html {
    let notifier = Notifier::shared();
    let current = use_subject(&notifier.current());

    let on_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| notifier.clear())
    };

    match &*current {
        Some(notification) => html! {
            <div class={classes!("alert", notification.kind.alert_class(), "rounded-none")} role="alert">
                <span>{ notification.text.clone() }</span>
                <button class="btn btn-ghost btn-xs" onclick={on_dismiss}>{"✕"}</button>
            </div>
        },
        None => html! {},
    }
}
