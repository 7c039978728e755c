use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or("Are you sure?".into())]
    pub title: AttrValue,
    #[prop_or("This action cannot be undone.".into())]
    pub message: AttrValue,
    #[prop_or("Confirm".into())]
    pub confirm_text: AttrValue,
    #[prop_or("Cancel".into())]
    pub cancel_text: AttrValue,
    /// Emits `true` on confirm, `false` on cancel.
    pub on_close: Callback<bool>,
}

/// Yes/no confirmation dialog for destructive actions.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let confirm = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(true))
    };
    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(false))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                <p class="py-4">{ props.message.clone() }</p>
                <div class="modal-action">
                    <button class="btn" onclick={cancel}>{ props.cancel_text.clone() }</button>
                    <button class="btn btn-error" onclick={confirm}>{ props.confirm_text.clone() }</button>
                </div>
            </div>
        </div>
    }
}
