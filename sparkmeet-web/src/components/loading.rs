use yew::{function_component, html, Html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-12">
            <span class="loading loading-dots loading-lg text-primary"></span>
            <span class="mt-2 text-base-content/70">{"Loading"}</span>
        </div>
    }
}
