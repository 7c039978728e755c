use crate::routes::{switch, MainRoute};
use yew::prelude::*;
use yew_router::prelude::*;

/// Application root: router plus the route switch. The header and the
/// global message banner live in the [`crate::containers::layout::Layout`]
/// every routed page is wrapped in.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
