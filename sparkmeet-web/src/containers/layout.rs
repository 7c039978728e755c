use crate::components::message_banner::MessageBanner;
use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub current_route: MainRoute,
    #[prop_or_default]
    pub children: Children,
}

/// Shared page chrome: header, global message banner, page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <Header current_route={props.current_route.clone()} />
            <MessageBanner />
            <main class="container mx-auto p-4">
                { for props.children.iter() }
            </main>
        </div>
    }
}
