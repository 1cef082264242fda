use yew::{function_component, html, AttrValue, Html, Properties};
use yew_router::prelude::Link;

use crate::{navbar::NavBar, route::Route};

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub path: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <NavBar>
            <div class="max-w-xs text-center">
                <h1 class="text-xl mb-4">{ "Page not found" }</h1>
                <p class="mb-4 break-all">{ props.path.to_string() }</p>
                <Link<Route> to={Route::Catalog} classes="btn">{ "Back to catalog" }</Link<Route>>
            </div>
        </NavBar>
    }
}
