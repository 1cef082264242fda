use yew::{function_component, html, Children, Html, Properties};
use yew_router::prelude::Link;

use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub children: Children,
}

#[function_component(NavBar)]
pub fn navbar(props: &NavBarProps) -> Html {
    html! {
        <>
            <div class="bg-gray-100">
                <div class="container mx-auto navbar">
                    <div class="flex-1">
                        <Link<Route> to={Route::Catalog} classes="font-bold normal-case text-xl">
                            { "Golden Tiger" }
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <div class="h-[calc(100vh-4rem)] w-full bg-gray-200 flex items-center justify-center">
                { for props.children.iter() }
            </div>
        </>
    }
}
