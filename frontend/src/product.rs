use goldentiger_core::types::ProductId;
use yew::{function_component, html, Html, Properties};
use yew_router::prelude::Link;

use crate::{navbar::NavBar, route::Route};

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: ProductId,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    html! {
        <NavBar>
            <div class="max-w-xs">
                <h1 class="text-xl mb-4">{ "Product" }</h1>
                <div class="w-full mb-4 font-mono break-all">{ props.id.to_string() }</div>
                <Link<Route> to={Route::Catalog} classes="btn">{ "Back to catalog" }</Link<Route>>
            </div>
        </NavBar>
    }
}
