use goldentiger_core::types::ProductId;
use web_sys::{Event, HtmlInputElement, SubmitEvent};
use yew::{function_component, html, use_callback, use_state, Html, TargetCast};
use yew_router::prelude::use_navigator;

use crate::{navbar::NavBar, route::Route};

#[function_component(Catalog)]
pub fn catalog() -> Html {
    let navigator = use_navigator();
    let product_id = use_state(String::new);

    let on_product_id_change = use_callback(
        move |e: Event, product_id| {
            let input: HtmlInputElement = e.target_unchecked_into();
            product_id.set(input.value().trim().to_string());
        },
        product_id.clone(),
    );

    let onsubmit = {
        let product_id = product_id.clone();
        move |e: SubmitEvent| {
            e.prevent_default();

            if product_id.is_empty() {
                return;
            }
            let Some(navigator) = &navigator else {
                log::error!("catalog rendered outside of a router");
                return;
            };
            navigator.push(&Route::Product {
                id: ProductId::new((*product_id).clone()),
            });
        }
    };

    let is_submit_disabled = product_id.is_empty();

    html! {
        <NavBar>
            <div class="max-w-xs">
                <h1 class="text-xl mb-4">{ "Catalog" }</h1>
                <p class="mb-4">{ "No products to show yet." }</p>
                <form class="form-control w-full" {onsubmit}>
                    <input
                        type="text"
                        placeholder="Product ID"
                        class="input w-full mb-4"
                        onchange={on_product_id_change}
                    />
                    <input type="submit" class="btn" value="View product" disabled={is_submit_disabled} />
                </form>
            </div>
        </NavBar>
    }
}
