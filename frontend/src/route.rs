use std::collections::HashMap;

use anyhow::{Context, Result};
use goldentiger_core::{
    config::RouterConfig,
    route::{Match, Params, RouteTable, View},
    types::ProductId,
};
use yew::{html, Html};
use yew_router::Routable;

use crate::{catalog::Catalog, product::ProductDetail};

/// Link and navigation target for the storefront views.
#[derive(Clone, PartialEq, Debug)]
pub enum Route {
    Catalog,
    Product { id: ProductId },
}

impl Route {
    pub fn from_match(matched: Match<View>) -> Option<Self> {
        match matched.view {
            View::Catalog => Some(Route::Catalog),
            View::ProductDetail => {
                ProductId::from_params(&matched.params).map(|id| Route::Product { id })
            }
        }
    }

    fn target(&self) -> (View, Params) {
        match self {
            Route::Catalog => (View::Catalog, Params::new()),
            Route::Product { id } => (View::ProductDetail, id.to_params()),
        }
    }

    // Paths are built without the basename; yew-router prefixes it.
    fn try_to_path(&self) -> Result<String> {
        let (view, params) = self.target();
        RouteTable::storefront(RouterConfig::default())
            .context("failed to build route table")?
            .path_for(&view, &params)
            .with_context(|| format!("failed to build path for {:?}", self))
    }
}

impl Routable for Route {
    fn from_path(path: &str, params: &HashMap<&str, &str>) -> Option<Self> {
        let view = View::ALL.into_iter().find(|view| view.pattern() == path)?;
        let params = params.iter().map(|(k, v)| (*k, *v)).collect();
        Route::from_match(Match { view, params })
    }

    fn to_path(&self) -> String {
        self.try_to_path().unwrap_or_else(|error| {
            log::error!("{:?}", error);
            "/".to_string()
        })
    }

    fn routes() -> Vec<&'static str> {
        View::ALL.into_iter().map(View::pattern).collect()
    }

    fn not_found_route() -> Option<Self> {
        None
    }

    fn recognize(pathname: &str) -> Option<Self> {
        RouteTable::storefront(RouterConfig::default())
            .ok()?
            .resolve(pathname)
            .and_then(Route::from_match)
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Catalog => html! { <Catalog /> },
        Route::Product { id } => html! { <ProductDetail {id} /> },
    }
}
