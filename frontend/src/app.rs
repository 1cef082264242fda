use std::rc::Rc;

use goldentiger_core::{
    config::RouterConfig,
    route::{RouteTable, View},
};
use yew::{function_component, html, use_state, AttrValue, Html, Properties};
use yew_router::prelude::{use_location, BrowserRouter};

use crate::{
    config,
    not_found::NotFound,
    route::{switch, Route},
};

#[function_component(App)]
pub fn app() -> Html {
    let table = use_state(|| RouteTable::storefront(config::load()).map(Rc::new));

    match &*table {
        Ok(table) => {
            let basename = router_basename(table.config());
            html! {
                <BrowserRouter {basename}>
                    <Shell table={table.clone()} />
                </BrowserRouter>
            }
        }
        Err(error) => {
            log::error!("failed to build route table: {}", error);
            html! { <NotFound path={AttrValue::from("/")} /> }
        }
    }
}

/// Set even for `/`; an unset basename makes yew-router read `<base href>` itself.
fn router_basename(config: &RouterConfig) -> Option<AttrValue> {
    Some(AttrValue::from(config.basename().to_string()))
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    pub table: Rc<RouteTable<View>>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    log::debug!("navigated to {}", path);

    match props.table.resolve(&path).and_then(Route::from_match) {
        Some(route) => switch(route),
        None => {
            log::warn!("no route matches {}", path);
            html! { <NotFound path={AttrValue::from(path)} /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_basename_is_passed_explicitly() {
        let config = RouterConfig::from_json(r#"{"basename": "/"}"#).unwrap();
        assert_eq!(router_basename(&config), Some(AttrValue::from("/")));

        let config = RouterConfig::default().with_basename("shop/");
        assert_eq!(router_basename(&config), Some(AttrValue::from("/shop")));
    }
}
