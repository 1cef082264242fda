use std::collections::BTreeMap;

use crate::{
    config::RouterConfig,
    error::{PatternError, ReverseError},
    pattern::PathPattern,
};

/// Name of the parameter the product detail route binds.
pub const PRODUCT_ID_PARAM: &str = "id";

/// Page-level views of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Catalog,
    ProductDetail,
}

impl View {
    /// Every view, in registration order.
    pub const ALL: [View; 2] = [View::Catalog, View::ProductDetail];

    pub fn pattern(self) -> &'static str {
        match self {
            View::Catalog => "/",
            View::ProductDetail => "/product/:id",
        }
    }
}

/// Parameters bound from a matched path. Values are percent-decoded and
/// otherwise left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pattern: PathPattern,
    view: V,
}

impl<V> Route<V> {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<V> {
    pub view: V,
    pub params: Params,
}

/// Ordered route table. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<V> {
    config: RouterConfig,
    routes: Vec<Route<V>>,
}

impl<V: Clone + PartialEq> RouteTable<V> {
    pub fn new(config: RouterConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
        }
    }

    pub fn route(mut self, pattern: &str, view: V) -> Result<Self, PatternError> {
        let pattern = PathPattern::parse(pattern)?;
        self.routes.push(Route { pattern, view });
        Ok(self)
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// Resolves a browser location (path, optionally followed by a query or
    /// hash) to the first route that matches it.
    pub fn resolve(&self, location: &str) -> Option<Match<V>> {
        let path = strip_query_and_hash(location);
        let path = if path.is_empty() { "/" } else { path };
        let Some(path) = self.config.strip_basename(path) else {
            log::trace!("location {location:?} is outside basename {:?}", self.config.basename());
            return None;
        };

        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path, &self.config) {
                log::trace!("location {location:?} matched {:?}", route.pattern.as_str());
                return Some(Match {
                    view: route.view.clone(),
                    params,
                });
            }
        }

        log::trace!("location {location:?} matched no route");
        None
    }

    /// Builds the location of `view`, basename included.
    pub fn path_for(&self, view: &V, params: &Params) -> Result<String, ReverseError> {
        let route = self
            .routes
            .iter()
            .find(|r| &r.view == view)
            .ok_or(ReverseError::UnknownView)?;
        let path = route.pattern.render(params)?;

        Ok(match self.config.basename() {
            "/" => path,
            basename => format!("{basename}{path}"),
        })
    }
}

impl RouteTable<View> {
    /// The storefront table: catalog at `/`, product detail at `/product/:id`.
    pub fn storefront(config: RouterConfig) -> Result<Self, PatternError> {
        View::ALL
            .into_iter()
            .try_fold(Self::new(config), |table, view| {
                table.route(view.pattern(), view)
            })
    }
}

fn strip_query_and_hash(location: &str) -> &str {
    match location.find(['?', '#']) {
        Some(idx) => &location[..idx],
        None => location,
    }
}
