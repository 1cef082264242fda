//! Route-to-view dispatch for the Golden Tiger storefront.
//!
//! A [`route::RouteTable`] is built once at startup and answers, for any
//! browser location, which page-level [`route::View`] is active and which
//! parameters it receives.

pub mod config;
pub mod error;
pub mod pattern;
pub mod route;
pub mod types;
