use anyhow::{anyhow, Context, Result};
use goldentiger_core::config::RouterConfig;
use web_sys::Document;

const CONFIG_META_NAME: &str = "goldentiger-router";

/// Loads the router config from the `goldentiger-router` meta tag, taking the
/// basename from `<base href>` when the tag does not set one.
pub fn load() -> RouterConfig {
    let config = match read_meta() {
        Ok(Some(config)) => config,
        Ok(None) => RouterConfig::default(),
        Err(error) => {
            log::warn!("failed to load router config, using defaults: {:?}", error);
            RouterConfig::default()
        }
    };

    if config.basename.is_some() {
        return config;
    }
    match base_href() {
        Some(href) => config.with_basename(&href),
        None => config,
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .context("no global window")?
        .document()
        .context("window has no document")
}

fn read_meta() -> Result<Option<RouterConfig>> {
    let selector = format!(r#"meta[name="{CONFIG_META_NAME}"]"#);
    let meta = document()?
        .query_selector(&selector)
        .map_err(|error| anyhow!("failed to query {selector}: {:?}", error))?;
    let Some(content) = meta.and_then(|meta| meta.get_attribute("content")) else {
        return Ok(None);
    };
    RouterConfig::from_json(&content)
        .map(Some)
        .context("failed to parse router config")
}

fn base_href() -> Option<String> {
    let href = document()
        .ok()?
        .query_selector("base")
        .ok()??
        .get_attribute("href")?;
    if href.starts_with('/') {
        Some(href)
    } else {
        // absolute URLs are left to yew-router
        log::warn!("ignoring non-path base href: {}", href);
        None
    }
}
