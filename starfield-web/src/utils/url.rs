//! URL utility functions for reading query parameters

use lib_starfield::{StarfieldConfig, Variant};
use web_sys::window;

/// Get a query parameter from the current URL
/// Reads directly from window.location.search, so it works outside the router too
pub fn get_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let search = window.location().search().ok()?;

    if search.is_empty() {
        return None;
    }

    // Remove leading '?' if present
    let query_string = search.strip_prefix('?').unwrap_or(&search);

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
            // Parameter present without a value
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}

/// The variant's preset with `?config=<json>` overrides applied, if present.
/// Invalid overrides are logged and ignored.
pub fn starfield_config(variant: Variant) -> StarfieldConfig {
    let Some(json) = get_query_param("config") else {
        return variant.preset();
    };

    match variant.preset().apply_json(&json) {
        Ok(config) => {
            log::info!("Using starfield config override: {config:?}");
            config
        }
        Err(err) => {
            log::warn!("Ignoring ?config override: {err}");
            variant.preset()
        }
    }
}
