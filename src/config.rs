//! Build-mode detection and API base URL selection.
//!
//! The backend runs on its own port during development, so the HTTP client
//! needs an absolute base URL there and a relative one in production where
//! the same origin serves both.

pub const DEV_MODE: &str = "development";

const DEV_API_BASE: &str = "http://127.0.0.1:8000";
const PROD_API_BASE: &str = "/";

/// The build-mode flag, resolved at compile time.
///
/// `APP_ENV` wins if it was set when the crate was built; otherwise debug
/// builds count as development and release builds as production.
pub fn build_mode() -> &'static str {
    match option_env!("APP_ENV") {
        Some(mode) => mode,
        None if cfg!(debug_assertions) => DEV_MODE,
        None => "production",
    }
}

/// Base URL for the given mode. Only `"development"` is special; every
/// other value gets the relative production base.
pub fn api_base_url(mode: &str) -> &'static str {
    if mode == DEV_MODE {
        DEV_API_BASE
    } else {
        PROD_API_BASE
    }
}

/// The base URL the running build should use.
pub fn default_api_base_url() -> &'static str {
    api_base_url(build_mode())
}
