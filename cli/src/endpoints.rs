//! Staging deployment locations.

/// API service on Render.
pub const API_BASE_URL: &str = "https://shadow-goose-api-staging.onrender.com";

/// Web frontend on Render.
pub const WEB_BASE_URL: &str = "https://shadow-goose-web-staging.onrender.com";

/// API base URL, overridable via `SHADOWGOOSE_API_URL` for tests.
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("SHADOWGOOSE_API_URL").unwrap_or_else(|_| API_BASE_URL.to_string())
}

/// Frontend base URL, overridable via `SHADOWGOOSE_WEB_URL` for tests.
#[must_use]
pub fn web_base_url() -> String {
    std::env::var("SHADOWGOOSE_WEB_URL").unwrap_or_else(|_| WEB_BASE_URL.to_string())
}
