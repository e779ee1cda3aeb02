//! Endpoint configuration for the session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no runtime environment, so the only knob is the
//! compile-time `OTA_API_BASE` variable. An empty base keeps every call
//! same-origin, which is how the app is deployed behind the API server.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_ME_PATH: &str = "/api/v1/auth/me";
const DEFAULT_LOGOUT_PATH: &str = "/api/v1/auth/logout";
const DEFAULT_PROVIDER_LOGIN_PATH: &str = "/api/v1/auth/kakao/login";

/// Where the session endpoints live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host prefix, or empty for same-origin requests.
    pub api_base: String,
    /// `GET` current-user endpoint.
    pub me_path: String,
    /// `POST` logout endpoint.
    pub logout_path: String,
    /// Full-page redirect target that starts the provider sign-in flow.
    pub provider_login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            me_path: DEFAULT_ME_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            provider_login_path: DEFAULT_PROVIDER_LOGIN_PATH.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Defaults, with `api_base` taken from `OTA_API_BASE` at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("OTA_API_BASE").unwrap_or_default())
    }

    /// Defaults rooted at `api_base`.
    #[must_use]
    pub fn with_base(api_base: &str) -> Self {
        Self { api_base: api_base.trim().to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn me_url(&self) -> String {
        join_url(&self.api_base, &self.me_path)
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        join_url(&self.api_base, &self.logout_path)
    }

    #[must_use]
    pub fn provider_login_url(&self) -> String {
        join_url(&self.api_base, &self.provider_login_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
