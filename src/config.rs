//! Lab service endpoint configuration.
//!
//! The WASM bundle has no process environment at runtime, so the base URL is
//! fixed at compile time through `LAB_API_BASE_URL`. Unset or blank means the
//! same-origin `/api` prefix.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the compile-time `LAB_API_BASE_URL` value.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LAB_API_BASE_URL"))
    }

    /// Build config from an optional raw base URL.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_owned();
        Self { base_url }
    }

    /// `GET`/`POST` collection endpoint.
    pub fn labs_endpoint(&self) -> String {
        format!("{}/labs", self.base_url)
    }

    /// Single-lab endpoint addressed by nickname.
    pub fn lab_endpoint(&self, nickname: &str) -> String {
        format!("{}/labs/{nickname}", self.base_url)
    }
}
