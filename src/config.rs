//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled and fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage slot holding the durable session projection.
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "auth-storage";
/// Prefix for REST endpoints.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Namespace key of the durable session slot.
    pub storage_key: String,
    /// REST prefix without a trailing slash.
    pub api_base: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }
}

impl SessionConfig {
    /// Build config from compile-time environment overrides.
    ///
    /// Optional:
    /// - `ROADREADY_SESSION_KEY`: default `auth-storage`
    /// - `ROADREADY_API_BASE`: default `/api`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("ROADREADY_SESSION_KEY"), option_env!("ROADREADY_API_BASE"))
    }

    fn from_overrides(storage_key: Option<&str>, api_base: Option<&str>) -> Self {
        let storage_key = storage_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_SESSION_STORAGE_KEY)
            .to_owned();
        let api_base = api_base
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        Self { storage_key, api_base }
    }

    /// Join `path` onto the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
