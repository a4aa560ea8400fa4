use std::env;
use std::time::Duration;

/// Collection segment used for each REST resource, for every verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePaths {
    pub users: String,
    pub stores: String,
    pub traders: String,
    pub product_models: String,
    pub products: String,
    pub tradings: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            users: "users".to_string(),
            stores: "stores".to_string(),
            traders: "traders".to_string(),
            product_models: "productmodels".to_string(),
            products: "products".to_string(),
            tradings: "tradings".to_string(),
        }
    }
}

impl ResourcePaths {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            users: segment_var("REST_PATH_USERS", defaults.users),
            stores: segment_var("REST_PATH_STORES", defaults.stores),
            traders: segment_var("REST_PATH_TRADERS", defaults.traders),
            product_models: segment_var("REST_PATH_PRODUCT_MODELS", defaults.product_models),
            products: segment_var("REST_PATH_PRODUCTS", defaults.products),
            tradings: segment_var("REST_PATH_TRADINGS", defaults.tradings),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RestConfig {
    pub base_url: String,
    /// No timeout unless `REST_TIMEOUT_SECS` is set.
    pub timeout: Option<Duration>,
    pub paths: ResourcePaths,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: None,
            paths: ResourcePaths::default(),
        }
    }
}

impl RestConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("REST_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            timeout: env::var("REST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            paths: ResourcePaths::from_env(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

fn segment_var(key: &str, default: String) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().trim_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
