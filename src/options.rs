use crate::capabilities::CapabilityRegistry;
use crate::errors::Result;
use crate::namespaces::{normalize, validate_namespace};
use crate::scope::{resolve, NamespaceConfig, ALL_NAMESPACES};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

/// Startup settings already extracted from flags or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Comma-separated namespaces; empty watches all of them.
    #[serde(default)]
    pub watch_namespace: String,
    /// Reject names that are not DNS-1123 labels.
    #[serde(default)]
    pub validate_namespaces: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            watch_namespace: ALL_NAMESPACES.to_owned(),
            validate_namespaces: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// `None` caches every namespace.
    pub default_namespaces: Option<HashMap<String, NamespaceConfig>>,
}

/// Options handed to the watch/cache runtime at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeOptions {
    pub cache: CacheOptions,
    /// Number of resource kinds the runtime was given.
    pub known_kinds: usize,
}

/// Project a [`RuntimeConfig`] into [`RuntimeOptions`].
///
/// Errors from resolution and from the opt-in name validation are returned
/// as-is; the caller decides whether to abort startup.
pub fn build_runtime_options(
    cfg: &RuntimeConfig,
    capabilities: &CapabilityRegistry,
) -> Result<RuntimeOptions> {
    if cfg.validate_namespaces {
        for ns in &normalize(&cfg.watch_namespace) {
            validate_namespace(ns)?;
        }
    }

    let scope = resolve(&cfg.watch_namespace, capabilities)?;
    trace!(?scope, "resolved cache scope");

    Ok(RuntimeOptions {
        cache: CacheOptions {
            default_namespaces: scope.into_namespaces(),
        },
        known_kinds: capabilities.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScopeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_watches_everything() {
        let opts =
            build_runtime_options(&RuntimeConfig::default(), &CapabilityRegistry::new()).unwrap();
        assert_eq!(opts.cache.default_namespaces, None);
        assert_eq!(opts.known_kinds, 0);
    }

    #[test]
    fn validation_is_off_by_default() {
        let cfg = RuntimeConfig {
            watch_namespace: "Not_A_Label".into(),
            ..Default::default()
        };
        let opts = build_runtime_options(&cfg, &CapabilityRegistry::new()).unwrap();
        let map = opts.cache.default_namespaces.unwrap();
        assert!(map.contains_key("Not_A_Label"));
    }

    #[test]
    fn validation_error_propagates() {
        let cfg = RuntimeConfig {
            watch_namespace: "default, Bad_NS".into(),
            validate_namespaces: true,
        };
        let err = build_runtime_options(&cfg, &CapabilityRegistry::new()).unwrap_err();
        assert!(matches!(err, ScopeError::InvalidNamespace { ref name, .. } if name == "Bad_NS"));
    }
}
