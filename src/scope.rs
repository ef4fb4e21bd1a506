use crate::capabilities::CapabilityRegistry;
use crate::errors::Result;
use crate::namespaces::{normalize, NamespaceSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The raw declaration that means "watch every namespace".
pub const ALL_NAMESPACES: &str = "";

/// Per-namespace cache settings. Carries no fields yet; reserved for
/// overrides such as label or field selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {}

/// What the watch/cache layer should observe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Watch and cache everything.
    Unscoped,
    /// Watch exactly these namespaces, one cache config each.
    Scoped(HashMap<String, NamespaceConfig>),
}

impl Scope {
    /// Build a scoped value with a default config per namespace.
    pub fn from_namespaces(namespaces: &NamespaceSet) -> Self {
        let map = namespaces
            .iter()
            .map(|ns| (ns.clone(), NamespaceConfig::default()))
            .collect();
        Scope::Scoped(map)
    }

    pub fn is_unscoped(&self) -> bool {
        matches!(self, Scope::Unscoped)
    }

    /// Per-namespace map, or `None` when unscoped.
    pub fn namespaces(&self) -> Option<&HashMap<String, NamespaceConfig>> {
        match self {
            Scope::Unscoped => None,
            Scope::Scoped(map) => Some(map),
        }
    }

    pub fn into_namespaces(self) -> Option<HashMap<String, NamespaceConfig>> {
        match self {
            Scope::Unscoped => None,
            Scope::Scoped(map) => Some(map),
        }
    }
}

/// Resolve a raw scope declaration into a [`Scope`].
///
/// The all-namespaces sentinel is matched before normalization: `""` is
/// unscoped, while `","` or `" "` normalize to an empty scoped map.
/// `capabilities` is accepted but does not influence the result.
pub fn resolve(raw: &str, capabilities: &CapabilityRegistry) -> Result<Scope> {
    if raw == ALL_NAMESPACES {
        debug!(kinds = capabilities.len(), "watching all namespaces");
        return Ok(Scope::Unscoped);
    }

    let namespaces = normalize(raw);
    debug!(
        count = namespaces.len(),
        namespaces = %namespaces,
        kinds = capabilities.len(),
        "watching explicit namespaces"
    );
    Ok(Scope::from_namespaces(&namespaces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scoped(names: &[&str]) -> Scope {
        Scope::Scoped(
            names
                .iter()
                .map(|n| (n.to_string(), NamespaceConfig::default()))
                .collect(),
        )
    }

    #[test]
    fn sentinel_is_unscoped() {
        let caps = CapabilityRegistry::new();
        assert_eq!(resolve("", &caps).unwrap(), Scope::Unscoped);
    }

    #[test]
    fn single_namespace() {
        let caps = CapabilityRegistry::new();
        assert_eq!(resolve("default", &caps).unwrap(), scoped(&["default"]));
    }

    #[test]
    fn blank_list_is_scoped_to_nothing() {
        let caps = CapabilityRegistry::new();
        for raw in [" ", ",", " , ,"] {
            let scope = resolve(raw, &caps).unwrap();
            assert!(!scope.is_unscoped(), "{raw:?} must not widen to all namespaces");
            assert_eq!(scope, scoped(&[]));
        }
    }

    #[test]
    fn accessors() {
        assert!(Scope::Unscoped.namespaces().is_none());
        let s = scoped(&["a", "b"]);
        assert_eq!(s.namespaces().map(|m| m.len()), Some(2));
        assert!(s.into_namespaces().unwrap().contains_key("b"));
    }
}
