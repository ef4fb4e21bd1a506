use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type and shape information for one watched resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKind {
    /// API group; empty for the core group.
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Whether objects of this kind live inside a namespace.
    pub namespaced: bool,
}

impl ResourceKind {
    pub fn new(group: &str, version: &str, kind: &str, namespaced: bool) -> Self {
        Self {
            group: group.to_owned(),
            version: version.to_owned(),
            kind: kind.to_owned(),
            namespaced,
        }
    }

    /// `group/version/Kind`, or `version/Kind` for the core group.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}/{}", self.version, self.kind)
        } else {
            write!(f, "{}/{}/{}", self.group, self.version, self.kind)
        }
    }
}

/// Thread-safe registry of resource kinds known to the runtime.
///
/// Passed explicitly to the resolver instead of living in a process-wide
/// global. Clones share storage until one of them registers a new kind.
#[derive(Clone, Default, Debug)]
pub struct CapabilityRegistry {
    inner: Arc<HashMap<String, ResourceKind>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_core_kinds() -> Self {
        let mut reg = Self::new();
        reg.register(ResourceKind::new("", "v1", "Pod", true));
        reg.register(ResourceKind::new("", "v1", "Service", true));
        reg.register(ResourceKind::new("", "v1", "ConfigMap", true));
        reg.register(ResourceKind::new("", "v1", "Secret", true));
        reg.register(ResourceKind::new("", "v1", "Namespace", false));
        reg.register(ResourceKind::new("apps", "v1", "Deployment", true));
        reg
    }

    /// Add or replace a kind, keyed by [`ResourceKind::key`].
    pub fn register(&mut self, kind: ResourceKind) {
        let map = Arc::make_mut(&mut self.inner);
        map.insert(kind.key(), kind);
    }

    pub fn get(&self, key: &str) -> Option<&ResourceKind> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Namespaced kinds, sorted by key.
    pub fn namespaced_kinds(&self) -> Vec<&ResourceKind> {
        let mut kinds: Vec<_> = self.inner.values().filter(|k| k.namespaced).collect();
        kinds.sort_by_key(|k| k.key());
        kinds
    }
}
