use crate::errors::{Result, ScopeError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest name a DNS-1123 label may have.
pub const MAX_NAMESPACE_LEN: usize = 63;

/// Ordered, duplicate-free list of namespace names.
///
/// Order is first occurrence in the raw declaration. An empty set means
/// "zero namespaces named", which is not the same thing as "all namespaces".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceSet {
    names: Vec<String>,
}

impl NamespaceSet {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl fmt::Display for NamespaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.iter().join(","))
    }
}

impl<'a> IntoIterator for &'a NamespaceSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl IntoIterator for NamespaceSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Split a comma-separated namespace list into a [`NamespaceSet`].
///
/// Segments are trimmed, empty segments are dropped and repeats keep their
/// first position. Never fails: `""`, `",,"` and `" , "` all give an empty set.
pub fn normalize(raw: &str) -> NamespaceSet {
    let names = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unique()
        .map(str::to_owned)
        .collect();
    NamespaceSet { names }
}

/// Check `name` against the Kubernetes DNS-1123 label rules.
pub fn validate_namespace(name: &str) -> Result<()> {
    let invalid = |reason: &str| ScopeError::InvalidNamespace {
        name: name.to_owned(),
        reason: reason.to_owned(),
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.len() > MAX_NAMESPACE_LEN {
        return Err(invalid("must be no more than 63 characters"));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(invalid(
            "must consist of lower case alphanumeric characters or '-'",
        ));
    }
    // Both ends checked on bytes; the charset check above guarantees ASCII.
    let bytes = name.as_bytes();
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return Err(invalid("must start and end with an alphanumeric character"));
    }
    Ok(())
}
