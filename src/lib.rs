pub mod capabilities;
pub mod errors;
pub mod namespaces;
pub mod options;
pub mod scope;

pub use capabilities::{CapabilityRegistry, ResourceKind};
pub use errors::{Result, ScopeError};
pub use namespaces::{normalize, validate_namespace, NamespaceSet};
pub use options::{build_runtime_options, CacheOptions, RuntimeConfig, RuntimeOptions};
pub use scope::{resolve, NamespaceConfig, Scope, ALL_NAMESPACES};
