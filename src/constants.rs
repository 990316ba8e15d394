//! # Constants
//!
//! Sentinel shapes, default labels, and environment variable names used
//! throughout the resolver.

/// Default project label applied when an application has no team assigned
pub const DEFAULT_UNASSIGNED_PROJECT_LABEL: &str = "unassigned-project";

/// Delimiter joining cluster name and namespace into a scope token
pub const SCOPE_DELIMITER: &str = "__";

/// Degenerate object name emitted when a lookup fails: three empty
/// segments joined by `/`. Downstream authorization checks must treat
/// this as a deny, never as a wildcard.
pub const EMPTY_OBJECT: &str = "//";

/// Environment variable overriding the unassigned-project label
pub const ENV_UNASSIGNED_PROJECT_LABEL: &str = "RBAC_UNASSIGNED_PROJECT_LABEL";
