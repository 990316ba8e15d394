//! # Resolver Configuration
//!
//! Explicitly constructed configuration passed at startup. All settings
//! have sensible defaults and can be overridden via environment
//! variables; nothing here is process-wide mutable state.

use crate::constants::{DEFAULT_UNASSIGNED_PROJECT_LABEL, ENV_UNASSIGNED_PROJECT_LABEL};

/// Resolver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Project label used when an application has no team assigned
    pub unassigned_project_label: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            unassigned_project_label: DEFAULT_UNASSIGNED_PROJECT_LABEL.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            unassigned_project_label: env_var_or_default(
                ENV_UNASSIGNED_PROJECT_LABEL,
                DEFAULT_UNASSIGNED_PROJECT_LABEL.to_string(),
            ),
        }
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        let config = ResolverConfig::default();
        assert_eq!(config.unassigned_project_label, "unassigned-project");
    }
}
