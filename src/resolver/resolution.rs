//! # Resolution Outcomes
//!
//! Typed outcomes for the resolver's `try_*` layer. The legacy string
//! layer flattens these into the sentinel shapes the policy engine
//! already knows; callers wanting an explicit fail-open/fail-closed
//! decision consume `Unresolved` directly instead.

use thiserror::Error;

use super::name::ObjectName;
use crate::store::StoreError;

/// Why an object name could not be resolved
#[derive(Debug, Error)]
pub enum Unresolved {
    #[error("cluster {0} not found")]
    ClusterNotFound(i32),

    #[error("team {0} not found")]
    TeamNotFound(i32),

    #[error("installed app {0} not found")]
    InstalledAppNotFound(i32),

    /// Installed app exists but carries no joined environment record
    #[error("installed app {0} has no environment record")]
    EnvironmentMissing(i32),

    /// Unexpected backend failure from one of the stores
    #[error("store lookup failed: {0}")]
    Store(#[source] StoreError),
}

/// Primary object name plus an optional secondary namespace-based name
///
/// The secondary name is absent for virtual environments and whenever it
/// would duplicate the primary name's scope token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPair {
    pub primary: ObjectName,
    pub secondary: Option<ObjectName>,
}

impl ObjectPair {
    pub fn single(primary: ObjectName) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(primary: ObjectName, secondary: ObjectName) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Render to the `(rbac_one, rbac_two)` string pair, empty second
    /// element when no secondary name applies
    pub fn render(&self) -> (String, String) {
        (
            self.primary.render(),
            self.secondary
                .as_ref()
                .map(ObjectName::render)
                .unwrap_or_default(),
        )
    }
}
