//! # Object Name Values
//!
//! Canonical authorization-object names. Every name has the shape
//! `<project>/<scope>/<app>`, where the scope token is either an
//! environment identifier or a synthesized `<cluster>__<namespace>` pair.

use std::fmt;

use crate::constants::SCOPE_DELIMITER;
use crate::store::Environment;

/// Scope segment of an object name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The environment's own identifier
    Environment(String),
    /// Synthesized `<cluster>__<namespace>` token
    ClusterNamespace { cluster: String, namespace: String },
}

impl Scope {
    /// Scope token for an environment's backing cluster namespace
    pub fn cluster_namespace(cluster: impl Into<String>, namespace: impl Into<String>) -> Self {
        Scope::ClusterNamespace {
            cluster: cluster.into(),
            namespace: namespace.into(),
        }
    }

    /// True when this scope renders to the same token as the given
    /// environment's identifier
    pub fn matches_identifier(&self, environment: &Environment) -> bool {
        self.to_string() == environment.identifier
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Environment(identifier) => f.write_str(identifier),
            Scope::ClusterNamespace { cluster, namespace } => {
                write!(f, "{cluster}{SCOPE_DELIMITER}{namespace}")
            }
        }
    }
}

/// A fully resolved authorization-object name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName {
    pub project: String,
    pub scope: Scope,
    pub app: String,
}

impl ObjectName {
    pub fn new(project: impl Into<String>, scope: Scope, app: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            scope,
            app: app.into(),
        }
    }

    /// Render to the slash-delimited form consumed by the policy engine
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.project, self.scope, self.app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_namespace_scope_renders_with_delimiter() {
        let scope = Scope::cluster_namespace("prod-1", "ns-a");
        assert_eq!(scope.to_string(), "prod-1__ns-a");
    }

    #[test]
    fn test_object_name_renders_three_segments() {
        let name = ObjectName::new(
            "payments",
            Scope::Environment("payments-prod".to_string()),
            "checkout",
        );
        assert_eq!(name.render(), "payments/payments-prod/checkout");
    }

    #[test]
    fn test_scope_matches_identifier() {
        let env = Environment {
            id: 7,
            identifier: "prod-1__ns-a".to_string(),
            namespace: "ns-a".to_string(),
            cluster_id: 1,
            cluster_name: "prod-1".to_string(),
            is_virtual: false,
        };
        assert!(Scope::cluster_namespace("prod-1", "ns-a").matches_identifier(&env));
        assert!(!Scope::cluster_namespace("prod-1", "ns-b").matches_identifier(&env));
    }
}
