//! # Helm RBAC Resolver
//!
//! Derives authorization-object names for Helm-installed applications.
//!
//! ## Overview
//!
//! Given identifiers for a cluster, namespace, application, team, and
//! (optionally) an installed-application record, the resolver produces
//! one or two canonical `<project>/<scope>/<app>` strings to check
//! against a policy engine:
//!
//! 1. **Multi-source fallback** - CLI-registered apps without an
//!    installed-app record fall back to the app's own team assignment
//! 2. **Scope synthesis** - the scope token is the environment
//!    identifier when one exists, otherwise `<cluster>__<namespace>`
//! 3. **Virtual environments** - never receive a namespace-scoped
//!    secondary name
//! 4. **Fail-closed sentinels** - lookup failures render to degenerate
//!    empty-segment strings that authorization callers must treat as a
//!    deny; the typed `try_*` layer exposes the failure reason instead
//!
//! Data stores are injected as read-only trait objects; the resolver
//! itself is stateless and safe to share across request handlers.

pub mod config;
pub mod constants;
pub mod resolver;
pub mod store;

pub use config::ResolverConfig;
pub use resolver::{ObjectName, ObjectPair, ObjectResolver, Scope, Unresolved};
pub use store::{
    App, AppStore, Cluster, ClusterStore, Environment, InMemoryStore, InstalledApp,
    InstalledAppStore, StoreError, StoreFixture, Team, TeamStore,
};
