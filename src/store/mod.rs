//! # Data Stores
//!
//! Entities and collaborator interfaces the resolver reads from. The
//! resolver never creates, mutates, or deletes records; every trait here
//! is a read-only lookup. Implementations are injected as trait objects
//! so production code can back them with a database client while tests
//! and the CLI use [`InMemoryStore`].

mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::{InMemoryStore, StoreFixture};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A cluster record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Cluster {
    pub id: i32,
    pub name: String,
}

/// A team (project) record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

/// An application record with its project join
///
/// `team_id` is `None` for applications with no project association
/// (registered via CLI and never assigned). `team_name` carries the
/// joined team name when `team_id` is set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct App {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub team_name: Option<String>,
}

impl App {
    /// True when no project is associated with this application
    pub fn is_unassigned(&self) -> bool {
        self.team_id.is_none()
    }
}

/// An environment record with its cluster join
///
/// `identifier` is the human-readable environment identifier used as the
/// primary scope token in object names. Virtual environments have no real
/// cluster namespace backing, so no namespace-based object name applies
/// to them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Environment {
    pub id: i32,
    pub identifier: String,
    pub namespace: String,
    pub cluster_id: i32,
    pub cluster_name: String,
    #[serde(default)]
    pub is_virtual: bool,
}

/// A record linking an application to a deployment target
///
/// `environment_id` is `None` while the installed app has not been fully
/// provisioned into an environment; `environment` carries the joined
/// record once it has.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstalledApp {
    pub id: i32,
    pub app: App,
    #[serde(default)]
    pub environment_id: Option<i32>,
    #[serde(default)]
    pub environment: Option<Environment>,
}

/// Read-only cluster lookups
#[async_trait]
pub trait ClusterStore: Send + Sync {
    async fn find_by_id(&self, cluster_id: i32) -> Result<Cluster, StoreError>;
}

/// Read-only team lookups
#[async_trait]
pub trait TeamStore: Send + Sync {
    async fn find_one(&self, team_id: i32) -> Result<Team, StoreError>;
}

/// Read-only application lookups
#[async_trait]
pub trait AppStore: Send + Sync {
    /// Find an application by name, with its project join populated
    async fn find_app_and_project_by_app_name(&self, app_name: &str) -> Result<App, StoreError>;
}

/// Read-only installed-application lookups
#[async_trait]
pub trait InstalledAppStore: Send + Sync {
    /// Find the installed app deployed to (cluster, namespace) under the
    /// given application name
    async fn find_by_cluster_namespace_and_app_name(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> Result<InstalledApp, StoreError>;

    /// Fetch an installed app by id, with app and environment joins
    async fn get_installed_app(&self, installed_app_id: i32) -> Result<InstalledApp, StoreError>;
}
