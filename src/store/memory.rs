//! # In-Memory Store
//!
//! A `HashMap`-backed implementation of all four store traits, loaded from
//! a serde fixture document. Backs `rbacctl` lookups and integration
//! tests; production deployments inject database-backed implementations
//! instead.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{App, AppStore, Cluster, ClusterStore, InstalledApp, InstalledAppStore, StoreError, Team, TeamStore};

/// Fixture document describing the full store contents
///
/// ```yaml
/// clusters:
///   - id: 1
///     name: prod-1
/// teams:
///   - id: 10
///     name: payments
/// apps:
///   - id: 100
///     name: checkout
///     team_id: 10
///     team_name: payments
/// installed_apps:
///   - id: 1000
///     app:
///       id: 100
///       name: checkout
///       team_id: 10
///       team_name: payments
///     environment_id: 7
///     environment:
///       id: 7
///       identifier: payments-prod
///       namespace: ns-a
///       cluster_id: 1
///       cluster_name: prod-1
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreFixture {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub apps: Vec<App>,
    #[serde(default)]
    pub installed_apps: Vec<InstalledApp>,
}

/// In-memory implementation of all four store traits
#[derive(Debug, Default)]
pub struct InMemoryStore {
    clusters: HashMap<i32, Cluster>,
    teams: HashMap<i32, Team>,
    apps_by_name: HashMap<String, App>,
    installed_by_id: HashMap<i32, InstalledApp>,
    installed: Vec<InstalledApp>,
}

impl InMemoryStore {
    /// Build a store from a fixture document
    pub fn from_fixture(fixture: StoreFixture) -> Self {
        let mut store = Self::default();
        for cluster in fixture.clusters {
            store.clusters.insert(cluster.id, cluster);
        }
        for team in fixture.teams {
            store.teams.insert(team.id, team);
        }
        for app in fixture.apps {
            store.apps_by_name.insert(app.name.clone(), app);
        }
        for installed in fixture.installed_apps {
            store.installed_by_id.insert(installed.id, installed.clone());
            store.installed.push(installed);
        }
        store
    }

    /// Load a store from a YAML fixture file
    pub fn from_yaml_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        let fixture: StoreFixture = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse fixture file {}", path.display()))?;
        Ok(Self::from_fixture(fixture))
    }

    /// Load a store from a JSON fixture string
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let fixture: StoreFixture =
            serde_json::from_str(raw).context("Failed to parse JSON fixture")?;
        Ok(Self::from_fixture(fixture))
    }
}

#[async_trait]
impl ClusterStore for InMemoryStore {
    async fn find_by_id(&self, cluster_id: i32) -> Result<Cluster, StoreError> {
        self.clusters
            .get(&cluster_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl TeamStore for InMemoryStore {
    async fn find_one(&self, team_id: i32) -> Result<Team, StoreError> {
        self.teams.get(&team_id).cloned().ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl AppStore for InMemoryStore {
    async fn find_app_and_project_by_app_name(&self, app_name: &str) -> Result<App, StoreError> {
        self.apps_by_name
            .get(app_name)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl InstalledAppStore for InMemoryStore {
    async fn find_by_cluster_namespace_and_app_name(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> Result<InstalledApp, StoreError> {
        self.installed
            .iter()
            .find(|installed| {
                installed.app.name == app_name
                    && installed.environment.as_ref().is_some_and(|env| {
                        env.cluster_id == cluster_id && env.namespace == namespace
                    })
            })
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_installed_app(&self, installed_app_id: i32) -> Result<InstalledApp, StoreError> {
        self.installed_by_id
            .get(&installed_app_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fixture() -> StoreFixture {
        StoreFixture {
            clusters: vec![Cluster {
                id: 1,
                name: "prod-1".to_string(),
            }],
            teams: vec![Team {
                id: 10,
                name: "payments".to_string(),
            }],
            apps: vec![App {
                id: 100,
                name: "checkout".to_string(),
                team_id: Some(10),
                team_name: Some("payments".to_string()),
            }],
            installed_apps: vec![],
        }
    }

    #[tokio::test]
    async fn test_lookup_hits_and_misses() {
        let store = InMemoryStore::from_fixture(sample_fixture());

        assert_eq!(store.find_by_id(1).await.unwrap().name, "prod-1");
        assert!(store.find_by_id(2).await.unwrap_err().is_not_found());

        assert_eq!(store.find_one(10).await.unwrap().name, "payments");
        assert!(store.find_one(11).await.unwrap_err().is_not_found());

        let app = store
            .find_app_and_project_by_app_name("checkout")
            .await
            .unwrap();
        assert_eq!(app.team_name.as_deref(), Some("payments"));
    }

    #[test]
    fn test_json_fixture_parses() {
        let raw = r#"{"clusters":[{"id":1,"name":"prod-1"}]}"#;
        let store = InMemoryStore::from_json_str(raw).unwrap();
        assert!(store.clusters.contains_key(&1));
    }
}
