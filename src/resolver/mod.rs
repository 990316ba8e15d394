//! # RBAC Object Name Resolver
//!
//! Derives one or two authorization-object names for a
//! (cluster, namespace, app) or installed-app context, handling the
//! fallback paths for CLI-registered apps that have not been linked yet.
//!
//! Two layers:
//!
//! - the `try_*` methods return typed [`Result`]s so callers can decide
//!   fail-open/fail-closed explicitly;
//! - the legacy string methods flatten failures into the exact sentinel
//!   shapes the policy engine compares against (`"//"` or the empty
//!   string, depending on the operation). A sentinel must be treated as
//!   a deny, never as a wildcard.
//!
//! The resolver is stateless aside from read-only store calls and safe
//! to share across request handlers.

pub mod name;
pub mod resolution;

pub use name::{ObjectName, Scope};
pub use resolution::{ObjectPair, Unresolved};

use std::sync::Arc;

use tracing::error;

use crate::config::ResolverConfig;
use crate::constants::EMPTY_OBJECT;
use crate::store::{App, AppStore, ClusterStore, InstalledApp, InstalledAppStore, StoreError, TeamStore};

/// Resolves authorization-object names against the injected stores
pub struct ObjectResolver {
    config: ResolverConfig,
    clusters: Arc<dyn ClusterStore>,
    teams: Arc<dyn TeamStore>,
    apps: Arc<dyn AppStore>,
    installed_apps: Arc<dyn InstalledAppStore>,
}

impl std::fmt::Debug for ObjectResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ObjectResolver {
    pub fn new(
        config: ResolverConfig,
        clusters: Arc<dyn ClusterStore>,
        teams: Arc<dyn TeamStore>,
        apps: Arc<dyn AppStore>,
        installed_apps: Arc<dyn InstalledAppStore>,
    ) -> Self {
        Self {
            config,
            clusters,
            teams,
            apps,
            installed_apps,
        }
    }

    /// Project label for an application, falling back to the
    /// unassigned-project label when no team is associated
    fn project_label(&self, app: &App) -> String {
        match (&app.team_id, &app.team_name) {
            (Some(_), Some(team_name)) => team_name.clone(),
            _ => self.config.unassigned_project_label.clone(),
        }
    }

    fn unassigned_label(&self) -> String {
        self.config.unassigned_project_label.clone()
    }

    // ---- typed layer -------------------------------------------------

    /// Resolve `<unassigned>/<cluster>__<namespace>/<app>` for a cluster
    pub async fn try_object_by_cluster(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> Result<ObjectName, Unresolved> {
        let cluster = self
            .clusters
            .find_by_id(cluster_id)
            .await
            .map_err(|err| cluster_unresolved(cluster_id, err))?;
        Ok(ObjectName::new(
            self.unassigned_label(),
            Scope::cluster_namespace(cluster.name, namespace),
            app_name,
        ))
    }

    /// Resolve `<team>/<cluster>__<namespace>/<app>`; both lookups must
    /// succeed
    pub async fn try_object_by_team_and_cluster(
        &self,
        team_id: i32,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> Result<ObjectName, Unresolved> {
        let cluster = self
            .clusters
            .find_by_id(cluster_id)
            .await
            .map_err(|err| cluster_unresolved(cluster_id, err))?;
        let team = self
            .teams
            .find_one(team_id)
            .await
            .map_err(|err| team_unresolved(team_id, err))?;
        Ok(ObjectName::new(
            team.name,
            Scope::cluster_namespace(cluster.name, namespace),
            app_name,
        ))
    }

    /// Resolve names for a (cluster, namespace, app) context, falling
    /// back through the installed-app record when present
    ///
    /// Decision tree:
    /// 1. no installed-app record (CLI-registered, not linked): project
    ///    comes from the app's own team assignment, single
    ///    namespace-scoped name;
    /// 2. installed app present, app unassigned: namespace-scoped
    ///    primary plus environment-scoped secondary, both under the
    ///    unassigned label;
    /// 3. installed app present, team assigned, environment not yet
    ///    provisioned: single namespace-scoped name;
    /// 4. installed app present, team and environment set:
    ///    environment-scoped primary, namespace-scoped secondary unless
    ///    the environment is virtual.
    pub async fn try_object_by_cluster_namespace_and_app_name(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> Result<ObjectPair, Unresolved> {
        let installed = match self
            .installed_apps
            .find_by_cluster_namespace_and_app_name(cluster_id, namespace, app_name)
            .await
        {
            Ok(installed) => Some(installed),
            Err(StoreError::NotFound) => None,
            Err(err) => return Err(Unresolved::Store(err)),
        };

        let cluster = self
            .clusters
            .find_by_id(cluster_id)
            .await
            .map_err(|err| cluster_unresolved(cluster_id, err))?;
        let namespace_scope = Scope::cluster_namespace(cluster.name, namespace);

        let Some(installed) = installed else {
            // CLI-registered app not yet linked to an installed-app
            // record; a missing app record counts as unassigned
            let project = match self.apps.find_app_and_project_by_app_name(app_name).await {
                Ok(app) => self.project_label(&app),
                Err(StoreError::NotFound) => self.unassigned_label(),
                Err(err) => return Err(Unresolved::Store(err)),
            };
            return Ok(ObjectPair::single(ObjectName::new(
                project,
                namespace_scope,
                app_name,
            )));
        };

        if installed.app.is_unassigned() {
            let environment = joined_environment(&installed)?;
            return Ok(ObjectPair::with_secondary(
                ObjectName::new(self.unassigned_label(), namespace_scope, app_name),
                ObjectName::new(
                    self.unassigned_label(),
                    Scope::Environment(environment.identifier.clone()),
                    app_name,
                ),
            ));
        }

        let project = self.project_label(&installed.app);
        if installed.environment_id.is_none() {
            // initially the environment can be unset for linked apps
            return Ok(ObjectPair::single(ObjectName::new(
                project,
                namespace_scope,
                app_name,
            )));
        }

        let environment = joined_environment(&installed)?;
        let rbac_one = ObjectName::new(
            project.clone(),
            Scope::Environment(environment.identifier.clone()),
            app_name,
        );
        if environment.is_virtual {
            // virtual environments have no real namespace object
            return Ok(ObjectPair::single(rbac_one));
        }
        let rbac_two = ObjectName::new(project, namespace_scope, app_name);
        Ok(ObjectPair::with_secondary(rbac_one, rbac_two))
    }

    /// Resolve names for an installed app by id
    ///
    /// The secondary namespace-scoped name is emitted only when it would
    /// differ from the environment identifier, so equivalent keys are
    /// never duplicated.
    pub async fn try_names_by_installed_app_id(
        &self,
        installed_app_id: i32,
    ) -> Result<ObjectPair, Unresolved> {
        let installed = self
            .installed_apps
            .get_installed_app(installed_app_id)
            .await
            .map_err(|err| installed_unresolved(installed_app_id, err))?;
        let environment = joined_environment(&installed)?;

        let project = self.project_label(&installed.app);
        let rbac_one = ObjectName::new(
            project.clone(),
            Scope::Environment(environment.identifier.clone()),
            installed.app.name.clone(),
        );

        if environment.is_virtual {
            return Ok(ObjectPair::single(rbac_one));
        }

        let namespace_scope = Scope::cluster_namespace(
            environment.cluster_name.clone(),
            environment.namespace.clone(),
        );
        if namespace_scope.matches_identifier(environment) {
            return Ok(ObjectPair::single(rbac_one));
        }

        let rbac_two = ObjectName::new(project, namespace_scope, installed.app.name.clone());
        Ok(ObjectPair::with_secondary(rbac_one, rbac_two))
    }

    /// Resolve `<team>/<env-identifier>/<app>` for an installed app,
    /// with the team looked up independently
    pub async fn try_name_by_installed_app_and_team(
        &self,
        installed_app_id: i32,
        team_id: i32,
    ) -> Result<ObjectName, Unresolved> {
        let installed = self
            .installed_apps
            .get_installed_app(installed_app_id)
            .await
            .map_err(|err| installed_unresolved(installed_app_id, err))?;
        let team = self
            .teams
            .find_one(team_id)
            .await
            .map_err(|err| team_unresolved(team_id, err))?;
        let environment = joined_environment(&installed)?;
        Ok(ObjectName::new(
            team.name,
            Scope::Environment(environment.identifier.clone()),
            installed.app.name.clone(),
        ))
    }

    // ---- legacy string layer -----------------------------------------

    /// `ObjectByCluster`: `"//"` sentinel on any lookup failure
    pub async fn object_by_cluster(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> String {
        match self.try_object_by_cluster(cluster_id, namespace, app_name).await {
            Ok(object) => object.render(),
            Err(reason) => {
                error!(cluster_id, app_name, error = %reason, "failed to resolve object by cluster");
                EMPTY_OBJECT.to_string()
            }
        }
    }

    /// `ObjectByTeamAndCluster`: `"//"` sentinel when either lookup fails
    pub async fn object_by_team_and_cluster(
        &self,
        team_id: i32,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> String {
        match self
            .try_object_by_team_and_cluster(team_id, cluster_id, namespace, app_name)
            .await
        {
            Ok(object) => object.render(),
            Err(reason) => {
                error!(team_id, cluster_id, app_name, error = %reason, "failed to resolve object by team and cluster");
                EMPTY_OBJECT.to_string()
            }
        }
    }

    /// `ObjectByClusterNamespaceAndAppName`: `("", "")` on unexpected
    /// failure, otherwise the `(rbac_one, rbac_two)` pair
    pub async fn object_by_cluster_namespace_and_app_name(
        &self,
        cluster_id: i32,
        namespace: &str,
        app_name: &str,
    ) -> (String, String) {
        match self
            .try_object_by_cluster_namespace_and_app_name(cluster_id, namespace, app_name)
            .await
        {
            Ok(pair) => pair.render(),
            Err(reason) => {
                error!(cluster_id, namespace, app_name, error = %reason, "failed to resolve object by cluster, namespace and app name");
                (String::new(), String::new())
            }
        }
    }

    /// `NamesByInstalledAppId`: `("//", "//")` on failure
    pub async fn names_by_installed_app_id(&self, installed_app_id: i32) -> (String, String) {
        match self.try_names_by_installed_app_id(installed_app_id).await {
            Ok(pair) => pair.render(),
            Err(reason) => {
                error!(installed_app_id, error = %reason, "failed to resolve names by installed app id");
                (EMPTY_OBJECT.to_string(), EMPTY_OBJECT.to_string())
            }
        }
    }

    /// `NameByInstalledAppAndTeam`: `"//"` on any lookup failure
    pub async fn name_by_installed_app_and_team(
        &self,
        installed_app_id: i32,
        team_id: i32,
    ) -> String {
        match self
            .try_name_by_installed_app_and_team(installed_app_id, team_id)
            .await
        {
            Ok(object) => object.render(),
            Err(reason) => {
                error!(installed_app_id, team_id, error = %reason, "failed to resolve name by installed app and team");
                EMPTY_OBJECT.to_string()
            }
        }
    }
}

fn cluster_unresolved(cluster_id: i32, err: StoreError) -> Unresolved {
    match err {
        StoreError::NotFound => Unresolved::ClusterNotFound(cluster_id),
        other => Unresolved::Store(other),
    }
}

fn team_unresolved(team_id: i32, err: StoreError) -> Unresolved {
    match err {
        StoreError::NotFound => Unresolved::TeamNotFound(team_id),
        other => Unresolved::Store(other),
    }
}

fn installed_unresolved(installed_app_id: i32, err: StoreError) -> Unresolved {
    match err {
        StoreError::NotFound => Unresolved::InstalledAppNotFound(installed_app_id),
        other => Unresolved::Store(other),
    }
}

fn joined_environment(installed: &InstalledApp) -> Result<&crate::store::Environment, Unresolved> {
    installed
        .environment
        .as_ref()
        .ok_or(Unresolved::EnvironmentMissing(installed.id))
}
