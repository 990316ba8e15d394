//! # RBACCTL CLI
//!
//! Command-line interface for exercising the RBAC object name resolver
//! against a fixture-backed store. Useful for verifying what object
//! name(s) a given cluster/namespace/app or installed-app context
//! produces before wiring a policy check to it.
//!
//! ## Usage
//!
//! ```bash
//! # Object name for a cluster-scoped app
//! rbacctl --fixtures stores.yaml cluster --cluster-id 1 --namespace ns-a --app-name checkout
//!
//! # Both names for an installed app
//! rbacctl --fixtures stores.yaml installed-app --installed-app-id 1000
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use helm_rbac_resolver::{InMemoryStore, ObjectResolver, ResolverConfig};

/// Helm RBAC object name resolver CLI
#[derive(Parser)]
#[command(name = "rbacctl")]
#[command(about = "Resolve RBAC object names against a fixture store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML fixture file describing clusters, teams, apps and installed apps
    #[arg(short, long, global = true, default_value = "stores.yaml")]
    fixtures: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Object name under the unassigned project for a cluster namespace
    Cluster {
        #[arg(long)]
        cluster_id: i32,
        #[arg(long)]
        namespace: String,
        #[arg(long)]
        app_name: String,
    },
    /// Object name for an explicit team and cluster namespace
    TeamCluster {
        #[arg(long)]
        team_id: i32,
        #[arg(long)]
        cluster_id: i32,
        #[arg(long)]
        namespace: String,
        #[arg(long)]
        app_name: String,
    },
    /// Object name pair for a (cluster, namespace, app) context
    ClusterApp {
        #[arg(long)]
        cluster_id: i32,
        #[arg(long)]
        namespace: String,
        #[arg(long)]
        app_name: String,
    },
    /// Object name pair for an installed app
    InstalledApp {
        #[arg(long)]
        installed_app_id: i32,
    },
    /// Object name for an installed app under an explicit team
    InstalledAppTeam {
        #[arg(long)]
        installed_app_id: i32,
        #[arg(long)]
        team_id: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helm_rbac_resolver=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let store = Arc::new(InMemoryStore::from_yaml_file(&cli.fixtures)?);
    let resolver = ObjectResolver::new(
        ResolverConfig::from_env(),
        Arc::clone(&store) as Arc<dyn helm_rbac_resolver::ClusterStore>,
        Arc::clone(&store) as Arc<dyn helm_rbac_resolver::TeamStore>,
        Arc::clone(&store) as Arc<dyn helm_rbac_resolver::AppStore>,
        store,
    );

    match cli.command {
        Commands::Cluster {
            cluster_id,
            namespace,
            app_name,
        } => {
            println!(
                "{}",
                resolver
                    .object_by_cluster(cluster_id, &namespace, &app_name)
                    .await
            );
        }
        Commands::TeamCluster {
            team_id,
            cluster_id,
            namespace,
            app_name,
        } => {
            println!(
                "{}",
                resolver
                    .object_by_team_and_cluster(team_id, cluster_id, &namespace, &app_name)
                    .await
            );
        }
        Commands::ClusterApp {
            cluster_id,
            namespace,
            app_name,
        } => {
            let (rbac_one, rbac_two) = resolver
                .object_by_cluster_namespace_and_app_name(cluster_id, &namespace, &app_name)
                .await;
            print_pair(&rbac_one, &rbac_two);
        }
        Commands::InstalledApp { installed_app_id } => {
            let (rbac_one, rbac_two) = resolver.names_by_installed_app_id(installed_app_id).await;
            print_pair(&rbac_one, &rbac_two);
        }
        Commands::InstalledAppTeam {
            installed_app_id,
            team_id,
        } => {
            println!(
                "{}",
                resolver
                    .name_by_installed_app_and_team(installed_app_id, team_id)
                    .await
            );
        }
    }

    Ok(())
}

fn print_pair(rbac_one: &str, rbac_two: &str) {
    println!("{rbac_one}");
    if !rbac_two.is_empty() {
        println!("{rbac_two}");
    }
}
