// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line definitions and dispatch.

use chrono::Utc;
use clap::{Parser, Subcommand};
use kube::Client;

use crate::commands;
use crate::config::CommandConfig;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::streams::IoStreams;

#[derive(Parser, Debug)]
#[command(
    name = "tkn",
    version,
    about = "Manage Tekton resources on a Kubernetes cluster"
)]
pub struct Cli {
    /// Namespace to use for namespaced resource kinds
    #[arg(short = 'n', long, global = true)]
    pub namespace: Option<String>,

    #[command(subcommand)]
    pub resource: ResourceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Manage ClusterTasks
    #[command(visible_alias = "ct")]
    Clustertask {
        #[command(subcommand)]
        action: Action,
    },
    /// Manage EventListeners
    #[command(visible_alias = "el")]
    Eventlistener {
        #[command(subcommand)]
        action: Action,
    },
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// List resources
    #[command(visible_alias = "ls")]
    List {
        /// Output format (json or yaml)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
    /// Delete a resource by name
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the resource to delete
        name: String,
        /// Skip the confirmation prompt
        #[arg(short = 'f', long)]
        force: bool,
    },
}

/// Route a parsed invocation to its command handler.
pub async fn run(cli: Cli, client: Client, streams: &mut IoStreams<'_>) -> Result<()> {
    match cli.resource {
        ResourceCommand::Clustertask { action } => match action {
            Action::List { output } => {
                let cfg = resolve(cli.namespace, output, false)?;
                commands::clustertask::list(client, &cfg, streams, Utc::now()).await
            }
            Action::Delete { name, force } => {
                let cfg = resolve(cli.namespace, None, force)?;
                commands::clustertask::delete(client, &name, &cfg, streams).await
            }
        },
        ResourceCommand::Eventlistener { action } => match action {
            Action::List { output } => {
                let cfg = resolve(cli.namespace, output, false)?;
                commands::eventlistener::list(client, &cfg, streams, Utc::now()).await
            }
            Action::Delete { name, force } => {
                let cfg = resolve(cli.namespace, None, force)?;
                commands::eventlistener::delete(client, &name, &cfg, streams).await
            }
        },
    }
}

fn resolve(
    namespace: Option<String>,
    output: Option<String>,
    force: bool,
) -> Result<CommandConfig> {
    let output = output
        .map(|value| value.parse::<OutputFormat>())
        .transpose()?;
    Ok(CommandConfig {
        namespace,
        output,
        force,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TknError;

    #[test]
    fn test_parse_delete_with_force_shorthand() {
        let cli = Cli::try_parse_from(["tkn", "clustertask", "rm", "tomatoes", "-f"]).unwrap();

        match cli.resource {
            ResourceCommand::Clustertask {
                action: Action::Delete { name, force },
            } => {
                assert_eq!(name, "tomatoes");
                assert!(force);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_parse_delete_with_long_force() {
        let cli = Cli::try_parse_from(["tkn", "ct", "delete", "tomatoes", "--force"]).unwrap();

        assert!(matches!(
            cli.resource,
            ResourceCommand::Clustertask {
                action: Action::Delete { force: true, .. }
            }
        ));
    }

    #[test]
    fn test_parse_list_aliases_and_global_namespace() {
        let cli = Cli::try_parse_from(["tkn", "el", "ls", "-n", "bar"]).unwrap();

        assert_eq!(cli.namespace.as_deref(), Some("bar"));
        assert!(matches!(
            cli.resource,
            ResourceCommand::Eventlistener {
                action: Action::List { output: None }
            }
        ));
    }

    #[test]
    fn test_parse_output_flag() {
        let cli = Cli::try_parse_from(["tkn", "ct", "list", "-o", "yaml"]).unwrap();

        match cli.resource {
            ResourceCommand::Clustertask {
                action: Action::List { output },
            } => assert_eq!(output.as_deref(), Some("yaml")),
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_output() {
        let err = resolve(None, Some("xml".to_string()), false).unwrap_err();
        assert!(matches!(err, TknError::InvalidOutput(ref v) if v == "xml"));
    }

    #[test]
    fn test_resolve_accepts_known_outputs() {
        let cfg = resolve(None, Some("json".to_string()), false).unwrap();
        assert_eq!(cfg.output, Some(OutputFormat::Json));
    }
}
