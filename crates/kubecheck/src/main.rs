use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use kubecheck::{commands, telemetry};
use kubecheck_core::{CheckConfig, RegistryError};
use tracing::error;

#[derive(Parser)]
#[command(
    name = "kubecheck",
    about = "Threshold health checks for Kubernetes workloads"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered checks and the resource kinds they observe.
    List,
    /// Print a check's description and options.
    Usage { check: String },
    /// Evaluate a check once against a resource manifest.
    Run {
        /// Registered check name, e.g. deployment_status.
        #[arg(long)]
        check: String,
        /// Instance id stamped on the result (defaults to the check name).
        #[arg(long)]
        id: Option<String>,
        /// YAML or JSON manifest of the resource.
        #[arg(long, short)]
        file: PathBuf,
        /// key=value tags copied onto the result.
        #[arg(long = "tag", value_parser = parse_tag)]
        tags: Vec<(String, String)>,
        /// Options passed to the check, after `--`.
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Print the JSON schema of a check result.
    Schema,
}

fn parse_tag(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got {s:?}"))
}

fn main() -> Result<ExitCode> {
    telemetry::init();

    let cli = Cli::parse();
    let registry = kubecheck_checks::builtin_registry()?;

    match cli.command {
        Commands::List => print!("{}", commands::list(&registry)?),
        Commands::Usage { check } => println!("{}", commands::usage(&registry, &check)?),
        Commands::Schema => println!("{}", commands::schema()?),
        Commands::Run {
            check,
            id,
            file,
            tags,
            args,
        } => {
            let manifest = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;

            let mut config = CheckConfig::new(id.unwrap_or_else(|| check.clone()), check.as_str())
                .with_args(args);
            config.tags.extend(tags);

            let res = match commands::evaluate(&registry, config, &manifest) {
                Ok(res) => res,
                Err(e) => {
                    if let Some(RegistryError::Config { .. }) = e.downcast_ref::<RegistryError>() {
                        error!(%e, "invalid check options");
                        eprintln!("{}", commands::usage(&registry, &check)?);
                    }
                    return Err(e);
                }
            };
            println!("{}", serde_json::to_string_pretty(&res)?);
            return Ok(ExitCode::from(res.status.exit_code()));
        }
    }

    Ok(ExitCode::SUCCESS)
}
