use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};
use emgraph_core::budget::{BudgetReport, BudgetResolver, BudgetTagger};
use emgraph_core::config::{Config, DEFAULT_CONFIG_FILE};
use emgraph_core::migration::{
    InputFile, Manifest, MigrationReport, Migrator, RelationshipReport, RetryPolicy,
};
use emgraph_core::staging::{FileStaging, MemoryStaging, RelationshipStaging};
use emgraph_core::{GraphStore, MemoryGraph, SurrealGraph, TemplateRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;
mod progress;

use progress::ProgressObserver;

/// Exit code for runs that finished but left data-quality warnings.
const EXIT_WARNINGS: i32 = 2;

#[derive(Parser)]
#[command(name = "emgraph")]
#[command(about = "Migrate engineering model exports into a knowledge graph", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file to use instead of the default search path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Migrate input files into the graph (entities, then relationships)
    Migrate {
        /// Input files; overrides `migration.inputs` from the config
        files: Vec<String>,

        /// Directory the input files live in
        #[arg(long)]
        data_path: Option<PathBuf>,

        /// Migrate into memory only, to validate the inputs
        #[arg(long)]
        dry_run: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Commit relationships left in the staging file by an interrupted run
    Replay {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Link each Option to the mass value sets of its budget
    Tag {
        /// Option iid; every Option when omitted
        #[arg(long)]
        option: Option<String>,
    },
    /// Compute mass budgets
    Budget {
        /// Option iid; every Option when omitted
        #[arg(long)]
        option: Option<String>,

        /// Print the budgets as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the class kinds that can be migrated
    Templates {
        /// Also list required fields
        #[arg(short, long)]
        fields: bool,
    },
    /// Write a default emgraph.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let warnings = match cli.command {
        Commands::Init { force } => {
            init(force)?;
            false
        }
        Commands::Templates { fields } => {
            list_templates(fields);
            false
        }
        command => {
            let config = load_config(cli.config.as_deref())?;
            run(command, &config).await?
        }
    };

    if warnings {
        std::process::exit(EXIT_WARNINGS);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display())),
        None => Config::load().wrap_err("failed to load config"),
    }
}

/// Run a command that needs a config. Returns whether it left warnings.
async fn run(command: Commands, config: &Config) -> Result<bool> {
    match command {
        Commands::Migrate {
            files,
            data_path,
            dry_run,
            json,
        } => {
            let manifest = manifest(config, files, data_path);
            if manifest.is_empty() {
                bail!(
                    "no input files: pass them on the command line or list them under \
                     [[migration.inputs]] in {DEFAULT_CONFIG_FILE}"
                );
            }
            let report = if dry_run {
                info!("Dry run, migrating into memory");
                migrate(config, Arc::new(MemoryGraph::new()), MemoryStaging::new(), &manifest)
                    .await?
            } else {
                let graph = open_graph(config).await?;
                let staging = FileStaging::create(config.staging.path())?;
                migrate(config, graph, staging, &manifest).await?
            };
            print_json_or(json, &report, output::print_migration)?;
            Ok(report.has_warnings())
        }
        Commands::Replay { json } => {
            let path = config.staging.path();
            let staging = FileStaging::open(&path)?;
            if staging.is_empty() {
                println!("Nothing staged in {}", path.display());
                return Ok(false);
            }
            let graph = open_graph(config).await?;
            let report = replay(config, graph, staging).await?;
            print_json_or(json, &report, output::print_relationships)?;
            Ok(report.has_warnings())
        }
        Commands::Tag { option } => {
            let graph = open_graph(config).await?;
            let tagger = BudgetTagger::with_config(graph, config.budget.clone());
            let report = tagger.tag(option.as_deref()).await?;
            output::print_tagging(&report);
            Ok(false)
        }
        Commands::Budget { option, json } => {
            let graph = open_graph(config).await?;
            let resolver = BudgetResolver::with_config(graph, config.budget.clone());
            let reports = match option {
                Some(option) => vec![resolver.resolve(&option).await?],
                None => resolver.resolve_all().await?,
            };
            if reports.is_empty() {
                println!("No Options found in the graph");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                reports.iter().for_each(output::print_budget);
            }
            Ok(reports.iter().any(BudgetReport::has_warnings))
        }
        Commands::Init { .. } | Commands::Templates { .. } => Ok(false),
    }
}

fn manifest(config: &Config, files: Vec<String>, data_path: Option<PathBuf>) -> Manifest {
    if files.is_empty() {
        let mut manifest = config.manifest();
        if let Some(dir) = data_path {
            for input in &mut manifest.inputs {
                input.base_dir = dir.join(&input.base_dir);
            }
        }
        return manifest;
    }

    let base_dir = data_path.unwrap_or_default();
    Manifest::new(
        files
            .into_iter()
            .map(|file| InputFile::new(&base_dir, file))
            .collect(),
    )
}

async fn open_graph(config: &Config) -> Result<Arc<SurrealGraph>> {
    let path = PathBuf::from(&config.graph.db_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let graph = SurrealGraph::open(&path, &config.graph.namespace, &config.graph.database)
        .await
        .wrap_err_with(|| format!("failed to open graph at {}", path.display()))?;
    Ok(Arc::new(graph))
}

async fn migrate<G, S>(
    config: &Config,
    graph: Arc<G>,
    staging: S,
    manifest: &Manifest,
) -> Result<MigrationReport>
where
    G: GraphStore,
    S: RelationshipStaging,
{
    let mut migrator = Migrator::new(graph, staging)
        .with_retry(RetryPolicy::from_config(&config.migration.retry))
        .with_observer(Arc::new(ProgressObserver::new()));
    Ok(migrator.run(manifest).await?)
}

async fn replay<G, S>(config: &Config, graph: Arc<G>, staging: S) -> Result<RelationshipReport>
where
    G: GraphStore,
    S: RelationshipStaging,
{
    let mut migrator = Migrator::new(graph, staging)
        .with_retry(RetryPolicy::from_config(&config.migration.retry))
        .with_observer(Arc::new(ProgressObserver::new()));
    Ok(migrator.commit_relationships().await?)
}

fn print_json_or<T: serde::Serialize>(json: bool, value: &T, print: fn(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

fn list_templates(fields: bool) {
    let registry = TemplateRegistry::new();
    let templates = registry.list_templates();
    println!("{} class kinds:", templates.len());
    for (kind, required) in templates {
        if fields && !required.is_empty() {
            println!("  {:<40} {}", kind.as_str(), required.join(", "));
        } else {
            println!("  {}", kind.as_str());
        }
    }
}

fn init(force: bool) -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        bail!("{DEFAULT_CONFIG_FILE} already exists, use --force to overwrite");
    }
    std::fs::write(path, Config::default_config_string())
        .wrap_err_with(|| format!("failed to write {DEFAULT_CONFIG_FILE}"))?;
    println!("Wrote {DEFAULT_CONFIG_FILE}");
    Ok(())
}
