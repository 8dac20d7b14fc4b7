// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use solr_loader::utils::logging::{format_error, format_success};
use solr_loader::{
    AdminTool, Config, DemoPlan, DemoProfile, QueryFacade, SolrClient, run_demo,
    solr::escape_query_value,
};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "solr_loader")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Load employee CSV data into Solr and query it", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a collection with the solr admin tool
    CreateCollection { collection: String },

    /// Index a CSV file into a collection
    Load {
        collection: String,

        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        #[arg(long, value_name = "COLUMN")]
        exclude: Option<String>,
    },

    /// Count documents that carry an employee id
    Count { collection: String },

    /// Print documents where FIELD matches VALUE
    Search {
        collection: String,
        field: String,
        value: String,

        /// Escape query syntax in VALUE instead of passing it through
        #[arg(long)]
        escape: bool,
    },

    /// Delete one document by id
    Delete { collection: String, id: String },

    /// Print document counts per department
    Facet { collection: String },

    /// Index the three-employee sample set
    IndexSample {
        collection: String,

        #[arg(long, default_value = "Department")]
        label: String,
    },

    /// Run the fixed demonstration sequence
    Demo {
        #[arg(long, value_enum, default_value_t = ProfileArg::TwoCollections)]
        profile: ProfileArg,

        #[arg(long)]
        create_collections: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    TwoCollections,
    SingleCore,
}

impl From<ProfileArg> for DemoProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::TwoCollections => DemoProfile::TwoCollections,
            ProfileArg::SingleCore => DemoProfile::SingleCore,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    solr_loader::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = Config::load_or_default(&cli.config).context("Failed to load configuration")?;

    let client = SolrClient::new(config.solr.clone());

    match cli.command {
        Commands::CreateCollection { collection } => {
            cmd_create_collection(&config, &collection).await?;
        }
        Commands::Load {
            collection,
            csv,
            exclude,
        } => {
            cmd_load(&config, &client, &collection, csv, exclude).await?;
        }
        Commands::Count { collection } => {
            let mut facade = facade(&config, &client);
            facade.emp_count(&collection).await;
        }
        Commands::Search {
            collection,
            field,
            value,
            escape,
        } => {
            let value = if escape {
                escape_query_value(&value)
            } else {
                value
            };
            let mut facade = facade(&config, &client);
            facade.search_by_column(&collection, &field, &value).await;
        }
        Commands::Delete { collection, id } => {
            let mut facade = facade(&config, &client);
            facade.delete_by_id(&collection, &id).await;
        }
        Commands::Facet { collection } => {
            let mut facade = facade(&config, &client);
            facade.department_facet(&collection).await;
        }
        Commands::IndexSample { collection, label } => {
            let mut facade = facade(&config, &client);
            facade
                .index_sample(&collection, &label)
                .await
                .with_context(|| format!("Failed to index sample data into {}", collection))?;
        }
        Commands::Demo {
            profile,
            create_collections,
        } => {
            cmd_demo(&config, &client, profile.into(), create_collections).await?;
        }
    }

    Ok(())
}

fn facade<'a>(config: &Config, client: &'a SolrClient) -> QueryFacade<'a, io::Stdout> {
    QueryFacade::new(client, config.loader.id_field.clone(), io::stdout())
        .with_facet_field(config.demo.facet_field.clone())
}

async fn cmd_create_collection(config: &Config, collection: &str) -> Result<()> {
    let admin = AdminTool::new(config.admin.clone());

    match admin.create_collection(collection).await {
        Ok(()) => {
            println!(
                "{}",
                format_success(&format!("Collection '{}' created successfully.", collection))
            );
        }
        Err(e) => {
            error!("Could not create collection '{}': {}", collection, e);
            eprintln!("{}", format_error(&e.to_string()));
        }
    }

    Ok(())
}

async fn cmd_load(
    config: &Config,
    client: &SolrClient,
    collection: &str,
    csv: Option<PathBuf>,
    exclude: Option<String>,
) -> Result<()> {
    let csv = csv.unwrap_or_else(|| config.loader.csv_path.clone());
    let exclude = exclude.unwrap_or_else(|| config.loader.exclude_column.clone());
    let start_time = Instant::now();

    let mut facade = facade(config, client);
    let stats = facade
        .index_csv(&csv, collection, &exclude)
        .await
        .with_context(|| format!("Failed to index {}", csv.display()))?;

    info!(
        "Load complete in {:.2}s: {} rows, {} documents",
        start_time.elapsed().as_secs_f64(),
        stats.rows_read,
        stats.documents_submitted
    );

    Ok(())
}

async fn cmd_demo(
    config: &Config,
    client: &SolrClient,
    profile: DemoProfile,
    create_collections: bool,
) -> Result<()> {
    let plan = DemoPlan::for_profile(profile, config, create_collections);
    let start_time = Instant::now();

    let report = run_demo(&plan, config, client, io::stdout())
        .await
        .context("Demo aborted")?;

    info!(
        "Demo complete in {:.2}s ({} failed steps)",
        start_time.elapsed().as_secs_f64(),
        report.failed_steps
    );

    Ok(())
}
