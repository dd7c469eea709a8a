use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matreq::cli::{
    handle_export_command, handle_hierarchy_command, handle_request_command,
    handle_schema_command, handle_template_command, ExportCommands, HierarchyCommands,
    RequestCommands, SchemaCommands, TemplateCommands,
};
use matreq::config::{paths::MatreqPaths, settings::Settings};
use matreq::services::Session;
use matreq::storage::init::needs_initialization;
use matreq::storage::{initialize_storage, Storage};

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "MATREQ_LOG";

#[derive(Parser)]
#[command(
    name = "matreq",
    author = "Kaylee Beyene",
    version,
    about = "Change-request tracking for product master records",
    long_about = "matreq tracks requests to create or correct product master records. \
                  Every correction is recorded field by field, requests move through \
                  an approval workflow, and approved records are exported in the \
                  fixed bulk-load sheet layout."
)]
struct Cli {
    /// Name recorded as requester, actor or comment writer
    #[arg(short, long, global = true, env = "MATREQ_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Request management commands
    #[command(subcommand, alias = "req")]
    Request(RequestCommands),

    /// Template commands (clone an existing request)
    #[command(subcommand)]
    Template(TemplateCommands),

    /// Export sheets or the whole store
    #[command(subcommand)]
    Export(ExportCommands),

    /// Inspect the attribute schema
    #[command(subcommand)]
    Schema(SchemaCommands),

    /// Browse the product hierarchy
    #[command(subcommand)]
    Hierarchy(HierarchyCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = MatreqPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let user = cli
        .user
        .or_else(|| settings.default_user.clone())
        .unwrap_or_default();

    match cli.command {
        Some(Commands::Init) => {
            if !needs_initialization(&paths) {
                println!("matreq is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }
            println!("Initializing matreq at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Place the product hierarchy in {} to enable hierarchy checks.",
                paths.hierarchy_file().display()
            );
            println!("Run 'matreq schema list' to see all attributes.");
        }
        Some(Commands::Config) => {
            println!("matreq Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Drafts directory: {}", paths.drafts_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Default user:   {}",
                settings.default_user.as_deref().unwrap_or("(none)")
            );
            println!("  Date format:    {}", settings.date_format);
            println!("  Log filter:     {}", settings.log_filter);
            println!("  Export prefix:  {}", settings.export.file_prefix);
            println!("  Approved only:  {}", settings.export.approved_only);
        }
        Some(Commands::Request(cmd)) => {
            let mut session = Session::start(&storage, &user)?;
            let result = handle_request_command(&mut session, &settings, cmd);
            session.end();
            result?;
        }
        Some(Commands::Template(cmd)) => {
            let session = Session::start(&storage, &user)?;
            let result = handle_template_command(&session, &settings, cmd);
            session.end();
            result?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Schema(cmd)) => {
            handle_schema_command(cmd)?;
        }
        Some(Commands::Hierarchy(cmd)) => {
            handle_hierarchy_command(&storage, cmd)?;
        }
        None => {
            println!("matreq - change-request tracking for product master records");
            println!();
            println!("Run 'matreq --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `MATREQ_LOG` or the configured filter
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
