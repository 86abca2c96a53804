//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::adapters::csv_adapter::CsvRecordProvider;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::seed_adapter::SeedRecordProvider;
use crate::domain::error::FinanceError;
use crate::domain::summary::summarize;
use crate::ports::config_port::ConfigPort;
use crate::ports::record_provider::RecordProvider;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "finboard", about = "Receivables and payables dashboard service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the finance summary as JSON
    Summary {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Load a record CSV and report what would be served
    Check {
        #[arg(long)]
        csv: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub listen: SocketAddr,
    pub records_csv: Option<PathBuf>,
    pub cors: bool,
}

pub type SharedProvider = Arc<dyn RecordProvider + Send + Sync>;

pub fn run(cli: Cli) -> ExitCode {
    init_tracing();
    let result = match cli.command {
        Command::Serve { config } => run_serve(config.as_deref()),
        Command::Summary { config, pretty } => run_summary(config.as_deref(), pretty),
        Command::Check { csv } => run_check(&csv),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Logs go to stderr so `summary` output stays clean. `RUST_LOG` filters,
/// `FINBOARD_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let log_format = std::env::var("FINBOARD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let _ = if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };
}

pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, FinanceError> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            FileConfigAdapter::from_file(path).map_err(|e| FinanceError::ConfigParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

pub fn build_server_settings(config: &dyn ConfigPort) -> Result<ServerSettings, FinanceError> {
    let listen_str = config
        .get_string("web", "listen")
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
    let listen: SocketAddr = listen_str.parse().map_err(|_| FinanceError::ConfigInvalid {
        section: "web".into(),
        key: "listen".into(),
        reason: format!("'{listen_str}' is not a socket address (expected HOST:PORT)"),
    })?;

    Ok(ServerSettings {
        listen,
        records_csv: config.get_string("data", "records_csv").map(PathBuf::from),
        cors: config.get_bool("web", "cors", true),
    })
}

/// CSV file when one is configured, the built-in seed ledger otherwise.
pub fn build_provider(settings: &ServerSettings) -> Result<SharedProvider, FinanceError> {
    let provider: SharedProvider = match &settings.records_csv {
        Some(path) => Arc::new(CsvRecordProvider::from_path(path)?),
        None => Arc::new(SeedRecordProvider::new()),
    };
    tracing::info!("Serving records from {}", provider.describe());
    Ok(provider)
}

pub fn render_summary(provider: &dyn RecordProvider, pretty: bool) -> Result<String, FinanceError> {
    let summary = summarize(&provider.records()?);
    let rendered = if pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    };
    rendered.map_err(FinanceError::from)
}

fn run_summary(config_path: Option<&Path>, pretty: bool) -> Result<(), FinanceError> {
    let config = load_config(config_path)?;
    let settings = build_server_settings(&config)?;
    let provider = build_provider(&settings)?;
    println!("{}", render_summary(provider.as_ref(), pretty)?);
    Ok(())
}

fn run_check(csv_path: &Path) -> Result<(), FinanceError> {
    let provider = CsvRecordProvider::from_path(csv_path)?;

    for malformed in provider.skipped() {
        println!("line {}: skipped ({})", malformed.line, malformed.reason);
    }

    let summary = summarize(&provider.records()?);
    let unclassified =
        summary.records.len() - summary.receivables.len() - summary.payables.len();
    println!(
        "{} records loaded, {} skipped",
        provider.len(),
        provider.skipped().len()
    );
    println!(
        "  receivables: {}  payables: {}  unclassified: {}",
        summary.receivables.len(),
        summary.payables.len(),
        unclassified
    );
    println!("  total receivable:   {}", summary.totals.total_receivable);
    println!("  total payable:      {}", summary.totals.total_payable);
    println!("  receivable paid:    {}", summary.totals.receivable_paid);
    println!("  receivable overdue: {}", summary.totals.receivable_overdue);
    Ok(())
}

fn run_serve(config_path: Option<&Path>) -> Result<(), FinanceError> {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{AppState, build_router};

        let config = load_config(config_path)?;
        let settings = build_server_settings(&config)?;
        let provider = build_provider(&settings)?;

        let router = build_router(AppState { records: provider }, settings.cors);

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async {
            let listener = tokio::net::TcpListener::bind(settings.listen).await?;
            tracing::info!("Listening on {}", settings.listen);
            axum::serve(listener, router).await?;
            Ok::<(), FinanceError>(())
        })
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        Err(FinanceError::ConfigInvalid {
            section: "web".into(),
            key: "listen".into(),
            reason: "the web feature is required for serve".into(),
        })
    }
}
