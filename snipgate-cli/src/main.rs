//! `Snipgate` CLI - Command-line host for `Snipgate`
//!
//! Provides commands for listing the remote snippet catalog, resolving the
//! snippets offered at a cursor position, creating snippets, and inspecting
//! file-type aliases and configuration.

mod host;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use snipgate_core::config::ConfigManager;
use snipgate_core::{
    AppSettings, FileTypeAliases, HttpSnippetStore, MatchRequest, SnipgateError, Snippet,
    SnippetEdit, SnippetEngine, StaticContextValidator,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::host::TerminalHost;

/// `Snipgate` command-line interface for remote snippets
#[derive(Parser)]
#[command(name = "snipgate")]
#[command(author, version, about = "Snipgate command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration directory (defaults to ~/.config/snipgate)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List snippets in the remote catalog
    #[command(about = "List snippets from the remote store")]
    List {
        /// Only show snippets applying to this file type
        #[arg(short = 't', long)]
        filetype: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Resolve the snippets offered at a cursor position
    #[command(about = "Show the snippet edits offered for a line")]
    Match {
        /// File type of the buffer
        #[arg(short = 't', long)]
        filetype: String,

        /// Text of the current line
        line: String,

        /// Cursor offset in characters (defaults to end of line)
        #[arg(long)]
        column: Option<u32>,

        /// Zero-based line number used in reported ranges
        #[arg(short = 'n', long, default_value = "0")]
        line_number: u32,

        /// Treat the request as an as-you-type trigger
        #[arg(long)]
        auto: bool,

        /// Context expression that holds for this buffer (repeatable)
        #[arg(long = "context")]
        contexts: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Create a snippet in the remote store
    #[command(about = "Create a snippet from a file")]
    Create {
        /// File type the snippet applies to
        #[arg(short = 't', long)]
        filetype: String,

        /// File holding the snippet body
        #[arg(short, long)]
        file: PathBuf,

        /// Snippet name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List snippet file names associated with a file type
    #[command(about = "Show the snippet files a file type draws from")]
    Files {
        /// File type to resolve
        filetype: String,
    },

    /// Show the effective configuration
    #[command(about = "Show the effective configuration")]
    Config,
}

/// Output format for listing commands
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}

/// Exit codes for CLI commands
pub mod exit_codes {
    /// General error - configuration, validation, or I/O errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Store failure - the remote snippet store could not be reached or rejected the request
    pub const STORE_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote store error
    #[error("Store error: {0}")]
    Store(String),

    /// Snippet error
    #[error("Snippet error: {0}")]
    Snippet(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns the process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Store(_) => exit_codes::STORE_FAILURE,
            Self::Config(_) | Self::Snippet(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<SnipgateError> for CliError {
    fn from(err: SnipgateError) -> Self {
        match err {
            SnipgateError::Store(e) => Self::Store(e.to_string()),
            SnipgateError::Config(e) => Self::Config(e.to_string()),
            SnipgateError::Io(e) => Self::Io(e),
            other => Self::Snippet(other.to_string()),
        }
    }
}

type Engine = SnippetEngine<HttpSnippetStore, StaticContextValidator, TerminalHost>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_manager = config_manager(cli.config.as_deref())?;
    let settings = config_manager
        .load_effective_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;
    init_logging(&settings.logging.level);

    match cli.command {
        Commands::List { filetype, format } => cmd_list(&settings, filetype.as_deref(), format).await,
        Commands::Match {
            filetype,
            line,
            column,
            line_number,
            auto,
            contexts,
            format,
        } => {
            let column = column.unwrap_or_else(|| line.chars().count() as u32);
            let mut request = MatchRequest::new(line_number, line, column, filetype);
            if auto {
                request = request.automatic();
            }
            cmd_match(&settings, &request, contexts, format).await
        }
        Commands::Create {
            filetype,
            file,
            name,
        } => cmd_create(&settings, &filetype, &file, name).await,
        Commands::Files { filetype } => {
            cmd_files(&settings, &filetype);
            Ok(())
        }
        Commands::Config => {
            cmd_config(&config_manager, &settings);
            Ok(())
        }
    }
}

fn config_manager(dir: Option<&Path>) -> Result<ConfigManager, CliError> {
    match dir {
        Some(dir) => Ok(ConfigManager::with_config_dir(dir.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(
    settings: &AppSettings,
    validator: StaticContextValidator,
    host: TerminalHost,
) -> Result<Engine, CliError> {
    let url = ConfigManager::validate_settings(settings)
        .map_err(|e| CliError::Config(e.to_string()))?;
    let store = HttpSnippetStore::new(&url, settings.store.api_token.clone())
        .map_err(|e| CliError::Store(e.to_string()))?;
    Ok(SnippetEngine::from_settings(store, validator, host, settings))
}

/// List snippets command
async fn cmd_list(
    settings: &AppSettings,
    filetype: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut engine = build_engine(settings, StaticContextValidator::new(), TerminalHost::default())?;
    engine
        .initialize()
        .await
        .map_err(|e| CliError::Store(format!("Failed to load snippets: {e}")))?;

    let snippets: Vec<&Snippet> = match filetype {
        Some(ft) => engine.snippets_for(ft),
        None => engine.catalog().iter().collect(),
    };

    match format {
        OutputFormat::Table => print_snippet_table(&snippets),
        OutputFormat::Json => print_json(&snippets)?,
    }
    Ok(())
}

/// Match command
async fn cmd_match(
    settings: &AppSettings,
    request: &MatchRequest,
    contexts: Vec<String>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let validator: StaticContextValidator = contexts.into_iter().collect();
    let mut engine = build_engine(settings, validator, TerminalHost::default())?;

    // An unreachable store leaves the catalog empty; matching still runs and offers nothing.
    if let Err(e) = engine.initialize().await {
        warn!(error = %e, "Snippet catalog unavailable");
    }

    let edits = engine
        .trigger_snippets(request)
        .await
        .map_err(|e| CliError::Snippet(e.to_string()))?;

    match format {
        OutputFormat::Table => print_edit_table(&edits),
        OutputFormat::Json => print_json(&edits)?,
    }
    Ok(())
}

/// Create snippet command
async fn cmd_create(
    settings: &AppSettings,
    filetype: &str,
    file: &Path,
    name: Option<String>,
) -> Result<(), CliError> {
    let content = std::fs::read_to_string(file)?;
    let mut engine = build_engine(settings, StaticContextValidator::new(), TerminalHost::new(name))?;

    engine.create_snippet(filetype, &content).await?;
    Ok(())
}

/// Associated snippet files command
fn cmd_files(settings: &AppSettings, filetype: &str) {
    let aliases = FileTypeAliases::with_overrides(&settings.filetypes.aliases);
    for name in aliases.snippet_file_names(filetype) {
        println!("{name}");
    }
}

/// Show configuration command
fn cmd_config(config_manager: &ConfigManager, settings: &AppSettings) {
    println!("Configuration:");
    println!("  File:          {}", config_manager.settings_path().display());
    let api_url = if settings.store.api_url.is_empty() {
        "(not set)"
    } else {
        settings.store.api_url.as_str()
    };
    println!("  API URL:       {api_url}");
    println!("  API token:     {}", token_state(settings));
    println!("  Auto trigger:  {}", settings.matching.allow_auto_trigger);
    println!("  Log level:     {}", settings.logging.level);
    for (filetype, aliases) in &settings.filetypes.aliases {
        println!("  Alias:         {filetype} -> {}", aliases.join(", "));
    }
}

/// Describes whether a token is configured without revealing it
const fn token_state(settings: &AppSettings) -> &'static str {
    if settings.store.api_token.is_some() {
        "(set)"
    } else {
        "(not set)"
    }
}

/// Print snippets as table
fn print_snippet_table(snippets: &[&Snippet]) {
    if snippets.is_empty() {
        println!("No snippets found.");
        return;
    }

    let rows: Vec<(String, &str, &str)> = snippets
        .iter()
        .map(|s| {
            let trigger = s
                .prefix()
                .map_or_else(|| format!("/{}/", s.origin_regex().unwrap_or("")), str::to_string);
            (trigger, s.filetype.as_str(), s.location.as_str())
        })
        .collect();

    let trigger_width = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(7).max(7);
    let ft_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(8).max(8);

    println!("{:<trigger_width$}  {:<ft_width$}  LOCATION", "TRIGGER", "FILETYPE");
    println!("{:-<trigger_width$}  {:-<ft_width$}  {:-<12}", "", "", "");
    for (trigger, filetype, location) in rows {
        println!("{trigger:<trigger_width$}  {filetype:<ft_width$}  {location}");
    }
}

/// Print edits as table
fn print_edit_table(edits: &[SnippetEdit]) {
    if edits.is_empty() {
        println!("No snippets match.");
        return;
    }

    println!("{:<14}  {:<12}  DESCRIPTION", "RANGE", "LOCATION");
    println!("{:-<14}  {:-<12}  {:-<30}", "", "", "");
    for edit in edits {
        println!(
            "{:<14}  {:<12}  {}",
            format_range(edit),
            edit.location,
            truncate(&edit.description, 40)
        );
    }
}

/// Formats an edit range as `line:start-end`
fn format_range(edit: &SnippetEdit) -> String {
    format!(
        "{}:{}-{}",
        edit.range.start.line, edit.range.start.character, edit.range.end.character
    )
}

/// Shortens `text` to at most `max` characters
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Snippet(format!("Failed to serialize: {e}")))?;
    println!("{json}");
    Ok(())
}
