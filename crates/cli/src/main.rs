//! Prompt Forge CLI
//!
//! Main entry point for the promptforge command-line tool.
//! Provides commands for generating, structuring and optimizing prompts.

mod commands;
mod export;

use clap::{Parser, Subcommand};
use commands::{GenerateCommand, OptimizeCommand, StructuredCommand, TemplatesCommand};
use promptforge_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Prompt Forge - generate and optimize prompts for AI models
#[derive(Parser, Debug)]
#[command(name = "promptforge")]
#[command(about = "Generate and optimize prompts for AI models", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "PROMPTFORGE_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "PROMPTFORGE_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a user template file (YAML)
    #[arg(short, long, global = true, env = "PROMPTFORGE_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a basic prompt from a category template
    Generate(GenerateCommand),

    /// Assemble a structured prompt at a detail level
    Structured(StructuredCommand),

    /// Optimize a free-text prompt
    Optimize(OptimizeCommand),

    /// List templates and optimization tips
    Templates(TemplatesCommand),
}

fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.workspace,
        cli.config,
        cli.templates,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Prompt Forge CLI starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Templates file: {:?}", config.templates_file);

    // Ensure .promptforge directory exists
    config.ensure_promptforge_dir()?;

    let command_name = match &cli.command {
        Commands::Generate(_) => "generate",
        Commands::Structured(_) => "structured",
        Commands::Optimize(_) => "optimize",
        Commands::Templates(_) => "templates",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Generate(cmd) => cmd.execute(&config),
        Commands::Structured(cmd) => cmd.execute(&config),
        Commands::Optimize(cmd) => cmd.execute(&config),
        Commands::Templates(cmd) => cmd.execute(&config),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
