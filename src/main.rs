//! Khulasa - Extractive Blog Digests with Urdu Translation
//!
//! This is the main entry point for the khulasa CLI, which summarizes
//! plain-text documents and translates the summaries to Urdu through a
//! cascade of remote services with a rule-based local fallback.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use khulasa::cli::{Args, Commands};
use khulasa::config::Config;
use khulasa::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    let workflow = Workflow::new(config)?;

    match args.command {
        Commands::Process {
            input,
            output_dir,
            target_sentences,
        } => {
            info!("Processing text file: {}", input.display());
            workflow
                .process_file(&input, output_dir.as_deref(), target_sentences)
                .await?;
        }
        Commands::Batch {
            input_dir,
            output_dir,
        } => {
            info!("Processing directory: {}", input_dir.display());
            workflow
                .process_directory(&input_dir, output_dir.as_deref())
                .await?;
        }
        Commands::Summarize {
            input,
            target_sentences,
        } => {
            let summary = workflow.summarize_file(&input, target_sentences).await?;
            println!("{}", summary);
        }
        Commands::Translate { input } => {
            let outcome = workflow.translate_file(&input).await?;
            println!("{}", outcome.text);
            info!("Translation produced by stage: {}", outcome.stage);
        }
    }

    info!("Khulasa workflow completed successfully");
    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let khulasa_dir = std::env::current_dir()?.join(".khulasa");
    let log_dir = khulasa_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "khulasa.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Create console layer
    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Logging initialized - console: {}, file: {}",
        log_level,
        log_dir.join("khulasa.log").display()
    );

    Ok(())
}
