//! restdocgen CLI entrypoint
//! Parses command-line arguments and dispatches to the application use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use restdocgen::application::{GenerateDocsRequest, GenerateDocsUseCase, ListHandlersUseCase};
use restdocgen::generation::OutputSink;
use restdocgen::infrastructure::{FileOutputSink, FileSnapshotLoader, StdoutSink};
use std::path::PathBuf;
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "restdocgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate MockMvc + REST Docs test snippets for request handlers
    Generate {
        /// Program snapshot (JSON or YAML)
        #[arg(long)]
        snapshot: String,
        /// Handler method to document; all applicable handlers when omitted
        #[arg(long)]
        handler: Option<String>,
        /// Generator configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write snippets to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List handlers with a supported request mapping
    Handlers {
        /// Program snapshot (JSON or YAML)
        #[arg(long)]
        snapshot: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO; stdout is reserved for snippets
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            snapshot,
            handler,
            config,
            output,
        } => generate(snapshot, handler, config, output).await?,
        Commands::Handlers { snapshot } => list_handlers(&snapshot).await?,
    }
    Ok(())
}

/// Runtime handler for the generate command
async fn generate(
    snapshot: String,
    handler: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let sink: Arc<dyn OutputSink> = match output {
        Some(path) => Arc::new(FileOutputSink::new(path)),
        None => Arc::new(StdoutSink::new()),
    };
    let use_case = GenerateDocsUseCase::new(Arc::new(FileSnapshotLoader::new()), sink);

    let request = GenerateDocsRequest {
        snapshot_path: snapshot.clone(),
        handler,
        config_path: config,
    };
    let response = use_case
        .execute(request)
        .await
        .with_context(|| format!("Failed to generate snippets from {snapshot}"))?;

    for doc in &response.generated {
        info!(
            handler = %doc.handler,
            method = %doc.method,
            path = %doc.path,
            diagnostics = doc.diagnostics,
            "Documented handler"
        );
    }
    Ok(())
}

/// Runtime handler for the handlers command
async fn list_handlers(snapshot: &str) -> anyhow::Result<()> {
    let use_case = ListHandlersUseCase::new(Arc::new(FileSnapshotLoader::new()));
    let handlers = use_case
        .execute(snapshot)
        .await
        .with_context(|| format!("Failed to list handlers in {snapshot}"))?;

    if handlers.is_empty() {
        println!("No handlers with a supported request mapping.");
    } else {
        for handler in &handlers {
            println!(
                "{:<8} {:<40} {}",
                handler.method.to_string().to_uppercase(),
                handler.path,
                handler.name
            );
        }
    }
    Ok(())
}
