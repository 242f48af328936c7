//! BasisData MCP Server - SEC EDGAR financial data for AI agents
//!
//! This binary serves the BasisData tools to MCP clients over stdio,
//! and offers a few helper commands for inspecting them locally.

use anyhow::{Context, Result};
use basisdata_client::ApiClient;
use basisdata_core::{ApiConfig, API_KEY_ENV};
use basisdata_mcp::{McpServer, McpServerConfig, MCP_VERSION};
use basisdata_tools::builtin_registry;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basisdata-mcp")]
#[command(about = "BasisData MCP Server - SEC EDGAR financial data for AI agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base URL (overrides BASISDATA_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Request timeout in seconds (overrides BASISDATA_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP Server in stdio mode (default)
    Stdio,

    /// List available tools
    ListTools,

    /// Print server info
    Info,

    /// Call one tool and print its output
    Call {
        /// Tool name
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn api_config(cli: &Cli) -> ApiConfig {
    let mut config = ApiConfig::from_env();
    if let Some(base) = &cli.api_base {
        config = config.with_base_url(base.as_str());
    }
    if let Some(secs) = cli.timeout_secs.filter(|secs| *secs > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = api_config(&cli);
    if !config.has_credential() {
        info!("{} is not set; tools will report it on every call", API_KEY_ENV);
    }
    let client = ApiClient::new(config);
    let server = McpServer::new(McpServerConfig::default(), builtin_registry(client.clone()));

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => {
            server.start().await?;
        }

        Commands::ListTools => {
            let schemas = server.registry().schemas();
            println!("Available tools ({}):", schemas.len());
            for schema in schemas {
                println!("  - {}: {}", schema.name, schema.description);
            }
        }

        Commands::Info => {
            println!("BasisData MCP Server v{}", server.config().version);
            println!("Protocol: MCP {}", MCP_VERSION);
            println!("Transport: stdio");
            let api = client.config();
            println!("API base: {}", api.base_url);
            println!("API key: {}", if api.has_credential() { "set" } else { "missing" });
            println!("Tools: {}", server.registry().len());
        }

        Commands::Call { tool, args } => {
            let arguments = serde_json::from_str(&args).context("--args must be a JSON object")?;
            let output = server.registry().call(&tool, arguments).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
