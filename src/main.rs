use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use nodegen_models::config::AppConfig;
use nodegen_models::domain::node::dto::node_creation_request::NodeCreationRequest;
use nodegen_models::domain::node::service::node_request_service::{
    encode, normalize_node_request, summarize, template_node_request,
};
use nodegen_models::logging::init_logging;

#[derive(Parser)]
#[command(name = "nodegen", about = "Build and check node creation payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a payload and print it in canonical form
    Validate {
        /// JSON file to read, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Build a payload from flags
    Build(BuildArgs),
    /// Print a payload with every field at its zero value
    Template,
}

#[derive(Args)]
struct BuildArgs {
    #[arg(long)]
    domain: String,
    #[arg(long)]
    api_url: String,
    #[arg(long, env = "NODEGEN_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(long, allow_negative_numbers = true)]
    cpu: f32,
    #[arg(long, allow_negative_numbers = true)]
    memory: f32,
    #[arg(long, allow_negative_numbers = true)]
    disk: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    gpu: f32,
    #[arg(long, default_value = "none")]
    gpu_type: String,
    #[arg(long)]
    class: String,
    #[arg(long, allow_negative_numbers = true)]
    capacity: f32,
    #[arg(long)]
    region: String,
}

impl From<BuildArgs> for NodeCreationRequest {
    fn from(args: BuildArgs) -> Self {
        NodeCreationRequest::new(
            args.domain,
            args.api_url,
            args.api_key,
            args.cpu,
            args.memory,
            args.disk,
            args.gpu,
            args.gpu_type,
            args.class,
            args.capacity,
            args.region,
        )
    }
}

fn main() -> ExitCode {
    // Loads .env before clap reads env-backed flags.
    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("❌ Invalid configuration: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    let cli = Cli::parse();

    let _guard = match init_logging(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("❌ Failed to initialize logging: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(cli.command, &config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Validate { input } => {
            let bytes = read_input(&input)?;
            normalize_node_request(&bytes, config.pretty)
        }
        Command::Build(args) => {
            let req = NodeCreationRequest::from(args);
            info!(summary = %summarize(&req), "Built node creation request");
            encode(&req, config.pretty)
        }
        Command::Template => template_node_request(config.pretty),
    }
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }
    fs::read(input).with_context(|| format!("Failed to read payload from {}", input.display()))
}
