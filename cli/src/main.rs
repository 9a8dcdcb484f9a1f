//! CLI entrypoint for Vyapar Sathi
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vyapar_application::{AdviceController, LifecycleState};
use vyapar_domain::AdviceRequest;
use vyapar_infrastructure::{ConfigLoader, GeminiAdviceGateway};
use vyapar_presentation::{AdviceSpinner, Cli, ConsoleFormatter, InputForm, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Vyapar Sathi");

    // Resolve configuration and credential before anything else; a
    // missing API key is a fatal startup condition
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    let api_key = ConfigLoader::resolve_api_key(&config)?;

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiAdviceGateway::new(api_key, &config.gemini));
    let controller = AdviceController::new(gateway);

    // Gather the three fields: example, flags, or interactive prompts
    let (business_type, situation, goal) = if cli.example {
        let example = AdviceRequest::example();
        (example.business_type, example.situation, example.goal)
    } else {
        InputForm::fill(cli.business_type, cli.situation, cli.goal)?
    };

    let spinner = if cli.quiet {
        AdviceSpinner::hidden()
    } else {
        AdviceSpinner::start()
    };

    controller.submit(business_type, situation, goal).await;
    spinner.finish();

    match controller.state() {
        LifecycleState::Success(advice) => {
            let output = match cli.output {
                OutputFormat::Card => ConsoleFormatter::format_advice(&advice),
                OutputFormat::Json => ConsoleFormatter::format_json(&advice),
            };
            println!("{}", output);
            Ok(())
        }
        LifecycleState::Error(message) => {
            eprintln!("{}", ConsoleFormatter::format_error(&message));
            std::process::exit(1);
        }
        state => {
            // submit() always resolves to Success or Error
            anyhow::bail!("Unexpected lifecycle state after submit: {:?}", state)
        }
    }
}
