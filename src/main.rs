use academiq_cli::utils::{logger, validation::Validate};
use academiq_cli::{CliConfig, FormController, HttpPredictionApi, Session};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting academiq CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let api = HttpPredictionApi::new(&config);

    // Both course schemas must resolve before the form is usable.
    let controller = match FormController::bootstrap(&api).await {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("Schema load failed: {}", e);
            eprintln!(
                "❌ Could not initialise from the backend at {}: {}",
                config.api_url, e
            );
            std::process::exit(1);
        }
    };

    let mut session = Session::new(&api, controller);
    if let Err(e) = session.run().await {
        tracing::error!("Session ended with error: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session closed");
}
