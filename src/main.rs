use agcli::configuration::Configuration;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::execute_command;

/// Main entry point for the program
#[tokio::main]
async fn main() {
    // Initialize the logging subsystem
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get the configuration
    let configuration = match Configuration::load_or_create_default() {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    // Parse and execute the CLI command
    if let Err(e) = execute_command(configuration).await {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
