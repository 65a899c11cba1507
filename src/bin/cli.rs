// Entry point for the `briefly` command-line summarizer

use std::io;
use std::process::ExitCode;

use briefly::ai::HubLoader;
use briefly::cli;
use briefly::core::config::AppConfig;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return ExitCode::from(1);
        }
    };
    briefly::setup_logging_with(config.log_format);

    let loader = match HubLoader::new(&config) {
        Ok(loader) => loader,
        Err(e) => {
            error!("Inference client setup failed: {}", e);
            println!("{}", e);
            return ExitCode::from(1);
        }
    };

    let mut stdout = io::stdout().lock();
    let result = cli::run(&args, &loader, &mut stdout).await;
    if let Err(e) = &result {
        println!("{}", e);
    }

    ExitCode::from(cli::exit_status(&result))
}
