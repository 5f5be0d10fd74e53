mod config;
mod host;
mod scheduler;
mod script;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = match config::GalleryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let report = match host::run(&config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, screen = config.screen.name(), "gallery run failed");
            return ExitCode::FAILURE;
        }
    };

    if config.dump {
        match serde_json::to_string_pretty(&report.last_frame) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to encode last frame");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
