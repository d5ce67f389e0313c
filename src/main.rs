//! vidfetch - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vidfetch::{
    api::HttpExecutor,
    cli::Args,
    config::{validate_config, validate_identifier, Config},
    download::{Orchestrator, ResourceRequest},
    error::{exit_codes, Error, Result},
    fs::DirectorySink,
    output::{create_spinner, print_error, print_info, print_probe_info, print_success,
        print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::Validation(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Cancelled => ExitCode::from(exit_codes::ABORT as u8),
                Error::Server(_) | Error::Api(_) => {
                    ExitCode::from(exit_codes::SERVER_ERROR as u8)
                }
                Error::Timeout(_)
                | Error::Network(_)
                | Error::Http(_)
                | Error::Io(_)
                | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration and the requested resource
    validate_config(&config)?;
    let url = args.url.clone().unwrap_or_default();
    validate_identifier(&url)?;

    let request = ResourceRequest::new(url, config.options.mode);

    let executor = HttpExecutor::new(&config.server.base_url)?;
    let sink = DirectorySink::new(config.output_directory());
    let orchestrator = Arc::new(Orchestrator::new(executor, sink));

    if args.info {
        print_info("Fetching media info...");
        let info = orchestrator.probe(&request).await?;
        print_probe_info(&info);
        return Ok(());
    }

    print_info(&format!(
        "Downloading {} from {}",
        config.options.mode, request.identifier
    ));

    let spinner = config
        .options
        .show_progress
        .then(|| create_spinner("Contacting server..."));

    // Mirror status transitions onto the spinner and the log.
    let mut status_rx = orchestrator.subscribe();
    let status_spinner = spinner.clone();
    tokio::spawn(async move {
        while status_rx.changed().await.is_ok() {
            let status = status_rx.borrow_and_update().clone();
            tracing::debug!("status: {} - {}", status.phase, status.message);
            if let Some(spinner) = &status_spinner {
                if !status.phase.is_terminal() {
                    spinner.set_message(status.message.clone());
                }
            }
        }
    });

    // Run the download; Ctrl-C cancels the in-flight exchange.
    let mut task = {
        let orchestrator = Arc::clone(&orchestrator);
        let request = request.clone();
        tokio::spawn(async move { orchestrator.download(&request).await })
    };

    let result = tokio::select! {
        result = &mut task => result,
        _ = tokio::signal::ctrl_c() => {
            print_warning("Interrupted, cancelling...");
            orchestrator.cancel();
            task.await
        }
    };

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let saved = result.map_err(|e| Error::Api(format!("Download task failed: {}", e)))??;

    print_success(&orchestrator.status().message);
    print_info(&format!("Saved to {}", saved.path.display()));

    Ok(())
}
