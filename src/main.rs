// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_wiki::formatting::PageShell;
use notion_wiki::server::{create_router, AppState};
use notion_wiki::{AppError, CommandLineInput, NotionHttpClient, WikiConfig};
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("notion_wiki.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Builds the application state and serves the wiki until the process ends.
async fn serve(config: WikiConfig) -> Result<(), AppError> {
    let client = NotionHttpClient::new(&config.api_key, config.api_base.clone())?;
    let shell = PageShell::new()?;
    let state = AppState::new(Arc::new(client), config.view.clone(), shell);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!(
        "Serving {} at http://{}{}",
        config.view.site_title,
        config.bind,
        config.view.routes.mount()
    );

    axum::serve(listener, router).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match WikiConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Using API key {}", config.api_key);

    if let Err(e) = serve(config).await {
        log::error!("Server error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
