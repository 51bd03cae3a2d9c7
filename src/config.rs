// src/config.rs
use crate::constants::NOTION_API_BASE_URL;
use crate::error::AppError;
use crate::formatting::WikiRoutes;
use crate::types::{ApiBaseUrl, ApiKey, MountPath};
use clap::Parser;
use std::net::SocketAddr;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Path the wiki view is served under (e.g. "/" or "/notion")
    #[arg(long, default_value = "/")]
    pub mount_path: String,

    /// Status option a page must have to be listed
    #[arg(long, default_value = "완료")]
    pub status: String,

    /// Site name shown in the header and document title
    #[arg(long, default_value = "Notion Wiki")]
    pub site_title: String,

    /// Stylesheet href linked from every page
    #[arg(long, default_value = "./assets/style.css")]
    pub stylesheet: String,

    /// Base URL of the Notion REST API
    #[arg(long, default_value = NOTION_API_BASE_URL)]
    pub api_base: String,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved server configuration, created once at startup.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    pub api_key: ApiKey,
    pub api_base: ApiBaseUrl,
    pub bind: SocketAddr,
    pub verbose: bool,
    pub view: ViewSettings,
}

/// What the views need to know: everything except credentials and sockets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub published_status: String,
    pub site_title: String,
    pub stylesheet: String,
    pub routes: WikiRoutes,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            published_status: "완료".to_string(),
            site_title: "Notion Wiki".to_string(),
            stylesheet: "./assets/style.css".to_string(),
            routes: WikiRoutes::default(),
        }
    }
}

impl WikiConfig {
    /// Resolves the configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::from_parts(cli, api_key_str)
    }

    fn from_parts(cli: CommandLineInput, api_key: String) -> Result<Self, AppError> {
        let api_key = ApiKey::new(api_key)?;
        let api_base = ApiBaseUrl::parse(&cli.api_base)?;
        let mount_path = MountPath::new(cli.mount_path)?;

        if cli.status.trim().is_empty() {
            return Err(AppError::MissingConfiguration(
                "--status must not be empty".to_string(),
            ));
        }

        Ok(WikiConfig {
            api_key,
            api_base,
            bind: cli.bind,
            verbose: cli.verbose,
            view: ViewSettings {
                published_status: cli.status,
                site_title: cli.site_title,
                stylesheet: cli.stylesheet,
                routes: WikiRoutes::new(mount_path),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CommandLineInput {
        let mut argv = vec!["notion-wiki"];
        argv.extend_from_slice(args);
        CommandLineInput::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config =
            WikiConfig::from_parts(cli(&[]), "secret_abcdefghijklmnopqrs".to_string()).unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.api_base.as_str(), NOTION_API_BASE_URL);
        assert_eq!(config.view, ViewSettings::default());
        assert!(!config.verbose);
    }

    #[test]
    fn test_overrides() {
        let config = WikiConfig::from_parts(
            cli(&[
                "--mount-path",
                "/notion/",
                "--status",
                "Published",
                "--site-title",
                "Team Wiki",
                "-v",
            ]),
            "ntn_abcdefghijklmnopqrs".to_string(),
        )
        .unwrap();

        assert_eq!(config.view.routes.home(), "/notion");
        assert_eq!(config.view.published_status, "Published");
        assert_eq!(config.view.site_title, "Team Wiki");
        assert!(config.verbose);
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(WikiConfig::from_parts(cli(&[]), "bad".to_string()).is_err());
        assert!(WikiConfig::from_parts(
            cli(&["--mount-path", "notion"]),
            "secret_abcdefghijklmnopqrs".to_string()
        )
        .is_err());
        assert!(WikiConfig::from_parts(
            cli(&["--status", " "]),
            "secret_abcdefghijklmnopqrs".to_string()
        )
        .is_err());
    }
}
