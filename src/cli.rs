//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. These arguments are parsed at startup and then merged with
//! the configuration from the `certnotify.toml` file and environment variables.

use clap::Parser;
use figment::{
    value::{Dict, Map, Tag, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Posts a Slack notification for a certificate-issuance event.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Slack incoming webhook URL.
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Display name to post under.
    #[arg(long, value_name = "NAME")]
    pub username: Option<String>,

    /// URL of the icon to post with.
    #[arg(long, value_name = "URL")]
    pub icon_url: Option<String>,

    /// JSON file holding the issuance result. Reads stdin when absent or `-`.
    #[arg(short, long, value_name = "FILE")]
    pub result: Option<PathBuf>,

    /// Print the payload instead of posting it.
    #[arg(long)]
    pub dry_run: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut slack = Dict::new();

        if let Some(url) = &self.webhook_url {
            slack.insert("webhook_url".into(), Value::from(url.clone()));
        }

        if let Some(username) = &self.username {
            slack.insert("username".into(), Value::from(username.clone()));
        }

        if let Some(icon_url) = &self.icon_url {
            slack.insert("icon_url".into(), Value::from(icon_url.clone()));
        }

        let mut dict = Dict::new();
        if !slack.is_empty() {
            dict.insert("slack".into(), Value::Dict(Tag::Default, slack));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
