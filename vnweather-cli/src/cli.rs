use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use vnweather_core::{
    AlwaysConfirm, Config, Confirm, CurrentWeather, FileStore, WeatherApp, provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "vnweather", version, about = "City weather lookup")]
pub struct Cli {
    /// Log requests and saved-list changes to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the OpenWeather API key and optional base URL.
    Configure,

    /// Look up current weather and add the city to the saved list.
    Search {
        /// City name, e.g. "Hà Nội", "saigon" or "London".
        city: String,
    },

    /// Show the saved cities.
    List,

    /// Detailed view with the 5-day forecast.
    Show {
        /// Saved city id, or a city name to search for.
        city: String,
    },

    /// Remove a saved city.
    Delete {
        /// Saved city id (see `vnweather list`).
        id: u64,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Search { city } => {
                let mut app = open_app()?;
                search(&mut app, &city).await;
                Ok(())
            }
            Command::List => {
                let app = open_app()?;
                render::print_saved(app.saved());
                Ok(())
            }
            Command::Show { city } => {
                let mut app = open_app()?;
                show(&mut app, &city).await;
                Ok(())
            }
            Command::Delete { id, yes } => {
                let mut app = open_app()?;
                let removed = if yes {
                    app.delete(id, &AlwaysConfirm)
                } else {
                    app.delete(id, &PromptConfirm)
                };
                render::print_delete_result(id, removed, app.saved().contains(id));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    cfg.set_api_key(api_key.trim().to_string());

    let base_url = Text::new("Base URL (empty for default):")
        .with_default(cfg.base_url())
        .prompt()
        .context("Failed to read base URL")?;
    cfg.set_base_url(&base_url);

    cfg.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn open_app() -> anyhow::Result<WeatherApp> {
    let cfg = Config::load()?;
    let provider = provider_from_config(&cfg)?;
    let store = FileStore::new(cfg.storage_path()?);
    Ok(WeatherApp::new(provider, Box::new(store)))
}

async fn search(app: &mut WeatherApp, city: &str) -> Option<CurrentWeather> {
    if city.trim().is_empty() {
        render::print_placeholder();
        return None;
    }

    match app.search(city).await {
        Ok(weather) => {
            render::print_card(&weather, Utc::now().timestamp());
            Some(weather)
        }
        Err(err) => {
            render::print_error(&err);
            None
        }
    }
}

async fn show(app: &mut WeatherApp, city: &str) {
    let saved = city
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(|id| app.saved().get(id).cloned());

    let weather = match saved {
        Some(weather) => weather,
        None => match search(app, city).await {
            Some(weather) => weather,
            None => return,
        },
    };

    let view = app.detail(&weather, Utc::now().timestamp()).await;
    render::print_detail(&view);
}

/// Asks on the terminal. Anything but an explicit yes, including a closed
/// stdin, counts as cancel.
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, title: &str, message: &str) -> bool {
        inquire::Confirm::new(message)
            .with_help_message(title)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }
}
