use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cityweather_core::{CityBoard, CitySearch, Config, WeatherLookup, lookup_from_config};
use inquire::Text;
use tokio::sync::mpsc;
use tracing::debug;

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a handful of cities")]
pub struct Cli {
    /// Read settings from this file instead of the platform config dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show current weather for every configured city (default).
    Board,

    /// Look a city up by name and show its current weather.
    Search {
        /// City name; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },

    /// Show the board, then prompt for cities until an empty line.
    Interactive,

    /// Edit provider URLs and save them to the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { config: config_path, command } = self;

        let config = match &config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        debug!(
            path = ?config_path,
            weather_url = %config.weather_url,
            geocoding_url = %config.geocoding_url,
            cities = config.cities.len(),
            "configuration loaded"
        );

        match command.unwrap_or(Command::Board) {
            Command::Board => {
                let lookup: Arc<dyn WeatherLookup> = lookup_from_config(&config).into();
                show_board(&config, lookup).await;
            }
            Command::Search { city } => {
                let lookup: Arc<dyn WeatherLookup> = lookup_from_config(&config).into();
                let search = CitySearch::new(lookup);
                show_search(&search, &city.join(" ")).await;
            }
            Command::Interactive => {
                let lookup: Arc<dyn WeatherLookup> = lookup_from_config(&config).into();
                show_board(&config, lookup.clone()).await;

                let search = CitySearch::new(lookup);
                loop {
                    let Some(query) = prompt_city().await? else {
                        break;
                    };
                    if query.trim().is_empty() {
                        break;
                    }
                    show_search(&search, &query).await;
                }
            }
            Command::Configure => configure(config, config_path).await?,
        }

        Ok(())
    }
}

async fn show_board(config: &Config, lookup: Arc<dyn WeatherLookup>) {
    let total = config.cities.len();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let board = CityBoard::new(lookup, config.cities.clone()).with_updates(tx);

    let progress = async {
        let mut settled = 0;
        while settled < total {
            let Some(update) = rx.recv().await else {
                break;
            };
            if update.state.is_settled() {
                settled += 1;
                eprint!("\r{} {settled}/{total}", view::LOADING);
            }
        }
        if total > 0 {
            eprintln!();
        }
    };

    let (slots, ()) = tokio::join!(board.load_all(), progress);

    println!("Current weather ({})", chrono::Local::now().format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", view::render_board(board.cities(), &slots));
}

async fn show_search(search: &CitySearch, query: &str) {
    if query.trim().is_empty() {
        return;
    }

    eprintln!("{}", view::LOADING);
    search.submit(query).await;
    debug!(query, state = ?search.state(), "search settled");

    if let Some(out) = view::render_search(&search.state()) {
        println!();
        println!("{out}");
    }
}

async fn prompt_city() -> anyhow::Result<Option<String>> {
    tokio::task::spawn_blocking(|| {
        Text::new("Search for a city...")
            .with_help_message("Empty line or Esc to quit")
            .prompt_skippable()
    })
    .await
    .context("Prompt task failed")?
    .context("Failed to read city name")
}

async fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let current = config.clone();
    let (weather_url, geocoding_url) = tokio::task::spawn_blocking(move || {
        let weather_url = Text::new("Weather API URL:")
            .with_default(&current.weather_url)
            .prompt()?;
        let geocoding_url = Text::new("Geocoding API URL:")
            .with_default(&current.geocoding_url)
            .prompt()?;
        Ok::<_, inquire::InquireError>((weather_url, geocoding_url))
    })
    .await
    .context("Prompt task failed")?
    .context("Failed to read configuration")?;

    config.weather_url = weather_url.trim().to_string();
    config.geocoding_url = geocoding_url.trim().to_string();
    config.validate()?;

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Saved configuration to {}", saved_to.display());
    println!("{} cities on the board; edit the file to change them.", config.cities.len());

    Ok(())
}
