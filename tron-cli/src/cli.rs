use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use tron_core::{
    CacheWriter, CachedLocation, Config, HourlyForecast, Location, LocationQuery,
    ProviderRegistry, SinoptikProvider, cache::error_chain, http,
};

const ANY_PROVIDER: &str = "(first provider covering the location)";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "tron", version, about = "Daily hourly-forecast cache for the TRON weather widget")]
pub struct Cli {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cache today's forecast for every configured location.
    Update {
        /// Override the configured cache directory.
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },

    /// Download and print the forecast for a location, without caching it.
    Show {
        /// Location name, as listed by the provider (e.g. "София").
        location: String,

        /// Provider id, e.g. "sinoptik"; by default the first provider covering the location.
        #[arg(long)]
        provider: Option<String>,
    },

    /// Interactively add a location to cache and set the cache directory.
    Configure,

    /// Inspect or rebuild the sinoptik.bg location catalog.
    Locations {
        #[command(subcommand)]
        command: LocationsCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum LocationsCommand {
    /// List the bundled locations.
    List {
        /// Only show names containing this text (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },

    /// Re-scrape the location directory from the site. Slow: pages are fetched one letter at a time.
    Refresh {
        /// Write the catalog as JSON to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = self.config.as_deref();
        let config = load_config(config_path)?;

        match self.command {
            Command::Update { cache_dir } => update(config, cache_dir).await,
            Command::Show { location, provider } => {
                show(&config, &location, provider.as_deref()).await
            }
            Command::Configure => configure(config, config_path),
            Command::Locations { command: LocationsCommand::List { filter } } => {
                list_locations(&config, filter.as_deref())
            }
            Command::Locations { command: LocationsCommand::Refresh { output } } => {
                refresh_locations(&config, output.as_deref()).await
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn update(mut config: Config, cache_dir: Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(dir) = cache_dir {
        config.cache_dir = dir;
    }

    let registry = ProviderRegistry::from_config(&config)?;
    let writer = CacheWriter::new(&registry, &config.cache_dir);
    let today = Local::now().date_naive();

    let report = writer.run(&config.locations, today).await;
    println!("{report}");

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        for (location, err) in &failures {
            eprintln!("  {location}: {}", error_chain(*err));
        }
        bail!("{} of {} locations failed", failures.len(), report.total());
    }

    Ok(())
}

async fn show(config: &Config, location: &str, provider: Option<&str>) -> anyhow::Result<()> {
    let registry = ProviderRegistry::from_config(config)?;
    let Some(provider) = registry.find_provider(provider, Some(location)) else {
        bail!(
            "No provider found for '{location}'.\n\
             Hint: run `tron locations list --filter <text>` to look up known names."
        );
    };

    let forecast = provider
        .download(LocationQuery::Name(location))
        .await
        .with_context(|| format!("Failed to download forecast for '{location}'"))?;

    println!("{}", forecast_heading(location, provider.id(), &forecast));
    print_forecast(&forecast);
    Ok(())
}

/// The window starts at the first hour the provider returned, not at the local clock.
fn forecast_heading(location: &str, provider: &str, forecast: &HourlyForecast) -> String {
    let from = forecast.hours().next().unwrap_or("-");
    format!("Forecast for {location} ({provider}), from {from}")
}

fn print_forecast(forecast: &HourlyForecast) {
    println!("{:>6}  {:>6}  {:>8}  {:>10}", "Hour", "Temp", "Rain %", "Rain");
    for (hour, values) in forecast.iter() {
        let value = |i: usize| values.get(i).map(String::as_str).unwrap_or("-");
        println!("{:>6}  {:>6}  {:>8}  {:>10}", hour, value(0), value(1), value(2));
    }
    if !forecast.is_complete() {
        println!("(only {} hours available)", forecast.len());
    }
}

fn configure(mut config: Config, path: Option<&Path>) -> anyhow::Result<()> {
    let registry = ProviderRegistry::from_config(&config)?;

    let name = Text::new("Location name:")
        .with_help_message("As listed by the provider, e.g. София")
        .prompt()?;
    let name = name.trim().to_string();
    if name.is_empty() {
        bail!("Location name must not be empty");
    }

    let mut options = vec![ANY_PROVIDER.to_string()];
    options.extend(registry.ids().map(str::to_string));
    let choice = Select::new("Provider:", options).prompt()?;
    let provider = (choice != ANY_PROVIDER).then_some(choice);

    let covered = registry
        .find_provider(provider.as_deref(), Some(&name))
        .is_some_and(|p| p.covers(LocationQuery::Name(&name)));
    if !covered {
        let keep = Confirm::new(&format!("No provider knows '{name}'. Add it anyway?"))
            .with_default(false)
            .prompt()?;
        if !keep {
            println!("Configuration unchanged.");
            return Ok(());
        }
    }

    let cache_dir = Text::new("Cache directory:")
        .with_default(&config.cache_dir.display().to_string())
        .prompt()?;
    config.cache_dir = PathBuf::from(cache_dir);

    config.add_location(CachedLocation { name: name.clone(), provider });

    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }

    println!("Added {name}. Caching {} locations:", config.locations.len());
    for location in &config.locations {
        match &location.provider {
            Some(id) => println!("  {} ({id})", location.name),
            None => println!("  {}", location.name),
        }
    }
    Ok(())
}

fn sinoptik(config: &Config) -> anyhow::Result<SinoptikProvider> {
    let client = http::build_client(config.http.timeout())?;
    Ok(SinoptikProvider::new(client, config.sinoptik.clone(), &config.http))
}

fn list_locations(config: &Config, filter: Option<&str>) -> anyhow::Result<()> {
    let provider = sinoptik(config)?;
    let filter = filter.map(str::to_lowercase);

    let matches = provider
        .locations()
        .iter()
        .filter(|l| filter.as_deref().is_none_or(|f| l.name.to_lowercase().contains(f)));

    for location in matches {
        println!("{:<24} {}", location.name, location.id);
    }
    Ok(())
}

async fn refresh_locations(config: &Config, output: Option<&Path>) -> anyhow::Result<()> {
    let mut provider = sinoptik(config)?;
    let catalog = provider.refresh_locations().await?;

    let locations: Vec<&Location> = catalog.iter().collect();
    let json = serde_json::to_string_pretty(&locations)?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write catalog: {}", path.display()))?;
            println!("Wrote {} locations to {}", locations.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_update_with_global_config() {
        let cli = Cli::try_parse_from(["tron", "update", "--config", "/etc/tron.toml"])
            .expect("parse");

        assert_eq!(cli.config, Some(PathBuf::from("/etc/tron.toml")));
        assert!(matches!(cli.command, Command::Update { cache_dir: None }));
    }

    #[test]
    fn parses_show_with_pinned_provider() {
        let cli = Cli::try_parse_from(["tron", "show", "София", "--provider", "sinoptik"])
            .expect("parse");

        match cli.command {
            Command::Show { location, provider } => {
                assert_eq!(location, "София");
                assert_eq!(provider.as_deref(), Some("sinoptik"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn heading_starts_at_first_forecast_hour() {
        let mut forecast = HourlyForecast::new();
        forecast.push("23:00", vec!["4°".into(), "0%".into(), "0.0 mm".into()]);
        forecast.push("0:00", vec!["3°".into(), "0%".into(), "0.0 mm".into()]);

        assert_eq!(
            forecast_heading("София", "sinoptik", &forecast),
            "Forecast for София (sinoptik), from 23:00"
        );
        assert_eq!(
            forecast_heading("София", "sinoptik", &HourlyForecast::new()),
            "Forecast for София (sinoptik), from -"
        );
    }

    #[test]
    fn parses_locations_refresh() {
        let cli = Cli::try_parse_from(["tron", "locations", "refresh", "--output", "catalog.json"])
            .expect("parse");

        assert!(matches!(
            cli.command,
            Command::Locations { command: LocationsCommand::Refresh { output: Some(_) } }
        ));
    }
}
