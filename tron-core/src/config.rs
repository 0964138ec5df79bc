use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::http::RetryPolicy;

/// A location whose forecast is cached daily.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedLocation {
    /// Human-readable name, as listed by the provider.
    pub name: String,

    /// Optional provider id; when absent the first provider covering `name` is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl CachedLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), provider: None }
    }

    pub fn pinned(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self { name: name.into(), provider: Some(provider.into()) }
    }
}

/// HTTP settings shared by all providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// User agent presenting us as a mobile browser (hourly pages).
    pub mobile_user_agent: String,
    /// User agent presenting us as a desktop browser (location directory).
    pub desktop_user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 2,
            initial_backoff_ms: 500,
            max_backoff_ms: 5_000,
            mobile_user_agent: "Mozilla/5.0 (Linux; U; Android 4.0.3; ko-kr; LG-L160L Build/IML74K) \
                AppleWebkit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30"
                .to_string(),
            desktop_user_agent:
                "Mozilla/5.0 (Windows NT x.y; rv:10.0) Gecko/20100101 Firefox/10.0".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.initial_backoff_ms, self.max_backoff_ms)
    }
}

/// Settings of the sinoptik.bg provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinoptikConfig {
    /// Hourly pages live at `{hourly_base_url}/{location id}/hourly`.
    pub hourly_base_url: String,
    /// Directory pages live at `{locations_base_url}/{letter}?locations`.
    pub locations_base_url: String,
    /// Pause between directory pages during a catalog refresh.
    pub letter_delay_ms: u64,
    /// Initial letters that have a directory page on the site.
    pub letters: Vec<String>,
}

impl Default for SinoptikConfig {
    fn default() -> Self {
        Self {
            hourly_base_url: "http://m.sinoptik.bg".to_string(),
            locations_base_url: "http://sinoptik.bg/locations/europe/bulgaria".to_string(),
            letter_delay_ms: 500,
            letters: [
                "А", "Б", "В", "Г", "Д", "Е", "З", "И", "К", "Л", "М", "Н", "О", "П", "Р", "С",
                "Т", "У", "Х", "Ц", "Ч", "Ш", "Я",
            ]
            .iter()
            .map(|l| l.to_string())
            .collect(),
        }
    }
}

impl SinoptikConfig {
    pub fn letter_delay(&self) -> Duration {
        Duration::from_millis(self.letter_delay_ms)
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// cache_dir = "data"
///
/// [[locations]]
/// name = "София"
/// provider = "sinoptik"
///
/// [[locations]]
/// name = "Велико Търново"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the cache; files land in `{cache_dir}/{location}/{YYYYMMDD}.json`.
    pub cache_dir: PathBuf,

    /// Locations to cache, processed in this order.
    pub locations: Vec<CachedLocation>,

    pub http: HttpConfig,
    pub sinoptik: SinoptikConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("data"),
            locations: vec![CachedLocation::new("Велико Търново"), CachedLocation::new("София")],
            http: HttpConfig::default(),
            sinoptik: SinoptikConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the default path, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("bg", "tron", "tron")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Add a location, or replace the pin of an existing one with the same name.
    pub fn add_location(&mut self, location: CachedLocation) {
        match self.locations.iter_mut().find(|l| l.name == location.name) {
            Some(existing) => existing.provider = location.provider,
            None => self.locations.push(location),
        }
    }

    pub fn remove_location(&mut self, name: &str) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l.name != name);
        self.locations.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cache_the_reference_locations() {
        let cfg = Config::default();

        assert_eq!(cfg.cache_dir, PathBuf::from("data"));
        let names: Vec<&str> = cfg.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Велико Търново", "София"]);
        assert!(cfg.locations.iter().all(|l| l.provider.is_none()));
        assert_eq!(cfg.sinoptik.letters.len(), 23);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            cache_dir = "/var/cache/tron"

            [[locations]]
            name = "София"
            provider = "sinoptik"

            [[locations]]
            name = "Бургас"

            [http]
            timeout_secs = 5
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.cache_dir, PathBuf::from("/var/cache/tron"));
        assert_eq!(
            cfg.locations,
            vec![CachedLocation::pinned("София", "sinoptik"), CachedLocation::new("Бургас")]
        );
        assert_eq!(cfg.http.timeout(), Duration::from_secs(5));
        assert_eq!(cfg.http.max_retries, HttpConfig::default().max_retries);
        assert_eq!(cfg.sinoptik, SinoptikConfig::default());
    }

    #[test]
    fn add_location_replaces_pin_and_keeps_order() {
        let mut cfg = Config::default();

        cfg.add_location(CachedLocation::pinned("Велико Търново", "sinoptik"));
        cfg.add_location(CachedLocation::new("Варна"));

        let names: Vec<&str> = cfg.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Велико Търново", "София", "Варна"]);
        assert_eq!(cfg.locations[0].provider.as_deref(), Some("sinoptik"));

        assert!(cfg.remove_location("София"));
        assert!(!cfg.remove_location("София"));
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.cache_dir = dir.path().join("cache");
        cfg.add_location(CachedLocation::pinned("Русе", "sinoptik"));
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(cfg, Config::default());
    }
}
