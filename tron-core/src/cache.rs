//! Daily forecast cache.
//!
//! Each configured location gets at most one file per calendar day, at
//! `{cache_dir}/{location}/{YYYYMMDD}.json`. An existing file is never
//! rewritten: its presence is the only freshness check, and no provider is
//! contacted for that location until the date changes.

use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::{
    config::CachedLocation,
    error::CacheError,
    model::{FORECAST_HOURS, LocationQuery},
    provider::ProviderRegistry,
};

/// What happened to one location during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    /// A new file was written with `hours` forecast rows.
    Written { path: PathBuf, hours: usize },
    /// Today's file already existed. No provider was called, unless another
    /// run created the file while this one was downloading.
    AlreadyCached { path: PathBuf },
}

/// Per-location results of one run, in configuration order.
#[derive(Debug)]
pub struct RunReport {
    pub date: NaiveDate,
    pub results: Vec<(String, Result<CacheOutcome, CacheError>)>,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, CacheOutcome::Written { .. }))
    }

    pub fn already_cached(&self) -> usize {
        self.count(|o| matches!(o, CacheOutcome::AlreadyCached { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &CacheError)> {
        self.results
            .iter()
            .filter_map(|(name, res)| res.as_ref().err().map(|e| (name.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(|(_, res)| res.is_ok())
    }

    fn count(&self, pred: impl Fn(&CacheOutcome) -> bool) -> usize {
        self.results.iter().filter(|(_, res)| res.as_ref().is_ok_and(&pred)).count()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.total() - self.written() - self.already_cached();
        write!(
            f,
            "Processed {} of {} locations: {} written, {} already cached, {} failed",
            self.written() + self.already_cached(),
            self.total(),
            self.written(),
            self.already_cached(),
            failed,
        )
    }
}

/// Writes one forecast file per location per day.
#[derive(Debug)]
pub struct CacheWriter<'a> {
    registry: &'a ProviderRegistry,
    cache_dir: PathBuf,
}

impl<'a> CacheWriter<'a> {
    pub fn new(registry: &'a ProviderRegistry, cache_dir: impl Into<PathBuf>) -> Self {
        Self { registry, cache_dir: cache_dir.into() }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// `{cache_dir}/{location}/{YYYYMMDD}.json`
    pub fn cache_path(&self, location: &str, date: NaiveDate) -> PathBuf {
        self.cache_dir.join(location).join(format!("{}.json", date.format("%Y%m%d")))
    }

    /// Cache every location in order. A failing location is recorded in the
    /// report and does not stop the others.
    pub async fn run(&self, locations: &[CachedLocation], date: NaiveDate) -> RunReport {
        let mut report = RunReport { date, results: Vec::with_capacity(locations.len()) };

        for location in locations {
            let result = self.cache_location(location, date).await;
            if let Err(err) = &result {
                tracing::error!(location = %location.name, "Caching failed: {}", error_chain(err));
            }
            report.results.push((location.name.clone(), result));
        }

        tracing::info!("{report}");
        report
    }

    pub async fn cache_location(
        &self,
        location: &CachedLocation,
        date: NaiveDate,
    ) -> Result<CacheOutcome, CacheError> {
        let name = location.name.as_str();
        let path = self.cache_path(name, date);
        let day = date.format("%d.%m.%Y");

        if path.is_file() {
            tracing::info!("Data for {name} on {day} already exists");
            return Ok(CacheOutcome::AlreadyCached { path });
        }

        let pinned = location.provider.as_deref();
        let provider = self.registry.find_provider(pinned, Some(name)).ok_or_else(|| {
            CacheError::ProviderNotFound {
                location: name.to_string(),
                provider: pinned.map(str::to_string),
            }
        })?;

        let forecast = provider.download(LocationQuery::Name(name)).await.map_err(|source| {
            CacheError::Provider {
                location: name.to_string(),
                provider: provider.id().to_string(),
                source,
            }
        })?;

        if forecast.len() < FORECAST_HOURS {
            tracing::warn!(
                location = name,
                provider = provider.id(),
                "Caching incomplete forecast: {} of {FORECAST_HOURS} hours",
                forecast.len()
            );
        }

        let json = serde_json::to_vec(&forecast)
            .map_err(|source| CacheError::Serialize { location: name.to_string(), source })?;

        let written = write_new(&path, &json)
            .map_err(|source| CacheError::Write { path: path.clone(), source })?;
        if !written {
            tracing::info!("Data for {name} on {day} was cached by another run meanwhile");
            return Ok(CacheOutcome::AlreadyCached { path });
        }

        tracing::info!("Cached data for {name} on {day} to file {}", path.display());

        Ok(CacheOutcome::Written { path, hours: forecast.len() })
    }
}

/// Write through a uniquely named sibling temp file that is linked into place
/// only if `path` does not exist yet, so readers never see a half-written
/// forecast and a concurrent writer never replaces an existing one.
///
/// Returns `false` when `path` already existed.
fn write_new(path: &Path, contents: &[u8]) -> io::Result<bool> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    create_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    set_readable(tmp.as_file())?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err.error),
    }
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn set_readable(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &fs::File) -> io::Result<()> {
    Ok(())
}

/// Render an error with its sources, `outer: inner: root`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}
