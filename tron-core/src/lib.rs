//! Core library for the TRON (ToRainOrNot) weather widget backend.
//!
//! This crate defines:
//! - Configuration of the locations to cache and where to store them
//! - Abstraction over weather providers and a registry to resolve them
//! - The sinoptik.bg provider
//! - The daily cache writer producing one JSON file per location per day
//!
//! It is used by `tron-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod provider;

pub use cache::{CacheOutcome, CacheWriter, RunReport};
pub use catalog::LocationCatalog;
pub use config::{CachedLocation, Config, HttpConfig, SinoptikConfig};
pub use error::{CacheError, ProviderError};
pub use model::{HourlyForecast, Location, LocationQuery, PartialData};
pub use provider::{ProviderRegistry, WeatherProvider, sinoptik::SinoptikProvider};
