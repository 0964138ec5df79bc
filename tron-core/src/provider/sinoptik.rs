//! Hourly forecasts scraped from sinoptik.bg.
//!
//! Acquire permission from sinoptik before using their data.

use async_trait::async_trait;
use chrono::{Local, Timelike};
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};

use crate::{
    catalog::LocationCatalog,
    config::{HttpConfig, SinoptikConfig},
    error::ProviderError,
    http::{self, RetryPolicy},
    model::{HourlyForecast, LocationQuery, PartialData},
};

use super::WeatherProvider;

mod snapshot;
pub mod markup;

pub const PROVIDER_ID: &str = "sinoptik";

#[derive(Debug, Clone)]
pub struct SinoptikProvider {
    http: Client,
    config: SinoptikConfig,
    retry: RetryPolicy,
    mobile_user_agent: String,
    desktop_user_agent: String,
    locations: LocationCatalog,
}

impl SinoptikProvider {
    /// Create a provider backed by the bundled location snapshot.
    pub fn new(http: Client, config: SinoptikConfig, http_config: &HttpConfig) -> Self {
        Self {
            http,
            config,
            retry: http_config.retry_policy(),
            mobile_user_agent: http_config.mobile_user_agent.clone(),
            desktop_user_agent: http_config.desktop_user_agent.clone(),
            locations: LocationCatalog::new(snapshot::bundled_locations()),
        }
    }

    pub fn locations(&self) -> &LocationCatalog {
        &self.locations
    }

    pub fn set_locations(&mut self, locations: LocationCatalog) {
        self.locations = locations;
    }

    pub fn hourly_url(&self, location_id: &str) -> String {
        format!("{}/{}/hourly", self.config.hourly_base_url.trim_end_matches('/'), location_id)
    }

    fn directory_url(&self, letter: &str) -> String {
        format!("{}/{}?locations", self.config.locations_base_url.trim_end_matches('/'), letter)
    }

    /// Download the forecast with the window starting at `start_hour`.
    pub async fn download_from_hour(
        &self,
        query: LocationQuery<'_>,
        start_hour: u32,
    ) -> Result<HourlyForecast, ProviderError> {
        let location_id = self.locations.resolve(query).ok_or_else(|| match query {
            LocationQuery::Name(name) | LocationQuery::Id(name) => {
                ProviderError::UnknownLocation(name.to_string())
            }
        })?;

        let url = self.hourly_url(location_id);
        let page = http::fetch_text(&self.http, &url, self.page_headers()?, &self.retry).await?;
        let columns = markup::parse_hourly(&page)?;

        if let Some(partial) = PartialData::check(
            columns.temperature.len(),
            columns.probability.len(),
            columns.intensity.len(),
        ) {
            tracing::warn!(provider = PROVIDER_ID, location = %query, "Partial forecast data: {partial}");
        }

        Ok(HourlyForecast::from_columns(
            start_hour,
            columns.temperature,
            columns.probability,
            columns.intensity,
        ))
    }

    /// Re-scrape the site's location directory and replace the in-memory
    /// catalog with it.
    ///
    /// Letter pages are requested one at a time, with the configured delay
    /// between them. The current catalog is kept if any page fails.
    pub async fn refresh_locations(&mut self) -> Result<&LocationCatalog, ProviderError> {
        let headers = self.directory_headers()?;
        let mut locations = Vec::new();

        for (i, letter) in self.config.letters.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.config.letter_delay()).await;
            }

            let url = self.directory_url(letter);
            let page = http::fetch_text(&self.http, &url, headers.clone(), &self.retry).await?;
            let found = markup::parse_locations(&page)?;
            tracing::info!(letter = %letter, count = found.len(), "Scraped location directory page");
            locations.extend(found);
        }

        self.locations = LocationCatalog::new(locations);
        Ok(&self.locations)
    }

    fn page_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, header_value(&self.mobile_user_agent)?);
        Ok(headers)
    }

    // The directory only answers requests that look like the site's own ajax calls.
    fn directory_headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, header_value(&self.desktop_user_agent)?);
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(header::REFERER, header_value(&self.config.locations_base_url)?);
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ProviderError> {
    HeaderValue::from_str(value)
        .map_err(|e| ProviderError::Header(format!("'{value}': {e}")))
}

#[async_trait]
impl WeatherProvider for SinoptikProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn covers(&self, query: LocationQuery<'_>) -> bool {
        self.locations.covers(query)
    }

    async fn download(&self, query: LocationQuery<'_>) -> Result<HourlyForecast, ProviderError> {
        self.download_from_hour(query, Local::now().hour()).await
    }
}
