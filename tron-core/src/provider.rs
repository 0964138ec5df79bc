use crate::{
    Config, HourlyForecast, LocationQuery, error::ProviderError, http,
    provider::sinoptik::SinoptikProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod sinoptik;

/// A pluggable upstream weather source.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Unique identifier, e.g. `"sinoptik"`.
    fn id(&self) -> &str;

    /// Whether this provider knows the location referred to by `query`.
    fn covers(&self, query: LocationQuery<'_>) -> bool;

    /// Download the hourly forecast for the next 24 hours.
    ///
    /// A name is first resolved to the provider's id, failing with
    /// [`ProviderError::UnknownLocation`]. Incomplete source data yields a
    /// shorter forecast rather than an error.
    async fn download(&self, query: LocationQuery<'_>) -> Result<HourlyForecast, ProviderError>;
}

/// Providers available to the cache job, in registration order.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: Vec<Box<dyn WeatherProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and register every known provider once.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let client = http::build_client(config.http.timeout())?;

        let mut registry = Self::new();
        registry.register(Box::new(SinoptikProvider::new(
            client,
            config.sinoptik.clone(),
            &config.http,
        )));

        Ok(registry)
    }

    pub fn register(&mut self, provider: Box<dyn WeatherProvider>) {
        tracing::debug!("Registering provider: {}", provider.id());
        self.providers.push(provider);
    }

    /// Find a provider by id, or else by the first one covering `location_name`.
    ///
    /// When `provider_id` is given only the id is considered, so an unknown id
    /// yields `None` even if some provider covers the location.
    pub fn find_provider(
        &self,
        provider_id: Option<&str>,
        location_name: Option<&str>,
    ) -> Option<&dyn WeatherProvider> {
        if let Some(id) = provider_id {
            return self.get(id);
        }

        let name = location_name?;
        self.providers
            .iter()
            .find(|p| p.covers(LocationQuery::Name(name)))
            .map(|p| p.as_ref())
    }

    pub fn get(&self, provider_id: &str) -> Option<&dyn WeatherProvider> {
        self.providers.iter().find(|p| p.id() == provider_id).map(|p| p.as_ref())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.id())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use crate::model::hour_labels;
    use std::{
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    /// In-memory provider that counts downloads.
    #[derive(Debug, Clone)]
    pub struct StubProvider {
        pub id: String,
        pub names: Vec<String>,
        pub hours: usize,
        /// Time each download takes.
        pub delay: Duration,
        pub calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        pub fn new(id: &str, names: &[&str]) -> Self {
            Self {
                id: id.to_string(),
                names: names.iter().map(|n| n.to_string()).collect(),
                hours: 24,
                delay: Duration::ZERO,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        fn id(&self) -> &str {
            &self.id
        }

        fn covers(&self, query: LocationQuery<'_>) -> bool {
            match query {
                LocationQuery::Name(name) => self.names.iter().any(|n| n == name),
                LocationQuery::Id(_) => false,
            }
        }

        async fn download(
            &self,
            query: LocationQuery<'_>,
        ) -> Result<HourlyForecast, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if let LocationQuery::Name(name) = query {
                if !self.covers(query) {
                    return Err(ProviderError::UnknownLocation(name.to_string()));
                }
            }

            let mut forecast = HourlyForecast::new();
            for hour in hour_labels(0).take(self.hours) {
                forecast.push(hour, vec!["6°".into(), "3%".into(), "0.0 mm".into()]);
            }
            Ok(forecast)
        }
    }
}
