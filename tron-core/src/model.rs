use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// Length of the rolling forecast window, in hours.
pub const FORECAST_HOURS: usize = 24;

/// A named place and the provider-specific id used to request its forecast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub id: String,
}

impl Location {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into() }
    }
}

/// How a caller refers to a location when talking to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationQuery<'a> {
    Id(&'a str),
    Name(&'a str),
}

impl fmt::Display for LocationQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::Id(id) => write!(f, "location id '{id}'"),
            LocationQuery::Name(name) => write!(f, "location '{name}'"),
        }
    }
}

/// Hour-indexed forecast, in window order.
///
/// Each row maps an hour label (`"7:00"`, `"23:00"`) to the values shown by the
/// source: temperature, precipitation probability and precipitation intensity,
/// kept verbatim with their units. Serializes as a JSON object whose key order
/// is the row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyForecast {
    rows: Vec<(String, Vec<String>)>,
}

impl HourlyForecast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip three positionally aligned columns against the hour window starting
    /// at `start_hour`. The result is as long as the shortest column, capped at
    /// [`FORECAST_HOURS`].
    pub fn from_columns(
        start_hour: u32,
        temperature: Vec<String>,
        probability: Vec<String>,
        intensity: Vec<String>,
    ) -> Self {
        let values = temperature
            .into_iter()
            .zip(probability)
            .zip(intensity)
            .map(|((t, p), i)| vec![t, p, i]);

        Self { rows: hour_labels(start_hour).zip(values).collect() }
    }

    pub fn push(&mut self, hour: impl Into<String>, values: Vec<String>) {
        self.rows.push((hour.into(), values));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.rows.len() == FORECAST_HOURS
    }

    pub fn get(&self, hour: &str) -> Option<&[String]> {
        self.rows.iter().find(|(h, _)| h == hour).map(|(_, v)| v.as_slice())
    }

    pub fn hours(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(h, _)| h.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rows.iter().map(|(h, v)| (h.as_str(), v.as_slice()))
    }
}

/// Labels for the 24-hour window starting at `start_hour`, wrapping at midnight.
/// Any `start_hour` is taken modulo 24.
pub fn hour_labels(start_hour: u32) -> impl Iterator<Item = String> {
    let start = start_hour % 24;
    (0..FORECAST_HOURS as u32).map(move |i| format!("{}:00", (start + i) % 24))
}

impl Serialize for HourlyForecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (hour, values) in &self.rows {
            map.serialize_entry(hour, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HourlyForecast {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ForecastVisitor;

        impl<'de> Visitor<'de> for ForecastVisitor {
            type Value = HourlyForecast;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of hour labels to value arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut forecast = HourlyForecast::new();
                while let Some((hour, values)) = access.next_entry::<String, Vec<String>>()? {
                    forecast.push(hour, values);
                }
                Ok(forecast)
            }
        }

        deserializer.deserialize_map(ForecastVisitor)
    }
}

/// Column lengths extracted from a page that did not fill the forecast window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialData {
    pub temperature: usize,
    pub probability: usize,
    pub intensity: usize,
}

impl PartialData {
    /// `None` when all three columns are aligned and cover the whole window.
    pub fn check(temperature: usize, probability: usize, intensity: usize) -> Option<Self> {
        let aligned = temperature == probability && probability == intensity;
        if aligned && temperature >= FORECAST_HOURS {
            return None;
        }
        Some(Self { temperature, probability, intensity })
    }

    /// Number of forecast rows these columns produce.
    pub fn rows(&self) -> usize {
        self.temperature.min(self.probability).min(self.intensity).min(FORECAST_HOURS)
    }
}

impl fmt::Display for PartialData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {FORECAST_HOURS} aligned values, got temperature={}, probability={}, intensity={} ({} hours kept)",
            self.temperature,
            self.probability,
            self.intensity,
            self.rows(),
        )
    }
}
