use crate::model::{Location, LocationQuery};

/// Ordered table of the locations a provider knows about.
///
/// Ids are unique; names may repeat, in which case name lookups return the
/// first entry in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn by_id(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    pub fn id_for_name(&self, name: &str) -> Option<&str> {
        self.by_name(name).map(|l| l.id.as_str())
    }

    pub fn covers(&self, query: LocationQuery<'_>) -> bool {
        match query {
            LocationQuery::Id(id) => self.by_id(id).is_some(),
            LocationQuery::Name(name) => self.by_name(name).is_some(),
        }
    }

    /// Resolve the provider-specific id for `query`.
    ///
    /// Ids are passed through unchecked so that locations missing from a stale
    /// snapshot can still be requested.
    pub fn resolve<'a>(&'a self, query: LocationQuery<'a>) -> Option<&'a str> {
        match query {
            LocationQuery::Id(id) => Some(id),
            LocationQuery::Name(name) => self.id_for_name(name),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn into_inner(self) -> Vec<Location> {
        self.locations
    }
}

impl FromIterator<Location> for LocationCatalog {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
