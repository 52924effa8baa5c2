use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(i64);

/// A species row as stored by the catalog's data store.
///
/// Instances are snapshots: nothing in this workspace creates or deletes
/// species, it only reads them and issues partial updates keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub total_population: Option<i64>,
    pub kingdom: String,
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Read-only projection of a [`Species`] for display-only consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesView<'a> {
    pub scientific_name: &'a str,
    pub common_name: Option<&'a str>,
    pub total_population: Option<i64>,
    pub kingdom: &'a str,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
}

impl SpeciesId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Species {
    pub fn view(&self) -> SpeciesView<'_> {
        SpeciesView::from(self)
    }
}

impl<'a> From<&'a Species> for SpeciesView<'a> {
    fn from(value: &'a Species) -> Self {
        Self {
            scientific_name: &value.scientific_name,
            common_name: value.common_name.as_deref(),
            total_population: value.total_population,
            kingdom: &value.kingdom,
            description: value.description.as_deref(),
            image: value.image.as_deref(),
        }
    }
}
