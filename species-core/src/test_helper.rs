use std::sync::Mutex;

use async_trait::async_trait;

use crate::*;

/// In-memory stand-in for the remote store, applying partial updates to its rows.
#[derive(Debug, Default)]
pub struct InMemorySpeciesStore {
    species: Mutex<Vec<Species>>,
    updates: Mutex<Vec<(SpeciesId, SpeciesUpdate)>>,
    failure: Mutex<Option<String>>,
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl Species {
    pub fn test_default() -> Species {
        Species {
            id: SpeciesId::new(7),
            scientific_name: "Panthera leo".into(),
            common_name: Some("Lion".into()),
            total_population: Some(20_000),
            kingdom: "Animalia".into(),
            description: None,
            image: None,
        }
    }
}

impl InMemorySpeciesStore {
    pub fn new(species: Vec<Species>) -> Self {
        Self {
            species: Mutex::new(species),
            ..Default::default()
        }
    }

    /// Makes every subsequent request fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn updates(&self) -> Vec<(SpeciesId, SpeciesUpdate)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn rows(&self) -> Vec<Species> {
        self.species.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeciesStorePort for InMemorySpeciesStore {
    async fn update_species(&self, id: SpeciesId, update: &SpeciesUpdate) -> Result<()> {
        self.updates.lock().unwrap().push((id, update.clone()));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return StoreUpdateSnafu { id, message }.fail();
        }

        for row in self.species.lock().unwrap().iter_mut().filter(|s| s.id == id) {
            row.scientific_name = update.scientific_name.clone();
            row.common_name = update.common_name.clone();
            row.total_population = update.total_population;
            row.description = update.description.clone();
        }

        Ok(())
    }

    async fn species(&self) -> Result<Vec<Species>> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return StoreQuerySnafu { message }.fail();
        }

        let mut species = self.rows();
        species.sort_by(|a, b| a.scientific_name.cmp(&b.scientific_name));
        Ok(species)
    }
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
