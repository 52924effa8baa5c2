use async_trait::async_trait;

use crate::{Result, Species, SpeciesId, SpeciesUpdate, Toast};

#[async_trait]
pub trait SpeciesStorePort: Send + Sync {
    /// Updates the fields in `update` on the species matching `id`, leaving
    /// every other column untouched.
    async fn update_species(&self, id: SpeciesId, update: &SpeciesUpdate) -> Result<()>;
    async fn species(&self) -> Result<Vec<Species>>;
}

/// Fire-and-forget sink for user notifications.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, toast: Toast);
}
