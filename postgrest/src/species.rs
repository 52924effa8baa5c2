use async_trait::async_trait;
use species_core::{
    Species, SpeciesId, SpeciesStorePort, SpeciesUpdate, StoreQuerySnafu, StoreUpdateSnafu,
};
use tracing::{Level, event, instrument};

use crate::{PostgrestAdapter, Result};

const SPECIES_TABLE: &str = "species";

impl PostgrestAdapter {
    pub(crate) async fn update_species_impl(
        &self,
        id: SpeciesId,
        update: &SpeciesUpdate,
    ) -> Result<()> {
        let request = self
            .client
            .patch(self.table_url(SPECIES_TABLE))
            .query(&[("id", format!("eq.{id}"))])
            .header("prefer", "return=minimal")
            .json(update);

        self.authorize(request).send().await?;

        Ok(())
    }

    pub(crate) async fn species_impl(&self) -> Result<Vec<Species>> {
        let request = self
            .client
            .get(self.table_url(SPECIES_TABLE))
            .query(&[("select", "*"), ("order", "scientific_name.asc")]);

        Ok(self.authorize(request).send().await?.json().await?)
    }
}

#[async_trait]
impl SpeciesStorePort for PostgrestAdapter {
    #[instrument(skip(self, update))]
    async fn update_species(
        &self,
        id: SpeciesId,
        update: &SpeciesUpdate,
    ) -> species_core::Result<()> {
        self.update_species_impl(id, update).await.map_err(|e| {
            event!(Level::ERROR, "failed to update species {id}: {e:?}");
            StoreUpdateSnafu {
                id,
                message: e.store_message(),
            }
            .build()
        })
    }

    #[instrument(skip(self))]
    async fn species(&self) -> species_core::Result<Vec<Species>> {
        self.species_impl().await.map_err(|e| {
            event!(Level::ERROR, "failed to retrieve species: {e:?}");
            StoreQuerySnafu {
                message: e.store_message(),
            }
            .build()
        })
    }
}
