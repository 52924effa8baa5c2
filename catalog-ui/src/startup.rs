use std::sync::Arc;

use postgrest::PostgrestAdapter;
use snafu::ResultExt;
use species_core::{NotificationPort, Species, SpeciesStorePort};
use tracing::{Level, event, instrument};
use tracing_subscriber::FmtSubscriber;

use crate::{
    detail_dialog::DetailDialog,
    edit_dialog::EditDialog,
    error::{
        Result,
        error::{LoadSpeciesSnafu, StoreSnafu},
    },
    notifier::TracingNotifier,
    screen::SpeciesScreen,
    settings::{LogLevel, Settings},
    summary_card::SummaryCard,
};

/// Owns the explicitly constructed collaborators every screen is built from.
pub struct App {
    store: Arc<dyn SpeciesStorePort>,
    notifier: Arc<dyn NotificationPort>,
    details: DetailDialog,
}

impl App {
    pub fn build(settings: &Settings) -> Result<Self> {
        let store = PostgrestAdapter::new(&settings.store).context(StoreSnafu)?;
        let details = DetailDialog::new(settings.locale()?);

        Ok(Self::with_ports(
            Arc::new(store),
            Arc::new(TracingNotifier),
            details,
        ))
    }

    pub fn with_ports(
        store: Arc<dyn SpeciesStorePort>,
        notifier: Arc<dyn NotificationPort>,
        details: DetailDialog,
    ) -> Self {
        Self {
            store,
            notifier,
            details,
        }
    }

    pub fn edit_dialog(&self, species: &Species) -> EditDialog {
        EditDialog::new(species, self.store.clone(), self.notifier.clone())
    }

    pub fn summary_card(&self, species: Species) -> SummaryCard {
        SummaryCard::new(species, self.details)
    }

    #[instrument(skip(self))]
    pub async fn species_screen(&self) -> Result<SpeciesScreen> {
        let species = self.store.species().await.context(LoadSpeciesSnafu)?;
        event!(Level::DEBUG, "loaded {} species", species.len());

        Ok(SpeciesScreen::new(
            species,
            self.store.clone(),
            self.notifier.clone(),
            self.details,
        ))
    }

    pub async fn run(self) -> Result<()> {
        let screen = self.species_screen().await?;
        if screen.is_empty() {
            event!(Level::INFO, "the species catalog is empty");
        } else {
            print!("{screen}");
        }
        Ok(())
    }
}

pub fn init_tracer(level: LogLevel) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(level))
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
