use std::{fmt, sync::Arc};

use species_core::{NotificationPort, Species, SpeciesId, SpeciesStorePort};

use crate::{detail_dialog::DetailDialog, edit_dialog::EditDialog, summary_card::SummaryCard};

/// The catalog screen: one card and one edit dialog per loaded species.
pub struct SpeciesScreen {
    entries: Vec<Entry>,
}

struct Entry {
    card: SummaryCard,
    editor: EditDialog,
}

impl SpeciesScreen {
    pub fn new(
        species: Vec<Species>,
        store: Arc<dyn SpeciesStorePort>,
        notifier: Arc<dyn NotificationPort>,
        details: DetailDialog,
    ) -> Self {
        let entries = species
            .into_iter()
            .map(|s| Entry {
                editor: EditDialog::new(&s, store.clone(), notifier.clone()),
                card: SummaryCard::new(s, details),
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &SummaryCard> {
        self.entries.iter().map(|e| &e.card)
    }

    pub fn card_mut(&mut self, id: SpeciesId) -> Option<&mut SummaryCard> {
        self.entries
            .iter_mut()
            .find(|e| e.card.species().id == id)
            .map(|e| &mut e.card)
    }

    pub fn editor_mut(&mut self, id: SpeciesId) -> Option<&mut EditDialog> {
        self.entries
            .iter_mut()
            .find(|e| e.editor.id() == id)
            .map(|e| &mut e.editor)
    }
}

impl fmt::Display for SpeciesScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry.card.render())?;
            write!(f, "{}", entry.editor.render())?;
        }
        Ok(())
    }
}
