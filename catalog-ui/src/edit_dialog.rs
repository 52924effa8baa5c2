use std::sync::Arc;

use species_core::{
    FieldErrors, FormField, NotificationPort, Species, SpeciesForm, SpeciesId, SpeciesStorePort,
    SpeciesUpdate, Toast,
};
use strum::IntoEnumIterator;
use tracing::{Level, event, instrument};

use crate::view::{Action, Button, DialogView, Node, Panel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The dialog was not open, nothing was submitted.
    Closed,
    /// Validation failed, the errors are shown inline and the store was not called.
    Invalid(FieldErrors),
    /// The store rejected the update with the contained message.
    Failed(String),
    Saved(SpeciesUpdate),
}

/// Modal form editing the mutable fields of one species.
///
/// The working copy is taken from the species once, when the dialog is
/// created, and survives closing and reopening the dialog.
pub struct EditDialog {
    id: SpeciesId,
    state: DialogState,
    form: SpeciesForm,
    errors: FieldErrors,
    store: Arc<dyn SpeciesStorePort>,
    notifier: Arc<dyn NotificationPort>,
}

impl EditDialog {
    pub fn new(
        species: &Species,
        store: Arc<dyn SpeciesStorePort>,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            id: species.id,
            state: DialogState::Closed,
            form: SpeciesForm::from(species),
            errors: FieldErrors::default(),
            store,
            notifier,
        }
    }

    pub fn id(&self) -> SpeciesId {
        self.id
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn form(&self) -> &SpeciesForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn dismiss(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn set_input(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    #[instrument(skip(self), fields(species_id = %self.id))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.is_open() {
            event!(Level::WARN, "ignoring submit of a closed edit dialog");
            return SubmitOutcome::Closed;
        }

        let update = match self.form.validate() {
            Ok(update) => update,
            Err(errors) => {
                event!(Level::DEBUG, "species form rejected: {errors:?}");
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };
        self.errors = FieldErrors::default();

        match self.store.update_species(self.id, &update).await {
            Err(e) => {
                let message = e.message().to_string();
                self.notifier.notify(Toast::destructive("Error", &message));
                SubmitOutcome::Failed(message)
            }
            Ok(()) => {
                self.notifier.notify(Toast::new(
                    "Species Updated",
                    format!("{} has been updated successfully.", update.scientific_name),
                ));
                self.state = DialogState::Closed;
                SubmitOutcome::Saved(update)
            }
        }
    }

    pub fn render(&self) -> Panel {
        let trigger = Node::Button(Button::primary("Edit Species", Action::OpenEdit));

        let dialog = self.is_open().then(|| {
            let mut nodes: Vec<Node> = FormField::iter()
                .map(|field| Node::Input {
                    field,
                    label: field.label(),
                    value: self.form.get(field).to_string(),
                    error: self.errors.get(field).map(|e| e.to_string()),
                })
                .collect();
            nodes.push(Node::Button(Button::secondary("Cancel", Action::CancelEdit)));
            nodes.push(Node::Button(Button::primary("Save Changes", Action::SubmitEdit)));

            DialogView {
                title: "Edit Species",
                nodes,
            }
        });

        Panel {
            nodes: vec![trigger],
            dialog,
        }
    }
}
