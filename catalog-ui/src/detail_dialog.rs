use num_format::{Locale, ToFormattedString};
use species_core::SpeciesView;

use crate::view::{Action, Button, DialogView, Node};

const NOT_AVAILABLE: &str = "N/A";

/// Read-only modal listing every field of a species.
///
/// Holds no visibility state: the parent decides whether it is open and
/// is told through the close callback when the user dismisses it.
#[derive(Debug, Clone, Copy)]
pub struct DetailDialog {
    locale: Locale,
}

impl DetailDialog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn render(&self, open: bool, species: Option<SpeciesView<'_>>) -> Option<DialogView> {
        let species = species?;
        if !open {
            return None;
        }

        let optional = |value: Option<&str>| value.unwrap_or(NOT_AVAILABLE).to_string();

        Some(DialogView {
            title: "Species Details",
            nodes: vec![
                Node::Field {
                    label: "Scientific Name",
                    value: species.scientific_name.to_string(),
                },
                Node::Field {
                    label: "Common Name",
                    value: optional(species.common_name),
                },
                Node::Field {
                    label: "Total Population",
                    value: species
                        .total_population
                        .map(|v| v.to_formatted_string(&self.locale))
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                },
                Node::Field {
                    label: "Kingdom",
                    value: species.kingdom.to_string(),
                },
                Node::Field {
                    label: "Description",
                    value: optional(species.description),
                },
                Node::Button(Button::secondary("Close", Action::CloseDetails)),
            ],
        })
    }

    pub fn close(&self, on_close: impl FnOnce()) {
        on_close();
    }
}

impl Default for DetailDialog {
    fn default() -> Self {
        Self::new(Locale::en)
    }
}
