use species_core::Species;

use crate::{
    detail_dialog::DetailDialog,
    view::{Action, Button, Node, Panel},
};

const EXCERPT_LENGTH: usize = 150;

/// Compact preview of a species with a "Learn More" action opening its details.
#[derive(Debug, Clone)]
pub struct SummaryCard {
    species: Species,
    details: DetailDialog,
    show_details: bool,
}

impl SummaryCard {
    pub fn new(species: Species, details: DetailDialog) -> Self {
        Self {
            species,
            details,
            show_details: false,
        }
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn is_showing_details(&self) -> bool {
        self.show_details
    }

    pub fn learn_more(&mut self) {
        self.show_details = true;
    }

    pub fn close_details(&mut self) {
        self.details.close(|| self.show_details = false);
    }

    pub fn render(&self) -> Panel {
        let view = self.species.view();

        let mut nodes = Vec::with_capacity(5);
        if let Some(image) = view.image {
            nodes.push(Node::Image {
                src: image.to_string(),
                alt: view.scientific_name.to_string(),
            });
        }
        nodes.push(Node::Heading(view.scientific_name.to_string()));
        nodes.push(Node::Subheading(
            view.common_name.unwrap_or_default().to_string(),
        ));
        nodes.push(Node::Text(description_excerpt(view.description)));
        nodes.push(Node::Button(Button::primary("Learn More", Action::LearnMore)));

        Panel {
            nodes,
            dialog: self.details.render(self.show_details, Some(view)),
        }
    }
}

/// First characters of a description, trimmed and followed by an ellipsis.
/// Absent and empty descriptions give an empty string.
pub fn description_excerpt(description: Option<&str>) -> String {
    match description {
        Some(description) if !description.is_empty() => {
            let head: String = description.chars().take(EXCERPT_LENGTH).collect();
            format!("{}...", head.trim())
        }
        _ => String::new(),
    }
}
