use std::collections::BTreeMap;

use serde::Serialize;
use snafu::Snafu;
use strum::{AsRefStr, EnumIter};

use crate::Species;

/// The editable fields of a species, in form order.
///
/// `kingdom` and `image` are deliberately absent, the edit flow never touches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    ScientificName,
    CommonName,
    TotalPopulation,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(module, visibility(pub))]
pub enum FieldError {
    #[snafu(display("{} is required", field.sentence_name()))]
    Required { field: FormField },
    #[snafu(display("Expected number"))]
    InvalidNumber { field: FormField, value: String },
}

/// Validation failures keyed by the field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, FieldError>);

/// Working copy of the editable fields, holding raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesForm {
    pub scientific_name: String,
    pub common_name: String,
    pub total_population: String,
    pub description: String,
}

/// A validated partial update of a species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesUpdate {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub total_population: Option<i64>,
    pub description: Option<String>,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::ScientificName => "Scientific Name",
            FormField::CommonName => "Common Name",
            FormField::TotalPopulation => "Total Population",
            FormField::Description => "Description",
        }
    }

    fn sentence_name(&self) -> &'static str {
        match self {
            FormField::ScientificName => "Scientific name",
            FormField::CommonName => "Common name",
            FormField::TotalPopulation => "Total population",
            FormField::Description => "Description",
        }
    }
}

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, error: FieldError) {
        let field = match &error {
            FieldError::Required { field } | FieldError::InvalidNumber { field, .. } => *field,
        };
        self.0.insert(field, error);
    }
}

impl SpeciesForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ScientificName => &self.scientific_name,
            FormField::CommonName => &self.common_name,
            FormField::TotalPopulation => &self.total_population,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::ScientificName => self.scientific_name = value,
            FormField::CommonName => self.common_name = value,
            FormField::TotalPopulation => self.total_population = value,
            FormField::Description => self.description = value,
        }
    }

    /// Checks the form against the species schema.
    ///
    /// Text fields are carried verbatim, only `scientific_name` must be non-empty.
    /// An empty population is null, anything else must parse as an integer.
    /// Negative populations are not rejected.
    pub fn validate(&self) -> Result<SpeciesUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.scientific_name.is_empty() {
            errors.insert(FieldError::Required {
                field: FormField::ScientificName,
            });
        }

        let total_population = match self.total_population.trim() {
            "" => None,
            value => match value.parse::<i64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    errors.insert(FieldError::InvalidNumber {
                        field: FormField::TotalPopulation,
                        value: value.to_string(),
                    });
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SpeciesUpdate {
            scientific_name: self.scientific_name.clone(),
            common_name: Some(self.common_name.clone()),
            total_population,
            description: Some(self.description.clone()),
        })
    }
}

impl From<&Species> for SpeciesForm {
    fn from(value: &Species) -> Self {
        Self {
            scientific_name: value.scientific_name.clone(),
            common_name: value.common_name.clone().unwrap_or_default(),
            total_population: value
                .total_population
                .map(|v| v.to_string())
                .unwrap_or_default(),
            description: value.description.clone().unwrap_or_default(),
        }
    }
}
