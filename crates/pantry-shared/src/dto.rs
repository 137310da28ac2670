//! Data Transfer Objects - request types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::DomainError;
use pantry_core::domain::{Chef, RecipeDraft};

/// Chef as sent by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefRequest {
    pub name: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub years_of_experience: i64,
}

/// Body of a create or update request.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure rather than a decode failure. A client-supplied
/// `id` is not part of the body and is dropped during decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub name: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<Vec<String>>,
    pub chef: Option<ChefRequest>,
    pub published_at: Option<DateTime<Utc>>,
}

fn required(namespace: &str, field: &str) -> String {
    format!(
        "Key: '{namespace}.{field}' Error:Field validation for '{field}' failed on the 'required' tag"
    )
}

/// Strings must be present and non-empty.
fn present_str(
    value: Option<String>,
    namespace: &str,
    field: &str,
    errors: &mut Vec<String>,
) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => {
            errors.push(required(namespace, field));
            String::new()
        }
    }
}

/// Lists only need to be present; `[]` is accepted.
fn present_list(
    value: Option<Vec<String>>,
    field: &str,
    errors: &mut Vec<String>,
) -> Vec<String> {
    value.unwrap_or_else(|| {
        errors.push(required("Recipe", field));
        Vec::new()
    })
}

impl RecipeRequest {
    /// Check that every required field is present.
    ///
    /// All failures are collected and reported together, one per line.
    pub fn validate(self) -> Result<RecipeDraft, DomainError> {
        let mut errors = Vec::new();

        let name = present_str(self.name, "Recipe", "Name", &mut errors);
        let keywords = present_list(self.keywords, "Keywords", &mut errors);
        let ingredients = present_list(self.ingredients, "Ingredients", &mut errors);
        let instructions = present_list(self.instructions, "Instructions", &mut errors);

        let chef = match self.chef {
            Some(chef) => Chef {
                name: present_str(chef.name, "Recipe.Chef", "Name", &mut errors),
                country: present_str(chef.country, "Recipe.Chef", "Country", &mut errors),
                years_of_experience: chef.years_of_experience,
            },
            None => {
                errors.push(required("Recipe", "Chef"));
                Chef {
                    name: String::new(),
                    country: String::new(),
                    years_of_experience: 0,
                }
            }
        };

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors.join("\n")));
        }

        Ok(RecipeDraft {
            name,
            keywords,
            ingredients,
            instructions,
            chef,
            published_at: self.published_at,
        })
    }
}
