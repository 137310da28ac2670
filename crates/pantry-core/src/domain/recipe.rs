use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seconds between the Unix epoch and `0001-01-01T00:00:00Z`.
const YEAR_ONE_OFFSET_SECS: i64 = -62_135_596_800;

/// The timestamp reported for a recipe that carries no publish time.
pub fn unpublished() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(YEAR_ONE_OFFSET_SECS, 0).unwrap_or_default()
}

/// Chef - the author a recipe is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub years_of_experience: i64,
}

/// Recipe entity - the only record the store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub keywords: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub chef: Chef,
    pub published_at: DateTime<Utc>,
}

/// Client-supplied recipe content that passed presence validation.
///
/// Carries everything except the server-owned `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub keywords: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub chef: Chef,
    pub published_at: Option<DateTime<Utc>>,
}

/// What an update does with `publishedAt`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishedAtPolicy {
    /// Take the value from the request body; an absent value resets it to [`unpublished`].
    #[default]
    FromBody,
    /// Keep the timestamp assigned at creation.
    Preserve,
}

impl PublishedAtPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishedAtPolicy::FromBody => "from-body",
            PublishedAtPolicy::Preserve => "preserve",
        }
    }
}

impl fmt::Display for PublishedAtPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishedAtPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "from-body" | "from_body" | "body" => Ok(PublishedAtPolicy::FromBody),
            "preserve" => Ok(PublishedAtPolicy::Preserve),
            other => Err(format!("unknown publishedAt policy: {other}")),
        }
    }
}

impl Recipe {
    /// Create a new recipe with a generated ID, published now.
    ///
    /// Any publish time carried by the draft is discarded.
    pub fn new(draft: RecipeDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            keywords: draft.keywords,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            chef: draft.chef,
            published_at: Utc::now(),
        }
    }

    /// The record that replaces `self` when it is updated with `draft`.
    ///
    /// The ID never changes.
    pub fn replaced_by(&self, draft: RecipeDraft, policy: PublishedAtPolicy) -> Self {
        let published_at = match policy {
            PublishedAtPolicy::FromBody => draft.published_at.unwrap_or_else(unpublished),
            PublishedAtPolicy::Preserve => self.published_at,
        };

        Self {
            id: self.id.clone(),
            name: draft.name,
            keywords: draft.keywords,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            chef: draft.chef,
            published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> RecipeDraft {
        RecipeDraft {
            name: name.to_string(),
            keywords: vec!["hot".to_string()],
            ingredients: vec!["water".to_string(), "leaves".to_string()],
            instructions: vec!["boil".to_string(), "steep".to_string()],
            chef: Chef {
                name: "A".to_string(),
                country: "UK".to_string(),
                years_of_experience: 0,
            },
            published_at: None,
        }
    }

    #[test]
    fn test_new_assigns_id_and_publish_time() {
        let before = Utc::now();
        let recipe = Recipe::new(draft("Tea"));
        let after = Utc::now();

        assert!(!recipe.id.is_empty());
        assert!(recipe.published_at >= before && recipe.published_at <= after);
        assert_eq!(recipe.name, "Tea");
    }

    #[test]
    fn test_new_ignores_client_publish_time() {
        let mut d = draft("Tea");
        d.published_at = Some(unpublished());
        let recipe = Recipe::new(d);
        assert_ne!(recipe.published_at, unpublished());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Recipe::new(draft("Tea"));
        let b = Recipe::new(draft("Tea"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_replace_from_body_resets_missing_publish_time() {
        let original = Recipe::new(draft("Tea"));
        let updated = original.replaced_by(draft("Green Tea"), PublishedAtPolicy::FromBody);

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, "Green Tea");
        assert_eq!(updated.published_at, unpublished());
    }

    #[test]
    fn test_replace_from_body_takes_client_publish_time() {
        let original = Recipe::new(draft("Tea"));
        let stamp = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let mut d = draft("Tea");
        d.published_at = Some(stamp);

        let updated = original.replaced_by(d, PublishedAtPolicy::FromBody);
        assert_eq!(updated.published_at, stamp);
    }

    #[test]
    fn test_replace_preserve_keeps_original_publish_time() {
        let original = Recipe::new(draft("Tea"));
        let mut d = draft("Green Tea");
        d.published_at = Some(unpublished());

        let updated = original.replaced_by(d, PublishedAtPolicy::Preserve);
        assert_eq!(updated.published_at, original.published_at);
    }

    #[test]
    fn test_unpublished_is_year_one() {
        assert_eq!(unpublished().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("preserve".parse::<PublishedAtPolicy>(), Ok(PublishedAtPolicy::Preserve));
        assert_eq!("FROM-BODY".parse::<PublishedAtPolicy>(), Ok(PublishedAtPolicy::FromBody));
        assert!("sometimes".parse::<PublishedAtPolicy>().is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let recipe = Recipe::new(draft("Tea"));
        let json = serde_json::to_value(&recipe).unwrap();

        assert!(json.get("publishedAt").is_some());
        assert_eq!(json["chef"]["yearsOfExperience"], 0);
        assert_eq!(json["ingredients"][1], "leaves");
    }

    #[test]
    fn test_chef_years_default_to_zero() {
        let chef: Chef = serde_json::from_str(r#"{"name":"A","country":"UK"}"#).unwrap();
        assert_eq!(chef.years_of_experience, 0);
    }
}
