use crate::types::PersonId;
use crate::validation::rules;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const NAME_MAX_CHARS: u64 = 30;

/// A stored or submitted person.
///
/// `id` is assigned by the repository and is always present on records read
/// back from it. Submitted payloads may leave it null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Person {
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub id: Option<PersonId>,
    #[serde(default)]
    #[schema(example = "Sabo", min_length = 1, max_length = 30)]
    #[validate(
        required(message = "must not be null"),
        length(min = 1, max = 30, message = "size must be between 1 and 30"),
        custom(function = "rules::validate_not_blank")
    )]
    pub name: Option<String>,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(PersonId::new(id)),
            name: Some(name.into()),
        }
    }

    /// A payload without an id, as sent by clients creating a record.
    pub fn unsaved(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }
}
