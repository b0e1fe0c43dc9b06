use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::vocab::SuggestionKind;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SuggestionQuery {
    pub kind: Option<SuggestionKind>,
    /// Case-insensitive substring filter, same rule the form picker uses.
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionDto {
    pub id: Uuid,
    pub kind: SuggestionKind,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestionList {
    pub items: Vec<SuggestionDto>,
}
