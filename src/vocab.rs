use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category tag for a controlled free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Customer,
    ProductModel,
    Color,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Customer => "customer",
            SuggestionKind::ProductModel => "product_model",
            SuggestionKind::Color => "color",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(SuggestionKind::Customer),
            "product_model" => Some(SuggestionKind::ProductModel),
            "color" => Some(SuggestionKind::Color),
            _ => None,
        }
    }
}

/// The controlled vocabulary: per category, the list of known values.
///
/// The vocabulary is advisory. Matching here is the single source of truth
/// for both the picklist affordance and the confirmation gate, so a value
/// accepted by the picker can never be flagged as novel later.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    known: HashMap<SuggestionKind, Vec<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SuggestionKind, String)>,
    {
        let mut vocab = Self::new();
        for (kind, name) in entries {
            vocab.insert(kind, name);
        }
        vocab
    }

    pub fn insert(&mut self, kind: SuggestionKind, name: impl Into<String>) {
        self.known.entry(kind).or_default().push(name.into());
    }

    pub fn entries(&self, kind: SuggestionKind) -> &[String] {
        self.known.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `value` is an exact (case-insensitive) entry of `kind`.
    /// Blank values are "not yet provided", never novel.
    pub fn is_known(&self, kind: SuggestionKind, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return true;
        }
        let needle = value.to_lowercase();
        self.entries(kind)
            .iter()
            .any(|entry| entry.to_lowercase() == needle)
    }

    /// Picklist filter: case-insensitive substring match. An empty input
    /// returns the whole list, matching the form's focus behavior.
    pub fn filter<'a>(&'a self, kind: SuggestionKind, input: &str) -> Vec<&'a str> {
        self.entries(kind)
            .iter()
            .filter(|entry| matches_filter(entry, input))
            .map(String::as_str)
            .collect()
    }
}

/// The one picklist rule, shared by [`Vocabulary::filter`] and the
/// suggestion listing endpoint so both surfaces narrow identically.
pub fn matches_filter(entry: &str, input: &str) -> bool {
    let needle = input.trim().to_lowercase();
    needle.is_empty() || entry.to_lowercase().contains(&needle)
}
