use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{LineItemDraft, OrderDraft};
use crate::vocab::{SuggestionKind, Vocabulary};

/// Two-phase submit state for one edit session. The client owns this value
/// for the lifetime of the form and must reset it on any field edit, so a
/// corrected value is re-validated instead of silently bypassed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationState {
    #[default]
    Draft,
    PendingConfirmation,
}

impl ConfirmationState {
    /// Any field edit invalidates an outstanding warning.
    pub fn reset_on_edit(self) -> Self {
        ConfirmationState::Draft
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GateOutcome {
    pub proceed: bool,
    pub novel_fields: Vec<String>,
    pub next_state: ConfirmationState,
}

/// Decide whether a submission may proceed to persistence.
///
/// A submission in `PendingConfirmation` is the operator's explicit second
/// confirmation and proceeds unconditionally. Otherwise every controlled
/// free-text field is checked against the vocabulary; any non-blank,
/// unmatched value blocks the submission once and is reported back with a
/// human-readable label.
pub fn evaluate(
    header: &OrderDraft,
    items: &[LineItemDraft],
    vocabulary: &Vocabulary,
    state: ConfirmationState,
) -> GateOutcome {
    if state == ConfirmationState::PendingConfirmation {
        return GateOutcome {
            proceed: true,
            novel_fields: Vec::new(),
            next_state: ConfirmationState::Draft,
        };
    }

    let mut novel_fields = Vec::new();

    if !vocabulary.is_known(SuggestionKind::Customer, &header.customer_name) {
        novel_fields.push(format!("customer name: '{}'", header.customer_name.trim()));
    }

    for (index, item) in items.iter().enumerate() {
        if !vocabulary.is_known(SuggestionKind::ProductModel, &item.product_model) {
            novel_fields.push(format!(
                "item {} product model: '{}'",
                index + 1,
                item.product_model.trim()
            ));
        }
        if !vocabulary.is_known(SuggestionKind::Color, &item.color) {
            novel_fields.push(format!("item {} color: '{}'", index + 1, item.color.trim()));
        }
    }

    if novel_fields.is_empty() {
        GateOutcome {
            proceed: true,
            novel_fields,
            next_state: ConfirmationState::Draft,
        }
    } else {
        GateOutcome {
            proceed: false,
            novel_fields,
            next_state: ConfirmationState::PendingConfirmation,
        }
    }
}
