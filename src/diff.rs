use std::collections::HashSet;

use uuid::Uuid;

use crate::models::LineItem;

/// Persistence plan for an edited line-item collection: what to hand to the
/// storage upsert and which identifiers to delete. The two sets are
/// disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemReconciliation {
    pub to_upsert: Vec<LineItem>,
    pub to_delete: Vec<Uuid>,
}

/// Partition the edited collection against its prior snapshot.
///
/// Everything currently in the collection is upserted, changed or not;
/// upsert-by-id makes unchanged rows a no-op, and skipping field-level
/// change detection keeps the plan trivially correct. Deletions are the
/// prior identifiers that no longer appear. Items added during the edit
/// session must already carry fresh identifiers (see
/// `LineItemDraft::into_item`), so they always classify as upserts.
pub fn reconcile(prior: &[LineItem], current: Vec<LineItem>) -> ItemReconciliation {
    let current_ids: HashSet<Uuid> = current.iter().map(|item| item.id).collect();

    let to_delete = prior
        .iter()
        .map(|item| item.id)
        .filter(|id| !current_ids.contains(id))
        .collect();

    ItemReconciliation {
        to_upsert: current,
        to_delete,
    }
}
