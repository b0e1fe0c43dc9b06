use axum_order_desk::confirm::{self, ConfirmationState};
use axum_order_desk::models::{LineItemDraft, OrderDraft};
use axum_order_desk::vocab::{SuggestionKind, Vocabulary};
use chrono::NaiveDate;

fn vocabulary() -> Vocabulary {
    Vocabulary::from_entries([
        (SuggestionKind::Customer, "Sharif".to_string()),
        (SuggestionKind::ProductModel, "9070".to_string()),
        (SuggestionKind::Color, "363-6".to_string()),
    ])
}

fn header(customer_name: &str) -> OrderDraft {
    OrderDraft {
        order_number_suffix: "01".to_string(),
        order_date: NaiveDate::from_ymd_opt(2024, 1, 5),
        customer_name: customer_name.to_string(),
        final_price: None,
    }
}

fn item(product_model: &str, color: &str) -> LineItemDraft {
    LineItemDraft {
        id: None,
        product_model: product_model.to_string(),
        color: color.to_string(),
        specification: String::new(),
        quantity: 1,
        unit_price: 100,
        is_shipped: false,
    }
}

#[test]
fn known_values_proceed_immediately() {
    let outcome = confirm::evaluate(
        &header("Sharif"),
        &[item("9070", "363-6")],
        &vocabulary(),
        ConfirmationState::Draft,
    );
    assert!(outcome.proceed);
    assert!(outcome.novel_fields.is_empty());
    assert_eq!(outcome.next_state, ConfirmationState::Draft);
}

#[test]
fn one_novel_field_blocks_once() {
    let outcome = confirm::evaluate(
        &header("Sharifa"),
        &[item("9070", "363-6")],
        &vocabulary(),
        ConfirmationState::Draft,
    );
    assert!(!outcome.proceed);
    assert_eq!(outcome.novel_fields, vec!["customer name: 'Sharifa'"]);
    assert_eq!(outcome.next_state, ConfirmationState::PendingConfirmation);
}

#[test]
fn repeat_submission_in_pending_state_bypasses() {
    let vocab = vocabulary();
    let header = header("Sharifa");
    let items = [item("X-99", "HJ999")];

    let first = confirm::evaluate(&header, &items, &vocab, ConfirmationState::Draft);
    assert!(!first.proceed);

    // Identical data, resubmitted without edits: proceeds regardless of
    // the still-novel values, and the session goes back to Draft.
    let second = confirm::evaluate(&header, &items, &vocab, first.next_state);
    assert!(second.proceed);
    assert!(second.novel_fields.is_empty());
    assert_eq!(second.next_state, ConfirmationState::Draft);
}

#[test]
fn item_labels_carry_one_based_positions() {
    let outcome = confirm::evaluate(
        &header("Sharif"),
        &[item("9070", "363-6"), item("X-99", "HJ999")],
        &vocabulary(),
        ConfirmationState::Draft,
    );
    assert!(!outcome.proceed);
    assert_eq!(
        outcome.novel_fields,
        vec![
            "item 2 product model: 'X-99'",
            "item 2 color: 'HJ999'",
        ]
    );
}

#[test]
fn blank_fields_are_not_flagged() {
    let outcome = confirm::evaluate(
        &header(""),
        &[item("", "")],
        &vocabulary(),
        ConfirmationState::Draft,
    );
    assert!(outcome.proceed);
}

#[test]
fn matching_is_case_insensitive() {
    let outcome = confirm::evaluate(
        &header("sharif"),
        &[item("9070", "363-6")],
        &vocabulary(),
        ConfirmationState::Draft,
    );
    assert!(outcome.proceed);
}

// A stale PendingConfirmation carried across an edit would let a
// corrected-but-still-wrong value slip through unvalidated; the edit must
// reset the session to Draft so validation runs again.
#[test]
fn edit_after_block_resets_and_revalidates() {
    let vocab = vocabulary();

    let blocked = confirm::evaluate(
        &header("Sharifa"),
        &[],
        &vocab,
        ConfirmationState::Draft,
    );
    assert_eq!(blocked.next_state, ConfirmationState::PendingConfirmation);

    // Operator edits the customer field; the session drops the warning.
    let state = blocked.next_state.reset_on_edit();
    assert_eq!(state, ConfirmationState::Draft);

    // The corrected value is still unknown, so it blocks again instead of
    // riding the stale confirmation.
    let revalidated = confirm::evaluate(&header("Sherif"), &[], &vocab, state);
    assert!(!revalidated.proceed);
    assert_eq!(revalidated.novel_fields, vec!["customer name: 'Sherif'"]);
}
