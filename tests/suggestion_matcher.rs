use axum_order_desk::vocab::{SuggestionKind, Vocabulary};

fn vocabulary() -> Vocabulary {
    Vocabulary::from_entries([
        (SuggestionKind::Customer, "Sharif".to_string()),
        (SuggestionKind::Customer, "Uruma".to_string()),
        (SuggestionKind::ProductModel, "9070".to_string()),
        (SuggestionKind::ProductModel, "D-02".to_string()),
        (SuggestionKind::Color, "363-6".to_string()),
    ])
}

#[test]
fn blank_value_is_never_novel() {
    let vocab = vocabulary();
    assert!(vocab.is_known(SuggestionKind::Customer, ""));
    assert!(vocab.is_known(SuggestionKind::Customer, "   "));
    assert!(vocab.is_known(SuggestionKind::Color, "\t"));
}

#[test]
fn exact_match_is_known_regardless_of_case() {
    let vocab = vocabulary();
    assert!(vocab.is_known(SuggestionKind::Customer, "Sharif"));
    assert!(vocab.is_known(SuggestionKind::Customer, "sharif"));
    assert!(vocab.is_known(SuggestionKind::Customer, "SHARIF"));
    assert!(vocab.is_known(SuggestionKind::ProductModel, "d-02"));
    assert!(vocab.is_known(SuggestionKind::Customer, "  Sharif  "));
}

#[test]
fn any_other_value_is_novel() {
    let vocab = vocabulary();
    assert!(!vocab.is_known(SuggestionKind::Customer, "Shar"));
    assert!(!vocab.is_known(SuggestionKind::Customer, "Sharif Ltd"));
    assert!(!vocab.is_known(SuggestionKind::ProductModel, "9071"));
    // Kinds do not bleed into each other.
    assert!(!vocab.is_known(SuggestionKind::Color, "9070"));
}

#[test]
fn picklist_filter_is_case_insensitive_substring() {
    let vocab = vocabulary();
    assert_eq!(
        vocab.filter(SuggestionKind::Customer, "shar"),
        vec!["Sharif"]
    );
    assert_eq!(vocab.filter(SuggestionKind::ProductModel, "d-"), vec!["D-02"]);
    assert!(vocab.filter(SuggestionKind::Customer, "zzz").is_empty());
}

#[test]
fn empty_filter_input_returns_the_whole_list() {
    let vocab = vocabulary();
    assert_eq!(vocab.filter(SuggestionKind::Customer, "").len(), 2);
}

// A value accepted through the picker must never be flagged as novel:
// the two affordances share one matching rule.
#[test]
fn picked_values_are_always_known() {
    let vocab = vocabulary();
    for kind in [
        SuggestionKind::Customer,
        SuggestionKind::ProductModel,
        SuggestionKind::Color,
    ] {
        for picked in vocab.filter(kind, "") {
            assert!(vocab.is_known(kind, picked));
        }
    }
}

#[test]
fn kind_codec_roundtrips() {
    for kind in [
        SuggestionKind::Customer,
        SuggestionKind::ProductModel,
        SuggestionKind::Color,
    ] {
        assert_eq!(SuggestionKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(SuggestionKind::parse("warehouse"), None);
}
