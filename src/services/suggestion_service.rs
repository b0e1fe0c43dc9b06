use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    db::OrmConn,
    dto::suggestions::{SuggestionDto, SuggestionList, SuggestionQuery},
    entity::suggestions::{Column as SuggestionCol, Entity as Suggestions},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
    vocab::{self, SuggestionKind, Vocabulary},
};

/// Serve the controlled vocabulary for the form picklists, optionally
/// narrowed to one category.
pub async fn list_suggestions(
    state: &AppState,
    query: SuggestionQuery,
) -> AppResult<ApiResponse<SuggestionList>> {
    let mut condition = Condition::all();
    if let Some(kind) = query.kind {
        condition = condition.add(SuggestionCol::Kind.eq(kind.as_str()));
    }

    let rows = Suggestions::find()
        .filter(condition)
        .order_by_asc(SuggestionCol::Name)
        .all(&state.orm)
        .await?;

    let input = query.q.unwrap_or_default();
    let items: Vec<SuggestionDto> = rows
        .into_iter()
        .filter(|row| vocab::matches_filter(&row.name, &input))
        .filter_map(|row| {
            SuggestionKind::parse(&row.kind).map(|kind| SuggestionDto {
                id: row.id,
                kind,
                name: row.name,
            })
        })
        .collect();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Ok",
        SuggestionList { items },
        Some(Meta::total(total)),
    ))
}

/// Load the whole vocabulary for a confirmation-gate pass. Rows with an
/// unrecognized kind code are skipped.
pub async fn load_vocabulary(conn: &OrmConn) -> AppResult<Vocabulary> {
    let rows = Suggestions::find().all(conn).await?;
    Ok(Vocabulary::from_entries(rows.into_iter().filter_map(
        |row| SuggestionKind::parse(&row.kind).map(|kind| (kind, row.name)),
    )))
}
