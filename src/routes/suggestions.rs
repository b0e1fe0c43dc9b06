use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::suggestions::{SuggestionList, SuggestionQuery},
    error::AppResult,
    middleware::auth::AuthOperator,
    response::ApiResponse,
    services::suggestion_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_suggestions))
}

#[utoipa::path(
    get,
    path = "/api/suggestions",
    params(
        ("kind" = Option<String>, Query, description = "customer | product_model | color"),
        ("q" = Option<String>, Query, description = "Substring filter, case-insensitive")
    ),
    responses(
        (status = 200, description = "Controlled vocabulary entries", body = ApiResponse<SuggestionList>),
    ),
    tag = "Suggestions"
)]
pub async fn list_suggestions(
    State(state): State<AppState>,
    _operator: AuthOperator,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<Json<ApiResponse<SuggestionList>>> {
    let resp = suggestion_service::list_suggestions(&state, query).await?;
    Ok(Json(resp))
}
