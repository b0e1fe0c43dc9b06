use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::dashboard::{DashboardData, DashboardQuery},
    error::AppResult,
    middleware::auth::AuthOperator,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(
        ("q" = Option<String>, Query, description = "Customer name substring filter")
    ),
    responses(
        (status = 200, description = "Computed per-order views, newest first", body = ApiResponse<DashboardData>),
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    _operator: AuthOperator,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let resp = dashboard_service::dashboard(&state, query).await?;
    Ok(Json(resp))
}
