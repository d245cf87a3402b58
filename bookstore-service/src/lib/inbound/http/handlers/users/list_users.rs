use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiQuery;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PageParams;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: i64 = 10;

pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<ApiSuccess<Vec<UserData>>, ApiError> {
    let page = params.into_page(DEFAULT_LIMIT)?;

    state
        .user_service
        .list_users(page)
        .await
        .map_err(ApiError::from)
        .map(|users| ApiSuccess::new(StatusCode::OK, users.iter().map(UserData::from).collect()))
}
