use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiQuery;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::handlers::PageParams;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: i64 = 20;

pub async fn list_books(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<ApiSuccess<Vec<BookData>>, ApiError> {
    let page = params.into_page(DEFAULT_LIMIT)?;

    state
        .book_service
        .list_books(page)
        .await
        .map_err(ApiError::from)
        .map(|books| ApiSuccess::new(StatusCode::OK, books.iter().map(BookData::from).collect()))
}
