use axum::extract::State;
use axum::http::StatusCode;

use super::BookRequest;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::router::AppState;

pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    state
        .book_service
        .create_book(body.try_into_draft()?)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::CREATED, book.into()))
}
