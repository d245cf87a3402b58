use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::BookRequest;
use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::BookData;
use crate::inbound::http::router::AppState;

pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    ApiJson(body): ApiJson<BookRequest>,
) -> Result<ApiSuccess<BookData>, ApiError> {
    let book_id = BookId::from_string(&book_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let draft = body.try_into_draft()?;

    state
        .book_service
        .update_book(&book_id, draft)
        .await
        .map_err(ApiError::from)
        .map(|ref book| ApiSuccess::new(StatusCode::OK, book.into()))
}
