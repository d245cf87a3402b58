use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::book::models::BookId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<CreateOrderRequest>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    if body.book_id <= 0 {
        return Err(ApiError::UnprocessableEntity(format!(
            "Invalid book id: expected a positive integer, got {}",
            body.book_id
        )));
    }

    state
        .order_service
        .create_order(&caller.user_id, &BookId(body.book_id))
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::CREATED, order.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderRequest {
    book_id: i64,
}
