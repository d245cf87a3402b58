use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::order::models::OrderId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_order(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(order_id): Path<String>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order_id =
        OrderId::from_string(&order_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .order_service
        .get_order(&caller.user_id, &order_id)
        .await
        .map_err(ApiError::from)
        .map(|ref order| ApiSuccess::new(StatusCode::OK, order.into()))
}
