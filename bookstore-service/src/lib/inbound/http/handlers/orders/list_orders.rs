use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiQuery;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::handlers::PageParams;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: i64 = 20;

pub async fn list_orders(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    let page = params.into_page(DEFAULT_LIMIT)?;

    state
        .order_service
        .list_orders(&caller.user_id, page)
        .await
        .map_err(ApiError::from)
        .map(|orders| ApiSuccess::new(StatusCode::OK, orders.iter().map(OrderData::from).collect()))
}
