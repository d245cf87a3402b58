use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::HeaderValue;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login;
use super::handlers::books::create_book;
use super::handlers::books::delete_book;
use super::handlers::books::get_book;
use super::handlers::books::list_books;
use super::handlers::books::update_book;
use super::handlers::orders::create_order;
use super::handlers::orders::get_order;
use super::handlers::orders::list_orders;
use super::handlers::users::delete_user;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::register_user;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::TokenService;
use crate::domain::book::ports::BookServicePort;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub order_service: Arc<dyn OrderServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub token_service: Arc<dyn TokenService>,
}

/// Build the `/v1` API.
///
/// # Arguments
/// * `state` - Shared services
/// * `allowed_origins` - CORS origins; empty allows any origin
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let public_routes = Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/users/register", post(register_user))
        .route("/v1/users", get(list_users))
        .route("/v1/users/:user_id", get(get_user))
        .route("/v1/books", get(list_books))
        .route("/v1/books/:book_id", get(get_book));

    let protected_routes = Router::new()
        .route("/v1/users/:user_id/update", put(update_user))
        .route("/v1/users/:user_id", delete(delete_user))
        .route("/v1/books/create", post(create_book))
        .route("/v1/books/:book_id", put(update_book).delete(delete_book))
        .route("/v1/orders", post(create_order).get(list_orders))
        .route("/v1/orders/:order_id", get(get_order))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
