use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::FromRequest;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::book::models::Book;
use crate::domain::errors::DomainError;
use crate::domain::order::models::Order;
use crate::domain::pagination::Page;
use crate::domain::pagination::PageError;
use crate::domain::user::models::User;

pub mod auth;
pub mod books;
pub mod orders;
pub mod users;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DataNotFound => ApiError::NotFound(err.to_string()),
            DomainError::ConflictingData => ApiError::Conflict(err.to_string()),
            DomainError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            DomainError::Internal(ref detail) => {
                tracing::error!(error = %detail, "Internal error");
                ApiError::InternalServerError(err.to_string())
            }
            DomainError::TokenCreation => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => {
                ApiError::UnprocessableEntity(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// JSON body extractor whose rejections use the API error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the API error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// `?skip=&limit=` query parameters of list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn into_page(self, default_limit: i64) -> Result<Page, ApiError> {
        Ok(Page::new(self.skip, self.limit, default_limit)?)
    }
}

/// Public view of a user. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub author: String,
    pub price: f64,
    pub cover: String,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.0,
            name: book.name.clone(),
            description: book.description.clone(),
            author: book.author.clone(),
            price: book.price,
            cover: book.cover.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub user_id: i64,
    pub book_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderData {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.0,
            user_id: order.user_id.0,
            book_id: order.book_id.0,
            created_at: order.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_domain_error_status_mapping() {
        assert_eq!(
            ApiError::from(DomainError::DataNotFound),
            ApiError::NotFound("data not found".to_string())
        );
        assert_eq!(
            ApiError::from(DomainError::ConflictingData),
            ApiError::Conflict("data conflicts with existing data in unique column".to_string())
        );
        assert_eq!(
            ApiError::from(DomainError::InvalidCredentials),
            ApiError::Unauthorized("invalid email or password".to_string())
        );
        assert_eq!(
            ApiError::from(DomainError::TokenCreation),
            ApiError::InternalServerError("error creating token".to_string())
        );
    }

    #[test]
    fn test_internal_detail_stays_server_side() {
        let err = ApiError::from(DomainError::internal("relation \"users\" does not exist"));

        assert_eq!(err, ApiError::InternalServerError("internal error".to_string()));
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = ApiError::Forbidden("forbidden".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status_code": 403, "data": { "message": "forbidden" } })
        );
    }

    #[tokio::test]
    async fn test_success_envelope_omits_password_hash() {
        let user = User {
            id: crate::domain::user::models::UserId(3),
            name: crate::domain::user::models::UserName::new("Alice".to_string()).unwrap(),
            email: crate::domain::user::models::EmailAddress::new("a@x.com".to_string())
                .unwrap(),
            password_hash: "$argon2id$secret_hash".to_string(),
        };

        let response = ApiSuccess::new(StatusCode::CREATED, UserData::from(&user)).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "status_code": 201,
                "data": { "id": 3, "name": "Alice", "email": "a@x.com" }
            })
        );
        assert!(!body.to_string().contains("argon2id"));
    }

    #[test]
    fn test_page_params_validation() {
        let params = PageParams {
            skip: Some(-1),
            limit: None,
        };

        assert!(matches!(
            params.into_page(10),
            Err(ApiError::UnprocessableEntity(_))
        ));
        assert_eq!(
            PageParams::default().into_page(10).unwrap().limit(),
            10
        );
    }
}
