use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Body returned for every 404 of the JSON API.
pub const NOT_FOUND_MESSAGE: &str = "We could not find this :(";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] Box<surrealdb::Error>),

    #[error("Expense {0} not found")]
    ExpenseNotFound(i64),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Invalid request body: {message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// Helper conversion to avoid .map_err(Box::new) everywhere
impl From<surrealdb::Error> for AppError {
    fn from(err: surrealdb::Error) -> Self {
        AppError::Database(Box::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::ExpenseNotFound(_) | AppError::RouteNotFound(_) => {
                warn!("{}", self);
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::InvalidBody { status, .. } => {
                warn!("{}", self);
                (*status, self.to_string())
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_expense_not_found_uses_fixed_body() {
        let response = AppError::ExpenseNotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_route_not_found_matches_expense_not_found() {
        let response = AppError::RouteNotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_invalid_body_keeps_rejection_status() {
        let err = AppError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `amount`".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("amount"));
    }
}
