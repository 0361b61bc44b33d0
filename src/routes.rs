use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{
        expenses::{
            create_expense, delete_expense, get_expense, home, list_expenses, not_found,
            update_expense,
        },
        health::health_check,
        todos::{add_todo, delete_todo, list_todos, toggle_todo},
    },
    openapi::{ApiDoc, SPEC_PATH, SWAGGER_PATH},
    state::{AppState, TodoState},
};

pub fn expenses_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense)
                .patch(update_expense)
                .delete(delete_expense),
        )
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        // Serves the document at SPEC_PATH and the UI under SWAGGER_PATH
        .merge(SwaggerUi::new(SWAGGER_PATH).url(SPEC_PATH, ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub fn todos_router(state: TodoState) -> Router {
    Router::new()
        .route("/", get(list_todos))
        .route("/add", post(add_todo))
        .route("/update/{id}", get(toggle_todo))
        .route("/delete/{id}", get(delete_todo))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}
