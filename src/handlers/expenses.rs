use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, Uri},
};
use std::sync::Arc;
use tracing::info;

use crate::{
    db::helpers::{get_expense_by_id, next_expense_id, query_expenses},
    error::{AppError, Result},
    extract::IdPath,
    models::{
        CreateExpenseRequest, EXPENSES_TABLE, ErrorBody, Expense, ExpenseRecord, ExpenseUpdate,
        Greeting, UpdateExpenseRequest,
    },
    state::AppState,
};

pub const GREETING: &str = "Hi, I am your expense tracking app!";

/// Greets the user on the home page
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Greeting)),
    tag = "home"
)]
pub async fn home() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING.to_string(),
    })
}

/// Lists every expense in insertion order
#[utoipa::path(
    get,
    path = "/expenses",
    responses((status = 200, description = "List of expenses", body = [Expense])),
    tag = "expenses"
)]
pub async fn list_expenses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Expense>>> {
    info!("Fetching all expenses");
    let expenses = query_expenses(&state.db, "SELECT * FROM expenses ORDER BY id ASC").await?;

    info!("Retrieved {} expenses", expenses.len());
    Ok(Json(expenses))
}

/// Creates a new expense
#[utoipa::path(
    post,
    path = "/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Created expense", body = Expense),
        (status = 422, description = "Body is missing required fields", body = ErrorBody)
    ),
    tag = "expenses"
)]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateExpenseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Expense>)> {
    let Json(payload) = payload?;
    info!("Creating new expense: {}", payload.title);

    let _guard = state.create_lock.lock().await;
    let id = next_expense_id(&state.db).await?;

    let record = ExpenseRecord {
        title: payload.title,
        amount: payload.amount,
    };

    // Create returns Option<T>
    let expense: Option<Expense> = state.db.create((EXPENSES_TABLE, id)).content(record).await?;
    let expense = expense.ok_or_else(|| {
        AppError::Database(Box::new(surrealdb::Error::Api(
            surrealdb::error::Api::Query("Failed to create expense".to_string()),
        )))
    })?;

    info!("Expense created successfully: id={}", id);
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Returns one expense by identifier
#[utoipa::path(
    get,
    path = "/expenses/{id}",
    params(("id" = i64, Path, description = "Expense identifier")),
    responses(
        (status = 200, description = "Found expense", body = Expense),
        (status = 404, description = "No expense with this identifier", body = ErrorBody)
    ),
    tag = "expenses"
)]
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<Expense>> {
    info!("Fetching expense: id={}", id);
    let expense = get_expense_by_id(&state.db, id).await?;
    Ok(Json(expense))
}

/// Updates the given fields of an expense
#[utoipa::path(
    patch,
    path = "/expenses/{id}",
    params(("id" = i64, Path, description = "Expense identifier")),
    request_body = UpdateExpenseRequest,
    responses(
        (status = 200, description = "Updated expense", body = Expense),
        (status = 404, description = "No expense with this identifier", body = ErrorBody)
    ),
    tag = "expenses"
)]
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    payload: std::result::Result<Json<UpdateExpenseRequest>, JsonRejection>,
) -> Result<Json<Expense>> {
    info!("Updating expense: id={}", id);

    get_expense_by_id(&state.db, id).await?;
    let Json(payload) = payload?;

    // Only fields present in the request are merged
    let update = ExpenseUpdate {
        title: payload.title,
        amount: payload.amount,
    };

    let updated: Option<Expense> = state
        .db
        .update((EXPENSES_TABLE, id))
        .merge(update)
        .await?;
    let updated = updated.ok_or(AppError::ExpenseNotFound(id))?;

    info!("Expense updated successfully: id={}", id);
    Ok(Json(updated))
}

/// Deletes an expense by identifier
#[utoipa::path(
    delete,
    path = "/expenses/{id}",
    params(("id" = i64, Path, description = "Expense identifier")),
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "No expense with this identifier", body = ErrorBody)
    ),
    tag = "expenses"
)]
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<StatusCode> {
    info!("Deleting expense: id={}", id);

    // Delete returns Option<T> when using a record ID
    let deleted: Option<Expense> = state.db.delete((EXPENSES_TABLE, id)).await?;
    deleted.ok_or(AppError::ExpenseNotFound(id))?;

    info!("Expense deleted successfully: id={}", id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.to_string())
}
