use surrealdb::{Surreal, engine::local::Db};

use crate::{
    error::{AppError, Result},
    models::{EXPENSES_TABLE, Expense},
};

// Helper to execute a query and extract expenses
pub async fn query_expenses(db: &Surreal<Db>, query: &str) -> Result<Vec<Expense>> {
    let mut result = db.query(query).await?;
    let expenses: Vec<Expense> = result.take(0)?;
    Ok(expenses)
}

pub async fn get_expense_by_id(db: &Surreal<Db>, id: i64) -> Result<Expense> {
    let expense: Option<Expense> = db.select((EXPENSES_TABLE, id)).await?;
    expense.ok_or(AppError::ExpenseNotFound(id))
}

/// Highest stored key plus one, or 1 for an empty table.
pub async fn next_expense_id(db: &Surreal<Db>) -> Result<i64> {
    let latest = query_expenses(db, "SELECT * FROM expenses ORDER BY id DESC LIMIT 1").await?;
    Ok(latest
        .first()
        .and_then(Expense::key)
        .map_or(1, |id| id + 1))
}
