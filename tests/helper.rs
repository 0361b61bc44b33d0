use pocketbook::db::helpers::*;
use pocketbook::error::AppError;
use pocketbook::models::*;

mod common;

#[tokio::test]
async fn test_query_expenses_empty() {
    let db = common::setup_test_db().await;

    let expenses = query_expenses(&db, "SELECT * FROM expenses ORDER BY id ASC")
        .await
        .unwrap();

    assert_eq!(expenses.len(), 0);
}

#[tokio::test]
async fn test_query_expenses_with_data() {
    let db = common::setup_test_db().await;

    let record = ExpenseRecord {
        title: "Bus ticket".to_string(),
        amount: 2.4,
    };
    let _: Option<Expense> = db
        .create((EXPENSES_TABLE, 1_i64))
        .content(record)
        .await
        .unwrap();

    let expenses = query_expenses(&db, "SELECT * FROM expenses ORDER BY id ASC")
        .await
        .unwrap();

    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].key(), Some(1));
    assert_eq!(expenses[0].title, "Bus ticket");
    assert_eq!(expenses[0].amount, 2.4);
}

#[tokio::test]
async fn test_next_expense_id_empty_table() {
    let db = common::setup_test_db().await;
    assert_eq!(next_expense_id(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_next_expense_id_follows_highest_key() {
    let db = common::setup_test_db().await;

    for id in [1_i64, 2, 10] {
        let _: Option<Expense> = db
            .create((EXPENSES_TABLE, id))
            .content(ExpenseRecord {
                title: format!("Expense {id}"),
                amount: 1.0,
            })
            .await
            .unwrap();
    }

    assert_eq!(next_expense_id(&db).await.unwrap(), 11);
}

#[tokio::test]
async fn test_get_expense_by_id_found() {
    let db = common::setup_test_db().await;

    let _: Option<Expense> = db
        .create((EXPENSES_TABLE, 7_i64))
        .content(ExpenseRecord {
            title: "Lunch".to_string(),
            amount: 12.0,
        })
        .await
        .unwrap();

    let expense = get_expense_by_id(&db, 7).await.unwrap();
    assert_eq!(expense.title, "Lunch");
    assert_eq!(expense.amount, 12.0);
}

#[tokio::test]
async fn test_get_expense_by_id_not_found() {
    let db = common::setup_test_db().await;

    let result = get_expense_by_id(&db, 99).await;
    assert!(matches!(result, Err(AppError::ExpenseNotFound(99))));
}
