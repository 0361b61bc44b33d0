use serde::{Deserialize, Serialize, Serializer};
use surrealdb::sql::{Id, Thing};
use utoipa::ToSchema;

pub const EXPENSES_TABLE: &str = "expenses";

// Expense ids are numeric record keys; anything else is rendered as text
fn serialize_thing_as_number<S>(thing: &Thing, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match &thing.id {
        Id::Number(n) => serializer.serialize_i64(*n),
        other => serializer.serialize_str(&other.to_string()),
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Expense {
    /// Expense identifier
    #[serde(serialize_with = "serialize_thing_as_number")]
    #[schema(value_type = i64, example = 1)]
    pub id: Thing,
    #[schema(example = "Coffee")]
    pub title: String,
    #[schema(example = 3.5)]
    pub amount: f64,
}

impl Expense {
    /// Numeric key of the record, if it has one.
    pub fn key(&self) -> Option<i64> {
        match self.id.id {
            Id::Number(n) => Some(n),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseRecord {
    pub title: String,
    pub amount: f64,
}

#[derive(Debug, Serialize, Default)]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateExpenseRequest {
    #[schema(example = "Coffee")]
    pub title: String,
    #[schema(example = 3.5)]
    pub amount: f64,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    #[schema(example = "Hi, I am your expense tracking app!")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "We could not find this :(")]
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct AddTodoForm {
    #[serde(default)]
    pub title: String,
}
