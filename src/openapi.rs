use utoipa::OpenApi;

use crate::models::{CreateExpenseRequest, ErrorBody, Expense, Greeting, UpdateExpenseRequest};

pub const SPEC_PATH: &str = "/spec";
pub const SWAGGER_PATH: &str = "/swagger";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::expenses::home,
        crate::handlers::expenses::list_expenses,
        crate::handlers::expenses::create_expense,
        crate::handlers::expenses::get_expense,
        crate::handlers::expenses::update_expense,
        crate::handlers::expenses::delete_expense
    ),
    components(schemas(
        Greeting,
        CreateExpenseRequest,
        UpdateExpenseRequest,
        Expense,
        ErrorBody
    )),
    tags(
        (name = "home", description = "Home page"),
        (name = "expenses", description = "Expense records")
    ),
    info(
        title = "Expense tracking app",
        description = "Create, read, update and delete expenses",
        version = "0.0.1"
    )
)]
pub struct ApiDoc;
