pub mod expenses;
pub mod health;
pub mod todos;
