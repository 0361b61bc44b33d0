// Public modules that need to be accessible from tests
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod seeding;
pub mod server;
pub mod state;
pub mod store;
pub mod validation;
pub mod views;
