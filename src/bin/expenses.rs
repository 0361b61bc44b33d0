use pocketbook::{
    config::ExpensesConfig, db, routes::expenses_router, server, state::AppState,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing();

    let config = ExpensesConfig::from_env()?;

    // Create the data directory if it doesn't exist
    std::fs::create_dir_all(&config.database_path)?;
    let db = db::open_database(&config.database_path).await?;

    let state = Arc::new(AppState::new(db));
    let app = expenses_router(state);

    info!("Database location: {}", config.database_path);
    info!("Swagger UI: http://{}/swagger/", config.addr);
    server::serve(config.addr, app).await?;

    Ok(())
}
