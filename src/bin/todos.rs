use pocketbook::{config::TodosConfig, routes::todos_router, seeding, server, state::TodoState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::init_tracing();

    let config = TodosConfig::from_env()?;
    let state = TodoState::new(seeding::seeded_store(), config.flash_key.clone());

    server::serve(config.addr, todos_router(state)).await?;

    Ok(())
}
