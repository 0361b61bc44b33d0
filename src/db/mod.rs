pub mod helpers;

use surrealdb::{
    Surreal,
    engine::local::{Db, RocksDb},
};
use tracing::info;

use crate::error::Result;

pub const NAMESPACE: &str = "pocketbook";
pub const DATABASE: &str = "expenses";

/// Open the file-backed store at `path` and make sure the schema exists.
pub async fn open_database(path: &str) -> Result<Surreal<Db>> {
    info!("Initializing SurrealDB at {}", path);

    let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
    db.use_ns(NAMESPACE).use_db(DATABASE).await?;

    setup_database(&db).await?;
    Ok(db)
}

pub async fn setup_database(db: &Surreal<Db>) -> Result<()> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS expenses SCHEMAFULL;
        DEFINE FIELD IF NOT EXISTS title ON expenses TYPE string;
        DEFINE FIELD IF NOT EXISTS amount ON expenses TYPE float;
        "#,
    )
    .await?
    .check()?;

    info!("Database schema ready");
    Ok(())
}
