use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use surrealdb::{Surreal, engine::local::Db};
use tokio::sync::{Mutex, RwLock};

use crate::store::TodoStore;

pub struct AppState {
    pub db: Surreal<Db>,
    // Serialises id allocation so two creates never pick the same key
    pub create_lock: Mutex<()>,
}

impl AppState {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            db,
            create_lock: Mutex::new(()),
        }
    }
}

#[derive(Clone, FromRef)]
pub struct TodoState {
    pub store: Arc<RwLock<TodoStore>>,
    pub key: Key,
}

impl TodoState {
    pub fn new(store: TodoStore, key: Key) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            key,
        }
    }
}
