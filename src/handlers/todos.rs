use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use tracing::{info, warn};

use crate::{
    extract::IdPath,
    flash,
    models::AddTodoForm,
    state::TodoState,
    views::render_todo_page,
};

pub async fn list_todos(
    State(state): State<TodoState>,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    let store = state.store.read().await;
    info!("Rendering {} todo items", store.len());

    (jar, Html(render_todo_page(store.items(), &flashes)))
}

pub async fn add_todo(
    State(state): State<TodoState>,
    jar: PrivateCookieJar,
    Form(form): Form<AddTodoForm>,
) -> (PrivateCookieJar, Redirect) {
    let mut store = state.store.write().await;
    let jar = match store.add(&form.title) {
        Ok(item) => {
            info!("Added todo item: id={}", item.id);
            jar
        }
        Err(e) => {
            warn!("Rejected todo item: {}", e);
            flash::push(jar, flash::ERROR, e.to_string())
        }
    };

    (jar, Redirect::to("/"))
}

pub async fn toggle_todo(
    State(state): State<TodoState>,
    IdPath(id): IdPath,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Redirect) {
    let mut store = state.store.write().await;
    let jar = match store.toggle(id) {
        Ok(item) => {
            info!("Toggled todo item: id={}, completed={}", id, item.completed);
            jar
        }
        Err(e) => {
            warn!("Toggle failed for todo item {}: {}", id, e);
            flash::push(jar, flash::ERROR, e.to_string())
        }
    };

    (jar, Redirect::to("/"))
}

pub async fn delete_todo(
    State(state): State<TodoState>,
    IdPath(id): IdPath,
    jar: PrivateCookieJar,
) -> (PrivateCookieJar, Redirect) {
    let mut store = state.store.write().await;
    let jar = match store.remove(id) {
        Ok(item) => {
            info!("Deleted todo item: id={}, title={}", id, item.title);
            jar
        }
        Err(e) => {
            warn!("Delete failed for todo item {}: {}", id, e);
            flash::push(jar, flash::ERROR, e.to_string())
        }
    };

    (jar, Redirect::to("/"))
}
