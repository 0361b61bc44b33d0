use thiserror::Error;

use crate::{models::TodoItem, validation::sanitize_title};

/// Rejected todo mutations. The display text is shown to the user as a flash notice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Task not found")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, TodoError>;

/// In-memory todo list. Contents are lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn next_id(&self) -> i64 {
        self.items.iter().map(|item| item.id).max().map_or(1, |id| id + 1)
    }

    /// Append a new open item. Blank titles are rejected and leave the list untouched.
    pub fn add(&mut self, title: &str) -> Result<TodoItem> {
        let title = sanitize_title(title).ok_or(TodoError::EmptyTitle)?;
        let item = TodoItem {
            id: self.next_id(),
            title,
            completed: false,
        };
        self.items.push(item.clone());
        Ok(item)
    }

    pub fn toggle(&mut self, id: i64) -> Result<&TodoItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        item.completed = !item.completed;
        Ok(&*item)
    }

    pub fn remove(&mut self, id: i64) -> Result<TodoItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }
}
