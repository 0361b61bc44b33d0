use crate::{models::TodoItem, store::TodoStore};

// Items present on every fresh start of the todo app
const DEFAULT_TODOS: [(&str, bool); 4] = [
    ("Do Dishes", false),
    ("Clean the Kitchen", true),
    ("Wash the Car", false),
    ("Make Dinner", true),
];

pub fn default_todos() -> Vec<TodoItem> {
    DEFAULT_TODOS
        .iter()
        .zip(1..)
        .map(|(&(title, completed), id)| TodoItem {
            id,
            title: title.to_string(),
            completed,
        })
        .collect()
}

pub fn seeded_store() -> TodoStore {
    let store = TodoStore::with_items(default_todos());
    tracing::info!("Seeded todo list with {} items", store.len());
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_todos_ids_are_sequential() {
        let ids: Vec<i64> = default_todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_default_todos_flags() {
        let todos = default_todos();
        assert_eq!(todos[0].title, "Do Dishes");
        assert!(!todos[0].completed);
        assert!(todos[1].completed);
        assert!(todos[3].completed);
    }
}
