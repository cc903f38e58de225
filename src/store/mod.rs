use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Todo, UpdateTodoRequest};

/// Per-user todo collections behind one lock. Every mutation runs as a
/// whole read-modify-write transaction under the write guard, so all
/// operations on one user's collection are totally ordered and no
/// store-internal update can be lost. Reads hand out snapshot clones that
/// never alias stored records.
///
/// Lock hold times are bounded by collection size; nothing here touches
/// I/O while holding a guard.
#[derive(Clone, Default)]
pub struct TodoStore {
    collections: Arc<RwLock<HashMap<String, Vec<Todo>>>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, owner: &str, title: String) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            title,
            completed: false,
            created_at: Utc::now(),
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(owner.to_string())
            .or_default()
            .push(todo.clone());
        todo
    }

    pub async fn list(&self, owner: &str) -> Vec<Todo> {
        let collections = self.collections.read().await;
        collections.get(owner).cloned().unwrap_or_default()
    }

    /// A todo owned by someone else is indistinguishable from a missing
    /// one; the lookup never leaves the owner's collection.
    pub async fn get(&self, owner: &str, id: &str) -> Option<Todo> {
        let collections = self.collections.read().await;
        collections
            .get(owner)?
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
    }

    /// Applies only the fields present in `req`, atomically under the
    /// write lock. Two concurrent updates touching disjoint fields both
    /// survive; same-field writes serialize last-write-wins. A caller that
    /// reads, computes and writes back across two separate calls can still
    /// lose its edit to a concurrent writer; that race belongs to the
    /// caller and is not masked here.
    pub async fn update(&self, owner: &str, id: &str, req: UpdateTodoRequest) -> Option<Todo> {
        let mut collections = self.collections.write().await;
        let todo = collections
            .get_mut(owner)?
            .iter_mut()
            .find(|todo| todo.id == id)?;

        if let Some(title) = req.title {
            todo.title = title;
        }
        if let Some(completed) = req.completed {
            todo.completed = completed;
        }
        Some(todo.clone())
    }

    pub async fn delete(&self, owner: &str, id: &str) -> bool {
        let mut collections = self.collections.write().await;
        let Some(todos) = collections.get_mut(owner) else {
            return false;
        };
        let Some(idx) = todos.iter().position(|todo| todo.id == id) else {
            return false;
        };
        todos.remove(idx);
        true
    }
}
