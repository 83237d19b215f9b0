//! In-memory repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::todo::Todo;

use super::{Result, TodoRepository};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Todo>,
    last_id: i64,
}

/// Map-backed store for tests and throwaway servers. Ids come from a
/// monotonic counter and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }

    async fn save(&self, mut todo: Todo) -> Result<Todo> {
        let mut table = self.table.write().await;
        if todo.id == 0 {
            table.last_id += 1;
            todo.id = table.last_id;
            table.rows.insert(todo.id, todo.clone());
        } else if let Some(stored) = table.rows.get_mut(&todo.id) {
            *stored = todo.clone();
        } else {
            tracing::debug!(id = todo.id, "update of missing todo wrote nothing");
        }
        Ok(todo)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.table.write().await.rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::contract;
    use super::*;

    #[tokio::test]
    async fn save_assigns_distinct_ids() {
        contract::save_assigns_distinct_ids(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete_all() {
        contract::ids_not_reused_after_delete_all(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn find_all_in_creation_order() {
        contract::find_all_in_creation_order(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn find_and_exists() {
        contract::find_and_exists(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn save_with_id_updates_in_place() {
        contract::save_with_id_updates_in_place(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        contract::delete_is_idempotent(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn save_after_delete_does_not_resurrect() {
        contract::save_after_delete_does_not_resurrect(&InMemoryRepository::new()).await;
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        let saved = repo
            .save(Todo {
                id: 0,
                title: "shared".to_string(),
                completed: false,
                order: -1,
            })
            .await
            .unwrap();
        assert!(other.exists_by_id(saved.id).await.unwrap());
    }
}
