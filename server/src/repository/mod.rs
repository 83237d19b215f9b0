//! Persistence for todos.
//!
//! Handlers only see `Arc<dyn TodoRepository>`. Two backends implement it:
//! SQLite for real deployments and an in-memory map for tests.

mod error;
mod memory;
mod schema;
mod sqlite;

use async_trait::async_trait;

use crate::todo::Todo;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;

/// Store of todos keyed by id.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos in ascending id order.
    async fn find_all(&self) -> Result<Vec<Todo>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Insert when `todo.id == 0` (a fresh id is assigned), otherwise update
    /// the row with that id. Updating an id that is no longer stored writes
    /// nothing. Returns the record as given, with its id filled in.
    async fn save(&self, todo: Todo) -> Result<Todo>;

    /// No-op when the id is absent.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}
