//! SQLite backend using `rusqlite` wrapped by `tokio-rusqlite`.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use crate::todo::Todo;

use super::error::{from_sqlite, RepositoryError, Result};
use super::schema;
use super::TodoRepository;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

fn row_to_todo(row: &rusqlite::Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
        order: row.get(3)?,
    })
}

/// SQLite-backed todo store. The schema is created on open.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (or create) a database file.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        Self::init_schema(&conn).await?;
        Ok(Self { conn })
    }

    /// Data is lost when the repository is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;
        Self::init_schema(&conn).await?;
        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(from_sqlite)
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(from_sqlite)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_todo) {
                    Ok(todo) => Ok(Some(todo)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(from_sqlite)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::EXISTS_BY_ID, [id], |row| row.get::<_, bool>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(from_sqlite)
    }

    async fn save(&self, todo: Todo) -> Result<Todo> {
        self.conn
            .call(move |conn| {
                if todo.id == 0 {
                    conn.execute(
                        schema::INSERT,
                        rusqlite::params![todo.title, todo.completed, todo.order],
                    )
                    .map_err(wrap_err)?;
                    Ok(Todo {
                        id: conn.last_insert_rowid(),
                        ..todo
                    })
                } else {
                    let rows = conn
                        .execute(
                            schema::UPDATE,
                            rusqlite::params![todo.id, todo.title, todo.completed, todo.order],
                        )
                        .map_err(wrap_err)?;
                    if rows == 0 {
                        tracing::debug!(id = todo.id, "update of missing todo wrote nothing");
                    }
                    Ok(todo)
                }
            })
            .await
            .map_err(from_sqlite)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_BY_ID, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(from_sqlite)
    }

    async fn delete_all(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute(schema::DELETE_ALL, []).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(from_sqlite)
    }
}
