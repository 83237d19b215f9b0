//! Resolved process configuration.

use std::sync::Arc;

use clap::{Parser, ValueEnum};

use crate::repository::{InMemoryRepository, Result, SqliteRepository, TodoRepository};
use crate::todo::RootUrl;

pub const DEFAULT_ROOT: &str = "http://localhost:8080";

/// Where todos are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Storage {
    Sqlite,
    Memory,
}

/// Todo-Backend compatible todo list server.
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-backend")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Externally visible root URL, used to build each todo's `url`
    #[arg(default_value = DEFAULT_ROOT, env = "TODO_ROOT_URL")]
    pub root: String,

    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Storage backend
    #[arg(long, value_enum, default_value_t = Storage::Sqlite, env = "TODO_STORAGE")]
    pub storage: Storage,

    /// SQLite database file (ignored with `--storage memory`)
    #[arg(long, default_value = "todos.db", env = "TODO_DATABASE")]
    pub database: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn root_url(&self) -> RootUrl {
        RootUrl::new(&self.root)
    }

    /// Open the configured backend.
    pub async fn open_repository(&self) -> Result<Arc<dyn TodoRepository>> {
        let repo: Arc<dyn TodoRepository> = match self.storage {
            Storage::Sqlite => Arc::new(SqliteRepository::open(&self.database).await?),
            Storage::Memory => Arc::new(InMemoryRepository::new()),
        };
        Ok(repo)
    }
}
