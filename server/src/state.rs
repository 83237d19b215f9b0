use std::sync::Arc;

use crate::repository::{InMemoryRepository, TodoRepository};
use crate::todo::RootUrl;

/// Shared state handed to every handler.
///
/// The root URL travels here rather than in a global so each router renders
/// self-links against its own configuration.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TodoRepository>,
    pub root: RootUrl,
}

impl AppState {
    pub fn new(repo: Arc<dyn TodoRepository>, root: RootUrl) -> Self {
        Self { repo, root }
    }

    /// Fresh empty in-memory store rendering urls under `root`.
    ///
    /// Meant for tests and throwaway servers. The binary builds its state from
    /// [`Config::open_repository`](crate::config::Config::open_repository).
    pub fn in_memory(root: &str) -> Self {
        Self::new(Arc::new(InMemoryRepository::new()), RootUrl::new(root))
    }
}
