//! The todo entity and its JSON shapes.
//!
//! # Design
//! `Todo` is the stored record and carries no url. The self-link only exists
//! on `TodoView`, which is rendered against an explicit `RootUrl` every time a
//! todo leaves the server. Request payloads (`NewTodo`, `TodoPatch`) never
//! read `id` or `url`, so a client cannot smuggle either one into storage.

use serde::{Deserialize, Serialize};

/// Order value for todos the client never placed.
pub const UNORDERED: i32 = -1;

/// A single stored todo. `id == 0` means the store has not assigned one yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub order: i32,
}

impl Todo {
    /// Overwrite the fields present in `patch`. The id is left alone.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }

    pub fn render(&self, root: &RootUrl) -> TodoView {
        TodoView {
            title: self.title.clone(),
            completed: self.completed,
            order: self.order,
            id: self.id,
            url: root.todo_url(self.id),
        }
    }
}

/// POST payload. Unknown keys, `id` and `url` are ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub order: i32,
}

impl Default for NewTodo {
    fn default() -> Self {
        Self {
            title: String::new(),
            completed: false,
            order: UNORDERED,
        }
    }
}

impl From<NewTodo> for Todo {
    fn from(input: NewTodo) -> Self {
        Self {
            id: 0,
            title: input.title,
            completed: input.completed,
            order: input.order,
        }
    }
}

/// PATCH payload. Only the keys present in the JSON are applied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub order: Option<i32>,
}

/// Externally visible base URL used to build each todo's self-link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootUrl(String);

impl RootUrl {
    pub fn new(root: &str) -> Self {
        Self(root.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn todo_url(&self, id: i64) -> String {
        format!("{}/{id}", self.0)
    }
}

/// A todo as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub title: String,
    pub completed: bool,
    pub order: i32,
    pub id: i64,
    pub url: String,
}
