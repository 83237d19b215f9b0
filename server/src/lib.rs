//! Todo-Backend compatible todo list server.
//!
//! # Overview
//! A single `Todo` entity exposed through CRUD endpoints mounted at `/`,
//! persisted through a `TodoRepository`, with CORS open for browser
//! frontends. Each todo carries a `url` self-link built from the configured
//! root URL when it is serialized.
//!
//! # Design
//! - `AppState` carries the repository and the `RootUrl`; nothing is global.
//! - Handlers make one repository call per request.
//! - A missing todo is an empty `200`, see [`handlers`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod state;
pub mod todo;

use std::time::Duration;

use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::AppError;
pub use repository::{InMemoryRepository, RepositoryError, SqliteRepository, TodoRepository};
pub use state::AppState;
pub use todo::{NewTodo, RootUrl, Todo, TodoPatch, TodoView};

use handlers::{clear_todos, create_todo, delete_todo, get_todo, list_todos, update_todo};

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(CORS_MAX_AGE)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_todos).post(create_todo).delete(clear_todos))
        .route(
            "/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}
