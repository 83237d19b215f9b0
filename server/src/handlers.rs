//! Todo endpoints.
//!
//! A missing todo is answered with `200 OK` and an empty body, not `404`.
//! Todo-Backend clients rely on this, so GET and PATCH on an unknown id
//! deliberately stay successful. Absent or `null` POST bodies are treated
//! the same way.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::todo::{NewTodo, Todo, TodoPatch, TodoView};

/// JSON body when present, otherwise `200 OK` with nothing in it.
#[derive(Debug)]
pub struct MaybeJson<T>(pub Option<T>);

impl<T: Serialize> IntoResponse for MaybeJson<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => Json(value).into_response(),
            None => StatusCode::OK.into_response(),
        }
    }
}

/// Parse a JSON body without looking at `Content-Type`.
///
/// Empty, whitespace-only and `null` bodies are `None`.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(body)?)
}

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoView>>, AppError> {
    let todos = state.repo.find_all().await?;
    Ok(Json(todos.iter().map(|t| t.render(&state.root)).collect()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<MaybeJson<TodoView>, AppError> {
    let Some(input) = parse_body::<NewTodo>(&body)? else {
        tracing::debug!("create with empty body ignored");
        return Ok(MaybeJson(None));
    };

    let saved = state.repo.save(Todo::from(input)).await?;
    tracing::debug!(id = saved.id, title = %saved.title, "todo created");
    Ok(MaybeJson(Some(saved.render(&state.root))))
}

pub async fn clear_todos(State(state): State<AppState>) -> Result<(), AppError> {
    state.repo.delete_all().await?;
    tracing::debug!("all todos deleted");
    Ok(())
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<MaybeJson<TodoView>, AppError> {
    let todo = state.repo.find_by_id(id).await?;
    Ok(MaybeJson(todo.map(|t| t.render(&state.root))))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(), AppError> {
    state.repo.delete_by_id(id).await?;
    tracing::debug!(id, "todo deleted");
    Ok(())
}

/// Apply the keys present in the body to an existing todo. An absent body
/// changes nothing and returns the todo as stored.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<MaybeJson<TodoView>, AppError> {
    let patch = parse_body::<TodoPatch>(&body)?.unwrap_or_default();

    let Some(mut todo) = state.repo.find_by_id(id).await? else {
        tracing::debug!(id, "update of missing todo ignored");
        return Ok(MaybeJson(None));
    };

    todo.apply(patch);
    let saved = state.repo.save(todo).await?;
    tracing::debug!(id, "todo updated");
    Ok(MaybeJson(Some(saved.render(&state.root))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bodies_are_absent() {
        for raw in ["", "  \n", "null", " null "] {
            let parsed = parse_body::<NewTodo>(&Bytes::from(raw)).unwrap();
            assert!(parsed.is_none(), "{raw:?}");
        }
    }

    #[test]
    fn object_body_is_parsed() {
        let parsed = parse_body::<NewTodo>(&Bytes::from(r#"{"title":"a todo"}"#))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.title, "a todo");
    }

    #[test]
    fn malformed_body_is_an_error() {
        let result = parse_body::<NewTodo>(&Bytes::from("{title:"));
        assert!(matches!(result, Err(AppError::InvalidBody(_))));
    }

    #[test]
    fn empty_maybe_json_is_ok_without_body() {
        let response = MaybeJson::<TodoView>(None).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("content-type").is_none());
    }
}
