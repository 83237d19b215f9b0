//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the server's `root` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Every endpoint answers `200`. GET and PATCH on a missing todo answer with
//! an empty body, so their parsers return `Option<Todo>`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoPatch};

const EXPECTED_STATUS: u16 = 200;

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    root: String,
}

impl TodoClient {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the collection, e.g. `http://localhost:8080/`.
    pub fn collection_url(&self) -> String {
        format!("{}/", self.root)
    }

    /// URL the server assigns to the todo with `id`.
    pub fn todo_url(&self, id: i64) -> String {
        format!("{}/{id}", self.root)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        bodyless(HttpMethod::Get, self.collection_url())
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, self.collection_url(), input)
    }

    /// Delete every todo.
    pub fn build_clear_todos(&self) -> HttpRequest {
        bodyless(HttpMethod::Delete, self.collection_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        self.build_get_url(&self.todo_url(id))
    }

    /// Follow a todo's `url`.
    pub fn build_get_url(&self, url: &str) -> HttpRequest {
        bodyless(HttpMethod::Get, url.to_string())
    }

    pub fn build_update_todo(&self, id: i64, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        self.build_update_url(&self.todo_url(id), patch)
    }

    pub fn build_update_url(&self, url: &str, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Patch, url.to_string(), patch)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        self.build_delete_url(&self.todo_url(id))
    }

    pub fn build_delete_url(&self, url: &str) -> HttpRequest {
        bodyless(HttpMethod::Delete, url.to_string())
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// `None` when the server sent an empty body for a null request body.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    pub fn parse_clear_todos(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    /// `None` when no todo has that id.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    /// `None` when no todo has that id.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        check_status(&response)?;
        decode_optional(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn bodyless(method: HttpMethod, url: String) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(
    method: HttpMethod,
    url: String,
    payload: &T,
) -> Result<HttpRequest, ApiError> {
    let body =
        serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == EXPECTED_STATUS {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode(body).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    const TODO_JSON: &str =
        r#"{"id":1,"title":"Test","completed":false,"order":-1,"url":"http://localhost:8080/1"}"#;

    #[test]
    fn build_list_todos_targets_root() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_omits_unset_order() {
        let req = client().build_create_todo(&NewTodo::titled("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
        assert!(body.get("order").is_none());
    }

    #[test]
    fn build_clear_todos_deletes_root() {
        let req = client().build_clear_todos();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8080/");
    }

    #[test]
    fn build_update_todo_is_a_patch() {
        let patch = TodoPatch {
            order: Some(95),
            ..TodoPatch::default()
        };
        let req = client().build_update_todo(3, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.url, "http://localhost:8080/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"order": 95}));
    }

    #[test]
    fn url_builders_use_the_given_url() {
        let c = client();
        let url = "https://elsewhere.example/todos/9";
        assert_eq!(c.build_get_url(url).url, url);
        assert_eq!(c.build_delete_url(url).url, url);
        assert_eq!(c.build_update_url(url, &TodoPatch::default()).unwrap().url, url);
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8080/");
        assert_eq!(client.build_list_todos().url, "http://localhost:8080/");
        assert_eq!(client.build_get_todo(4).url, "http://localhost:8080/4");
    }

    #[test]
    fn parse_get_todo_found() {
        let todo = client().parse_get_todo(ok(TODO_JSON)).unwrap().unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.url, "http://localhost:8080/1");
    }

    #[test]
    fn parse_get_todo_empty_body_is_none() {
        assert!(client().parse_get_todo(ok("")).unwrap().is_none());
    }

    #[test]
    fn parse_update_todo_empty_body_is_none() {
        assert!(client().parse_update_todo(ok("")).unwrap().is_none());
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(ok("")).is_ok());
        assert!(client().parse_clear_todos(ok("")).is_ok());
    }
}
