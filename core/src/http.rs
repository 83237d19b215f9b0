//! Wire-level request and response values exchanged with the todo server.
//!
//! Every todo endpoint hangs off one root URL, and todos link to themselves,
//! so requests carry an absolute `url` rather than a path. Responses keep the
//! raw body text because an empty body is a meaningful answer here: it is how
//! the server reports a missing todo.

/// Verbs the todo server routes. There is no PUT; updates are partial PATCHes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// A request ready to send. `headers` is empty unless a JSON body is attached.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// What came back. `body` may be empty on a successful status.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
