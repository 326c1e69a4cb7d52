//! HTTP server abstraction.
//!
//! Shaped after the request-scoped API of small embedded web servers: while a
//! route handler runs, the server exposes the current request's query
//! arguments and accepts headers followed by exactly one response.

use crate::mode::ModeId;

/// Content type of every response sent by this crate.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// CORS headers sent on every ring response.
pub const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Methods", "POST,GET,OPTIONS"),
    (
        "Access-Control-Allow-Headers",
        "Origin, X-Requested-With, Content-Type, Accept",
    ),
];

/// HTTP status codes used by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusCode {
    Ok,
    BadRequest,
}

impl StatusCode {
    /// Numeric status code.
    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
        }
    }
}

/// Trait for the HTTP server a mode installs its route on.
pub trait HttpServer {
    /// Routes requests for `path` to the mode identified by `mode`.
    ///
    /// The application's run loop dispatches a matched request by calling
    /// that mode's request handler with this server.
    fn on(&mut self, path: &'static str, mode: ModeId);

    /// Number of query arguments on the current request.
    fn args(&self) -> usize;

    /// Name of the argument at `index`, if present.
    fn arg_name(&self, index: usize) -> Option<&str>;

    /// Raw value of the argument at `index`, if present.
    fn arg(&self, index: usize) -> Option<&str>;

    /// Queues a response header. Must be called before [`send`](HttpServer::send).
    fn send_header(&mut self, name: &'static str, value: &'static str);

    /// Sends the response for the current request.
    fn send(&mut self, status: StatusCode, content_type: &'static str, body: &str);
}
