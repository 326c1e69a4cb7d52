//! Shared test infrastructure for iro-ring integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use iro_ring::{HttpServer, LedStrip, ModeId, Srgb, StatusCode};

// ============================================================================
// Mock LED strip
// ============================================================================

/// Mock strip that buffers pixels and records every committed frame
pub struct MockStrip {
    pixels: Vec<Option<Srgb<u8>>>,
    frames: Vec<Vec<Option<Srgb<u8>>>>,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![None; len],
            frames: Vec::new(),
        }
    }

    pub fn show_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[Option<Srgb<u8>>]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl LedStrip for MockStrip {
    fn set_pixel_color(&mut self, index: usize, color: Srgb<u8>) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = Some(color);
        }
    }

    fn show(&mut self) {
        self.frames.push(self.pixels.clone());
    }
}

// ============================================================================
// Mock HTTP server
// ============================================================================

/// A response captured by [`MockServer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub headers: Vec<(&'static str, &'static str)>,
}

/// Mock server with a route table and one in-flight request at a time
pub struct MockServer {
    routes: Vec<(&'static str, ModeId)>,
    args: Vec<(String, String)>,
    pending_headers: Vec<(&'static str, &'static str)>,
    responses: Vec<SentResponse>,
}

impl MockServer {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            args: Vec::new(),
            pending_headers: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// Starts a new request with the given query, e.g. `"foreground=r1g2b3"`
    pub fn request(&mut self, query: &str) {
        self.pending_headers.clear();
        self.args = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((name, value)) => (name.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
    }

    /// Mode the route table sends `path` to
    pub fn route(&self, path: &str) -> Option<ModeId> {
        self.routes
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, id)| *id)
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn last_response(&self) -> Option<&SentResponse> {
        self.responses.last()
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

impl HttpServer for MockServer {
    fn on(&mut self, path: &'static str, mode: ModeId) {
        self.routes.push((path, mode));
    }

    fn args(&self) -> usize {
        self.args.len()
    }

    fn arg_name(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|(name, _)| name.as_str())
    }

    fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(|(_, value)| value.as_str())
    }

    fn send_header(&mut self, name: &'static str, value: &'static str) {
        self.pending_headers.push((name, value));
    }

    fn send(&mut self, status: StatusCode, content_type: &'static str, body: &str) {
        self.responses.push(SentResponse {
            status: status.as_u16(),
            content_type,
            body: body.to_string(),
            headers: std::mem::take(&mut self.pending_headers),
        });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Largest per-channel distance between two colors
pub fn channel_distance(a: iro_ring::Color, b: iro_ring::Color) -> i32 {
    (a.r - b.r)
        .abs()
        .max((a.g - b.g).abs())
        .max((a.b - b.b).abs())
}
