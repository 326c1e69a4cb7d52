//! JSON bodies for ring responses.
//!
//! Bodies are rendered into fixed-capacity buffers. The fixed template plus a
//! fully escaped echo of [`MAX_RECEIVED_ECHO`] bytes fits in
//! [`RESPONSE_CAPACITY`], so rendering never runs out of room.

use core::fmt::Write;

use heapless::String;

use crate::color::Color;
use crate::scan::FOREGROUND_FORMAT;

/// Capacity of a rendered response body in bytes.
pub const RESPONSE_CAPACITY: usize = 512;

/// Longest slice of the received argument echoed back in an error body.
pub const MAX_RECEIVED_ECHO: usize = 128;

/// A rendered response body.
pub type ResponseBody = String<RESPONSE_CAPACITY>;

/// Body for an accepted color: `{foreground: {r:10,g:20,b:30}}`.
pub fn accepted_body(color: Color) -> ResponseBody {
    let mut body = ResponseBody::new();
    let _ = write!(
        body,
        "{{foreground: {{r:{},g:{},b:{}}}}}",
        color.r, color.g, color.b
    );
    body
}

/// Body for a rejected request, echoing the raw argument and whatever
/// channels were decoded before the request was refused.
pub fn rejected_body(received: &str, decoded: Color) -> ResponseBody {
    let mut body = ResponseBody::new();
    let _ = write!(
        body,
        "{{error: \"wrong parameters\", expected:\"{}\", received:\"",
        FOREGROUND_FORMAT
    );
    write_escaped(&mut body, truncate(received, MAX_RECEIVED_ECHO));
    let _ = write!(
        body,
        "\", decoded:\"r:{},g:{},b:{}\"}}",
        decoded.r, decoded.g, decoded.b
    );
    body
}

/// Cuts `s` to at most `max` bytes without splitting a character.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn write_escaped(body: &mut ResponseBody, s: &str) {
    for ch in s.chars() {
        match ch {
            '"' => {
                let _ = body.push_str("\\\"");
            }
            '\\' => {
                let _ = body.push_str("\\\\");
            }
            '\n' => {
                let _ = body.push_str("\\n");
            }
            '\r' => {
                let _ = body.push_str("\\r");
            }
            '\t' => {
                let _ = body.push_str("\\t");
            }
            c if c < ' ' => {
                let _ = body.push('?');
            }
            c => {
                let _ = body.push(c);
            }
        }
    }
}
