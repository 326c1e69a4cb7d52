//! Scanner for the `r<int>g<int>b<int>` foreground argument.
//!
//! Follows `scanf("r%dg%db%d")` semantics: literals must match exactly, each
//! `%d` skips leading whitespace and takes an optional sign followed by at
//! least one digit, and scanning stops at the first mismatch. Channels
//! converted before the stop keep their values; the rest stay zero.

use crate::color::Color;

/// Expected shape of the foreground argument, as reported to clients.
pub const FOREGROUND_FORMAT: &str = "r0-255g0-255b0-255";

/// Result of scanning a foreground argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanOutcome {
    /// Decoded channels, possibly partial.
    pub color: Color,

    /// Number of channels converted (0..=3).
    pub matched: usize,
}

impl ScanOutcome {
    /// True when all three channels were converted.
    pub fn is_complete(&self) -> bool {
        self.matched == 3
    }
}

/// Scans `input` against `r%dg%db%d`.
pub fn scan_foreground(input: &str) -> ScanOutcome {
    let mut cursor = Cursor::new(input);
    let mut outcome = ScanOutcome {
        color: Color::BLACK,
        matched: 0,
    };

    for (literal, channel) in [(b'r', 0), (b'g', 1), (b'b', 2)] {
        if !cursor.literal(literal) {
            break;
        }
        let Some(value) = cursor.integer() else {
            break;
        };

        match channel {
            0 => outcome.color.r = value,
            1 => outcome.color.g = value,
            _ => outcome.color.b = value,
        }
        outcome.matched += 1;
    }

    outcome
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn literal(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// `%d` conversion. Out-of-range values saturate at the `i32` bounds.
    /// On failure nothing useful is consumed, matching a failed conversion.
    fn integer(&mut self) -> Option<i32> {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }

        let start = self.pos;
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };

        let mut magnitude: i64 = 0;
        let mut digits = 0usize;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            magnitude = (magnitude * 10 + (b - b'0') as i64).min(i32::MAX as i64 + 1);
            digits += 1;
            self.pos += 1;
        }

        if digits == 0 {
            self.pos = start;
            return None;
        }

        let value = if negative { -magnitude } else { magnitude };
        Some(value.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }
}
