#![cfg_attr(not(feature = "std"), no_std)]

//! # Core Concepts
//!
//! - **`Color`**: A raw RGB triple; `check_color` validates it, `lerp_color` eases one toward another
//! - **`RingMode`**: Drives a fixed-size LED ring with one color and accepts new targets over HTTP
//! - **`RingConfig`**: Route and easing rate for a ring
//! - **`ModeManager`**: Registry of modes, at most one of which is active
//! - **`LedStrip`**: Trait to implement for your LED driver
//! - **`HttpServer`**: Trait to implement for your web server
//! - **`ModeRegistry`**: Trait for anything that can register and switch modes
//!
//! A typical run loop constructs the ring once, then on every frame calls
//! `ModeManager::animate_active` and, whenever the server matches
//! [`RING_ROUTE`], `RingMode::handle_request`. Both are called from the same
//! loop and never concurrently.

#[macro_use]
mod fmt;

pub mod color;
pub mod error;
pub mod http;
pub mod led;
pub mod manager;
pub mod mode;
pub mod response;
pub mod ring;
pub mod scan;

pub use palette::Srgb;

pub use color::{Color, DEFAULT_LERP_FACTOR, check_color, lerp_color, lerp_color_by};
pub use error::{ModeError, RequestError};
pub use http::{CONTENT_TYPE_JSON, CORS_HEADERS, HttpServer, StatusCode};
pub use led::LedStrip;
pub use manager::ModeManager;
pub use mode::{Mode, ModeId, ModeRegistry};
pub use response::{RESPONSE_CAPACITY, ResponseBody};
pub use ring::{FOREGROUND_ARG, NUM_PIXELS, RING_ROUTE, RingConfig, RingMode, RingState};
pub use scan::{FOREGROUND_FORMAT, ScanOutcome, scan_foreground};
