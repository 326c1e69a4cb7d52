//! Ring mode: a uniform color on a fixed-size LED ring, retargeted over HTTP.
//!
//! Provides [`RingMode`], which eases the displayed color toward a target on
//! every animation tick and accepts new targets from
//! `GET /ring?foreground=r<0-255>g<0-255>b<0-255>`.

use crate::color::{Color, DEFAULT_LERP_FACTOR, check_color, lerp_color_by};
use crate::error::{ModeError, RequestError};
use crate::http::{CONTENT_TYPE_JSON, CORS_HEADERS, HttpServer, StatusCode};
use crate::led::LedStrip;
use crate::mode::{Mode, ModeId, ModeRegistry};
use crate::response::{accepted_body, rejected_body};
use crate::scan::scan_foreground;

/// Number of pixels on the stock ring.
pub const NUM_PIXELS: usize = 12;

/// Route the ring installs on the server.
pub const RING_ROUTE: &str = "/ring";

/// Name of the only query argument the ring accepts.
pub const FOREGROUND_ARG: &str = "foreground";

/// Tunables for a [`RingMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingConfig {
    /// Path the request handler is installed on.
    pub route: &'static str,

    /// Fraction of the remaining distance covered per tick, in [0, 1].
    pub lerp_factor: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            route: RING_ROUTE,
            lerp_factor: DEFAULT_LERP_FACTOR,
        }
    }
}

/// Observable state of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingState {
    /// Displayed color equals the target.
    Idle,
    /// Displayed color is still converging on the target.
    Active,
}

/// Drives every pixel of a `PIXELS`-long ring with one color.
///
/// The ring does not hold on to its collaborators. The registry and server
/// are borrowed for construction and for each request, and the LED strip for
/// each tick. They only ever know the ring by its [`ModeId`].
#[derive(Debug, Clone)]
pub struct RingMode<const PIXELS: usize = NUM_PIXELS> {
    id: ModeId,
    config: RingConfig,
    current: Color,
    target: Color,
}

impl<const PIXELS: usize> RingMode<PIXELS> {
    /// Creates the ring, registers it as `id` and installs its route.
    ///
    /// Both colors start black.
    ///
    /// # Errors
    /// Whatever the registry reports for `id` (duplicate, full).
    pub fn new<R, S>(
        id: ModeId,
        config: RingConfig,
        registry: &mut R,
        server: &mut S,
    ) -> Result<Self, ModeError>
    where
        R: ModeRegistry,
        S: HttpServer,
    {
        registry.register_mode(id)?;
        server.on(config.route, id);
        info!("ring mode {} registered on {}", id.0, config.route);

        Ok(Self {
            id,
            config,
            current: Color::BLACK,
            target: Color::BLACK,
        })
    }

    /// Advances the displayed color one step and pushes it to every pixel.
    pub fn animate<L: LedStrip>(&mut self, pixels: &mut L) -> RingState {
        self.current = lerp_color_by(self.current, self.target, self.config.lerp_factor);

        let rgb = self.current.to_rgb8();
        for index in 0..PIXELS {
            pixels.set_pixel_color(index, rgb);
        }
        pixels.show();

        self.state()
    }

    /// Handles a request routed to this ring.
    ///
    /// On success the ring becomes the active mode, the target is replaced and
    /// a 200 echoing the color is sent. Otherwise a 400 describing what was
    /// received is sent. CORS headers go out either way.
    ///
    /// # Returns
    /// * `Ok(color)` - The accepted target color
    /// * `Err` - Why the request was refused (already answered with 400)
    pub fn handle_request<S, R>(
        &mut self,
        server: &mut S,
        registry: &mut R,
    ) -> Result<Color, RequestError>
    where
        S: HttpServer,
        R: ModeRegistry,
    {
        for (name, value) in CORS_HEADERS {
            server.send_header(name, value);
        }

        match parse_foreground(server) {
            Ok(color) => {
                registry.switch_to_mode(self.id);
                self.target = color;
                debug!(
                    "ring {} target r:{} g:{} b:{}",
                    self.id.0,
                    color.r,
                    color.g,
                    color.b
                );

                server.send(StatusCode::Ok, CONTENT_TYPE_JSON, &accepted_body(color));
                Ok(color)
            }
            Err((error, decoded)) => {
                warn!("ring {} rejected request: {}", self.id.0, error);

                let body = rejected_body(server.arg(0).unwrap_or(""), decoded);
                server.send(StatusCode::BadRequest, CONTENT_TYPE_JSON, &body);
                Err(error)
            }
        }
    }

    /// Returns the handle this ring registered under.
    pub fn id(&self) -> ModeId {
        self.id
    }

    /// Returns the configuration the ring was built with.
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Returns the color currently on the LEDs.
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Returns the color the ring is converging on.
    pub fn target_color(&self) -> Color {
        self.target
    }

    /// Returns `Idle` once the displayed color has reached the target.
    pub fn state(&self) -> RingState {
        if self.current == self.target {
            RingState::Idle
        } else {
            RingState::Active
        }
    }
}

impl<const PIXELS: usize> Mode for RingMode<PIXELS> {
    fn id(&self) -> ModeId {
        self.id
    }

    fn animate<L: LedStrip>(&mut self, pixels: &mut L) {
        Self::animate(self, pixels);
    }
}

/// Checks the request shape and decodes the color. On rejection, also
/// returns the channels decoded so far (zero if scanning never ran).
fn parse_foreground<S: HttpServer>(server: &S) -> Result<Color, (RequestError, Color)> {
    let count = server.args();
    if count != 1 {
        return Err((RequestError::ArgumentCount(count), Color::BLACK));
    }
    if server.arg_name(0) != Some(FOREGROUND_ARG) {
        return Err((RequestError::ArgumentName, Color::BLACK));
    }

    let outcome = scan_foreground(server.arg(0).unwrap_or(""));
    trace!("scanned {} channels", outcome.matched);
    if !outcome.is_complete() {
        return Err((
            RequestError::Malformed {
                matched: outcome.matched,
            },
            outcome.color,
        ));
    }
    if !check_color(outcome.color) {
        return Err((RequestError::OutOfRange(outcome.color), outcome.color));
    }

    Ok(outcome.color)
}
