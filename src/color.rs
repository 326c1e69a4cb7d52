//! Raw RGB triples, range validation and per-tick interpolation.
//!
//! Channels are signed so that out-of-range requests (e.g. `r300` or `r-1`)
//! can be carried through to the error response unchanged. Only colors that
//! pass [`check_color`] are ever stored by the ring.

use palette::{Mix, Srgb};

/// Fraction of the remaining distance covered by each [`lerp_color`] call.
pub const DEFAULT_LERP_FACTOR: f32 = 0.1;

/// Lowest legal channel value.
pub const CHANNEL_MIN: i32 = 0;

/// Highest legal channel value.
pub const CHANNEL_MAX: i32 = 255;

/// An RGB triple with integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    /// All channels zero.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Creates a color from raw channel values. No validation is done.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Converts to an 8-bit pixel value, clamping each channel into [0, 255].
    pub fn to_rgb8(self) -> Srgb<u8> {
        Srgb::new(clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b))
    }

    /// Each channel clamped into [0, 255].
    fn clamped(self) -> Self {
        Color::new(
            self.r.clamp(CHANNEL_MIN, CHANNEL_MAX),
            self.g.clamp(CHANNEL_MIN, CHANNEL_MAX),
            self.b.clamp(CHANNEL_MIN, CHANNEL_MAX),
        )
    }

    /// Unscaled floating point view used for mixing.
    fn to_mix_space(self) -> Srgb {
        Srgb::new(self.r as f32, self.g as f32, self.b as f32)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Color::new(rgb.red as i32, rgb.green as i32, rgb.blue as i32)
    }
}

/// Returns true if every channel lies in [0, 255].
#[inline]
pub fn check_color(color: Color) -> bool {
    let legal = CHANNEL_MIN..=CHANNEL_MAX;
    legal.contains(&color.r) && legal.contains(&color.g) && legal.contains(&color.b)
}

/// Moves `current` one step toward `target` using [`DEFAULT_LERP_FACTOR`].
#[inline]
pub fn lerp_color(current: Color, target: Color) -> Color {
    lerp_color_by(current, target, DEFAULT_LERP_FACTOR)
}

/// Moves `current` one step toward `target`, covering `factor` of the
/// remaining distance on each channel.
///
/// `factor` is clamped to [0, 1] and a NaN factor counts as 0. Both colors
/// are clamped into [0, 255] per channel before mixing, so the result is
/// always a legal color. A channel that is not yet at its target always
/// moves by at least one unit, so repeated calls land exactly on the
/// (clamped) `target` and then stay there.
pub fn lerp_color_by(current: Color, target: Color, factor: f32) -> Color {
    let factor = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    let current = current.clamped();
    let target = target.clamped();
    let mixed = current.to_mix_space().mix(target.to_mix_space(), factor);

    Color::new(
        step_channel(current.r, target.r, mixed.red),
        step_channel(current.g, target.g, mixed.green),
        step_channel(current.b, target.b, mixed.blue),
    )
}

fn step_channel(current: i32, target: i32, mixed: f32) -> i32 {
    if current == target {
        return current;
    }

    let next = round_half_away(mixed);
    if next == current {
        // Both channels were clamped into [0, 255], so this cannot overflow.
        current + (target - current).signum()
    } else {
        next
    }
}

// `f32::round` lives in std; this is the same rounding for the values we mix.
fn round_half_away(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}
