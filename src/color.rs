//! Color codec for bare-HSL values.
//!
//! This module provides the two numeric conversions at the heart of the
//! crate and the canonical text rendering of an HSL triple:
//! - `hsl_to_rgb` — forward conversion used when a scanned triple is handed
//!   to a color picker
//! - `rgb_to_hsl` — inverse conversion used when an edited RGB value comes
//!   back from the picker
//! - `format_hsl` — bare-HSL text form with one-decimal rounding
//!
//! All functions are total: out-of-domain inputs produce deterministic
//! output rather than errors.
//!
//! # Examples
//!
//! ```
//! use bare_hsl::color::{hsl_to_rgb, rgb_to_hsl, format_hsl};
//!
//! let green = hsl_to_rgb(120.0, 0.5, 0.5);
//! assert!((green.g - 0.75).abs() < 1e-12);
//!
//! let red = rgb_to_hsl(1.0, 0.0, 0.0);
//! assert_eq!(format_hsl(red.h, red.s, red.l), "0 100% 50%");
//! ```

use std::fmt;

/// An RGB color with channels normalized to `0.0..=1.0`.
///
/// Alpha is carried for host color pickers that expect it, fixed at `1.0`
/// by every constructor in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbColor {
    /// Create an opaque color from normalized channels.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from `0..=255` byte channels.
    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Rescale to `0..=255` byte channels, clamping out-of-range values.
    #[must_use]
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "channel is clamped to [0,1] before scaling"
        )]
        fn byte(channel: f64) -> u8 {
            (channel.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (byte(self.r), byte(self.g), byte(self.b))
    }

    /// Convert to an HSL triple.
    #[must_use]
    pub fn to_hsl(&self) -> HslTriple {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_bytes(r, g, b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSL triple: hue in degrees, saturation and lightness as fractions.
///
/// Hue is conventionally `0..360` but never clamped; saturation and
/// lightness are expected in `0.0..=1.0` by the forward conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslTriple {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslTriple {
    /// Create a new triple.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert to an opaque RGB color.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// Renders the canonical bare-HSL text form, e.g. `120 50% 50%`.
impl fmt::Display for HslTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}%",
            Tenths(self.h),
            Tenths(self.s * 100.0),
            Tenths(self.l * 100.0)
        )
    }
}

/// Convert HSL to RGB.
///
/// `h` is in degrees, `s` and `l` are fractions in `0.0..=1.0`. Zero
/// saturation short-circuits to a gray with all channels equal to `l`,
/// skipping the hue computation entirely. Inputs outside the documented
/// domain are not guarded; the formulas produce whatever they produce.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    if s == 0.0 {
        return RgbColor::new(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let t = h / 360.0;
    RgbColor::new(
        hue_to_rgb(p, q, t + 1.0 / 3.0),
        hue_to_rgb(p, q, t),
        hue_to_rgb(p, q, t - 1.0 / 3.0),
    )
}

/// Piecewise hue-to-channel function, with `t` wrapped once into `0.0..=1.0`.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert RGB to HSL.
///
/// The exact algebraic inverse of [`hsl_to_rgb`]: hue comes back in
/// `0.0..360.0`, saturation and lightness as fractions. Saturation is
/// derived through the symmetric factor `1 - |2*value - chroma - 1|`,
/// which stays stable where lightness approaches 0 or 1 and naive
/// division does not.
#[must_use]
#[allow(clippy::float_cmp, clippy::many_single_char_names)]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> HslTriple {
    let value = r.max(g).max(b);
    let chroma = value - r.min(g).min(b);
    let f = 1.0 - (value + value - chroma - 1.0).abs();

    let h0 = if chroma == 0.0 {
        0.0
    } else if value == r {
        (g - b) / chroma
    } else if value == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    HslTriple {
        h: 60.0 * if h0 < 0.0 { h0 + 6.0 } else { h0 },
        s: if f == 0.0 { 0.0 } else { chroma / f },
        l: (value + value - chroma) / 2.0,
    }
}

/// Render an HSL triple as canonical bare-HSL text.
///
/// Hue is rounded half-up to one decimal; saturation and lightness are
/// scaled to percent and rounded the same way. A value whose tenths digit
/// rounds to zero prints without a decimal part (`50%`, never `50.0%`).
///
/// ```
/// use bare_hsl::color::format_hsl;
///
/// assert_eq!(format_hsl(120.05, 0.5, 0.333), "120.1 50% 33.3%");
/// ```
#[must_use]
pub fn format_hsl(h: f64, s: f64, l: f64) -> String {
    HslTriple::new(h, s, l).to_string()
}

/// A number rounded half-up to tenths, printed without a trailing `.0`.
struct Tenths(f64);

impl fmt::Display for Tenths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Snap to the nearest 1e-10 before deciding the half, so a value
        // stored just below an .x5 boundary (120.05 is 120.04999…9 as f64)
        // still rounds up.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "tenths of any representable color component fit i64"
        )]
        let tenths = ((self.0 * 1e10).round() / 1e9).round() as i64;
        let (sign, tenths) = if tenths < 0 { ("-", -tenths) } else { ("", tenths) };
        if tenths % 10 == 0 {
            write!(f, "{sign}{}", tenths / 10)
        } else {
            write!(f, "{sign}{}.{}", tenths / 10, tenths % 10)
        }
    }
}
