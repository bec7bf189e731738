//! # bare_hsl
//!
//! Scan plain text for "bare" HSL color triples — three numbers like
//! `120 50% 50%` with no `hsl(...)` wrapper — and convert them to and
//! from normalized RGB, for editor hosts that render inline color pickers.
//!
//! ## Quick Start
//!
//! ```
//! use bare_hsl::prelude::*;
//!
//! let colors = document_colors("body { color: 120 50% 50%; }");
//! assert_eq!(colors.len(), 1);
//! assert_eq!(colors[0].span, TextSpan::new(14, 25));
//!
//! // The picker hands back an edited color; present it as bare-HSL text.
//! let label = color_presentation(colors[0].color).label;
//! assert_eq!(label, "120 50% 50%");
//! ```
//!
//! ## Core Concepts
//!
//! - **Scanner**: lazy, restartable iteration over the bare-HSL matches in
//!   a document snapshot, each with a half-open byte span
//! - **Color codec**: pure `hsl_to_rgb` / `rgb_to_hsl` conversions and the
//!   canonical one-decimal bare-HSL formatting
//! - **Provider**: the thin host-facing layer pairing spans with colors
//!
//! The crate performs no I/O and keeps no state between calls; every
//! function is safe to call concurrently.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod provider;
pub mod scanner;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{HslTriple, RgbColor, format_hsl, hsl_to_rgb, rgb_to_hsl};
    pub use crate::provider::{
        ColorInformation, ColorPresentation, color_presentation, document_colors,
    };
    pub use crate::scanner::{Match, Matches, TextSpan, scan};
}

// Re-export key types at crate root
pub use color::{HslTriple, RgbColor, format_hsl, hsl_to_rgb, rgb_to_hsl};
pub use provider::{ColorInformation, ColorPresentation, color_presentation, document_colors};
pub use scanner::{Match, Matches, TextSpan, scan};
