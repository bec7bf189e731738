//! Host-facing document color provider.
//!
//! Thin glue between the scanner and the color codec, shaped for editor
//! hosts that render inline color pickers: [`document_colors`] turns a
//! document snapshot into `(span, color)` pairs, and
//! [`color_presentation`] turns an edited RGB value back into the bare-HSL
//! replacement text. The host owns everything else: offset-to-position
//! mapping, the picker UI, and applying the label to the document.
//!
//! # Examples
//!
//! ```
//! use bare_hsl::provider::{color_presentation, document_colors};
//!
//! let colors = document_colors("color: 120 50% 50%;");
//! assert_eq!(colors.len(), 1);
//!
//! let edited = colors[0].color;
//! assert_eq!(color_presentation(edited).label, "120 50% 50%");
//! ```

use crate::color::{self, HslTriple, RgbColor};
use crate::scanner::{self, TextSpan};

/// A converted color paired with the document span it was matched at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorInformation {
    pub span: TextSpan,
    pub color: RgbColor,
}

/// A textual replacement candidate for an edited color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPresentation {
    pub label: String,
}

/// Collect every bare-HSL triple in a document as a `(span, color)` pair.
///
/// Matches come back in document order and never overlap. A document
/// without matches yields an empty vector.
#[must_use]
pub fn document_colors(text: &str) -> Vec<ColorInformation> {
    let mut colors = Vec::new();
    for m in scanner::scan(text) {
        log::debug!(
            "bare HSL {:?} at {}..{}",
            m.as_str(),
            m.span().start,
            m.span().end
        );
        let HslTriple { h, s, l } = m.hsl();
        colors.push(ColorInformation {
            span: m.span(),
            color: color::hsl_to_rgb(h, s, l),
        });
    }
    colors
}

/// Render an edited RGB color as canonical bare-HSL replacement text.
///
/// Alpha is ignored; this crate only produces opaque colors.
#[must_use]
pub fn color_presentation(color: RgbColor) -> ColorPresentation {
    let hsl = color.to_hsl();
    ColorPresentation {
        label: color::format_hsl(hsl.h, hsl.s, hsl.l),
    }
}
