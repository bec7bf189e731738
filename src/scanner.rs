//! Scanning document text for bare-HSL color triples.
//!
//! A "bare" triple is three numbers written without the `hsl(...)` wrapper:
//! a 1-3 digit hue, then a saturation percent and a lightness percent. The
//! scan is global and non-overlapping; it resumes strictly after each
//! match, and every call to [`scan`] starts an independent traversal with
//! no state shared between calls.
//!
//! The pattern carries no anchors or word boundaries, so triples are
//! matched anywhere in the text, including inside unrelated digit runs.
//! That is an accepted source of false positives, not something the
//! scanner tries to detect.
//!
//! # Examples
//!
//! ```
//! use bare_hsl::scanner::scan;
//!
//! let mut matches = scan("color: 120 50% 50%;");
//! let m = matches.next().unwrap();
//! assert_eq!(m.as_str(), "120 50% 50%");
//! assert_eq!((m.span().start, m.span().end), (7, 18));
//! assert!(matches.next().is_none());
//! ```

use regex::{CaptureMatches, Regex};
use std::sync::LazyLock;

use crate::color::HslTriple;

// Hue and saturation must be separated by whitespace; the remaining
// separators are optional and each `%` binds directly to its number.
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3})\s+(\d+(?:\.\d+)?)%\s*(\d+(?:\.\d+)?)%").expect("valid regex")
});

/// A half-open byte span `[start, end)` into the scanned text.
///
/// The match grammar is pure ASCII, so byte and character offsets agree
/// inside any span the scanner produces; hosts indexing by other units
/// convert at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl TextSpan {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A single bare-HSL hit: its location and the three captured substrings.
///
/// The raw captures borrow from the scanned text and re-parse infallibly;
/// the pattern's character classes only admit valid integers and decimals.
#[derive(Debug, Clone, Copy)]
pub struct Match<'t> {
    span: TextSpan,
    text: &'t str,
    raw_hue: &'t str,
    raw_saturation: &'t str,
    raw_lightness: &'t str,
}

impl<'t> Match<'t> {
    /// Location of the match in the scanned text.
    #[must_use]
    pub const fn span(&self) -> TextSpan {
        self.span
    }

    /// The full matched substring.
    #[must_use]
    pub const fn as_str(&self) -> &'t str {
        self.text
    }

    /// The hue capture: 1-3 digits, unvalidated (e.g. `"999"` passes).
    #[must_use]
    pub const fn raw_hue(&self) -> &'t str {
        self.raw_hue
    }

    /// The saturation capture, digits only, without its `%` sign.
    #[must_use]
    pub const fn raw_saturation(&self) -> &'t str {
        self.raw_saturation
    }

    /// The lightness capture, digits only, without its `%` sign.
    #[must_use]
    pub const fn raw_lightness(&self) -> &'t str {
        self.raw_lightness
    }

    /// Parse the captures into an [`HslTriple`], dividing the percent
    /// captures by 100.
    ///
    /// # Panics
    ///
    /// Never panics for a `Match` produced by [`scan`]; the pattern
    /// guarantees parseable captures.
    #[must_use]
    pub fn hsl(&self) -> HslTriple {
        HslTriple::new(
            f64::from(self.raw_hue.parse::<u16>().expect("hue digits")),
            self.raw_saturation.parse::<f64>().expect("percent digits") / 100.0,
            self.raw_lightness.parse::<f64>().expect("percent digits") / 100.0,
        )
    }
}

/// Lazy iterator over the bare-HSL matches in a text, in document order.
///
/// Finite, owns its own cursor, and may be abandoned at any point with no
/// side effects.
pub struct Matches<'t> {
    inner: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Matches<'t> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let full = caps.get(0).expect("whole match");
        Some(Match {
            span: TextSpan::new(full.start(), full.end()),
            text: full.as_str(),
            raw_hue: caps.get(1).expect("hue group").as_str(),
            raw_saturation: caps.get(2).expect("saturation group").as_str(),
            raw_lightness: caps.get(3).expect("lightness group").as_str(),
        })
    }
}

/// Scan a text for bare-HSL triples.
///
/// Each call builds a fresh iterator over the same shared, immutable
/// pattern; nothing persists from one scan to the next. Empty text or a
/// text without matches yields an empty iterator, not an error.
#[must_use]
pub fn scan(text: &str) -> Matches<'_> {
    Matches {
        inner: HSL_PATTERN.captures_iter(text),
    }
}
