//! End-to-end scenarios through the public API: scan a document, convert
//! the matches, and present edited colors back as bare-HSL text.

use bare_hsl::prelude::*;

const EPS: f64 = 1e-12;

fn assert_rgb(color: RgbColor, r: f64, g: f64, b: f64) {
    assert!((color.r - r).abs() < EPS, "r: expected {r}, got {}", color.r);
    assert!((color.g - g).abs() < EPS, "g: expected {g}, got {}", color.g);
    assert!((color.b - b).abs() < EPS, "b: expected {b}, got {}", color.b);
    assert!((color.a - 1.0).abs() < EPS);
}

// ============================================================
// Document scanning
// ============================================================

#[test]
fn test_e2e_single_triple() {
    let colors = document_colors("120 50% 50%");
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].span, TextSpan::new(0, 11));
    assert_rgb(colors[0].color, 0.25, 0.75, 0.25);
}

#[test]
fn test_e2e_achromatic_white() {
    let colors = document_colors("0 0% 100%");
    assert_eq!(colors.len(), 1);
    assert_rgb(colors[0].color, 1.0, 1.0, 1.0);
}

#[test]
fn test_e2e_no_colors() {
    assert!(document_colors("no colors here").is_empty());
}

#[test]
fn test_e2e_two_triples_non_overlapping() {
    let text = "10 20% 30%   200 80% 40%";
    let colors = document_colors(text);
    assert_eq!(colors.len(), 2);
    assert!(colors[0].span.end <= colors[1].span.start);

    let second = scan(text).nth(1).unwrap();
    assert_eq!(second.raw_hue(), "200");
}

#[test]
fn test_e2e_css_like_document() {
    let text =
        ".header {\n  color: 210 80% 40%;\n  background: 0 0% 95%;\n}\n/* no wrapper */\n";
    let colors = document_colors(text);
    assert_eq!(colors.len(), 2);

    for info in &colors {
        let snippet = &text[info.span.start..info.span.end];
        // Each span points exactly at the text the scanner matched.
        let rescanned = scan(snippet).next().unwrap();
        assert_eq!(rescanned.as_str(), snippet);
    }
}

// ============================================================
// Presentation path
// ============================================================

#[test]
fn test_e2e_pure_red_inverse() {
    let hsl = rgb_to_hsl(1.0, 0.0, 0.0);
    assert!((hsl.h - 0.0).abs() < EPS);
    assert!((hsl.s - 1.0).abs() < EPS);
    assert!((hsl.l - 0.5).abs() < EPS);
    assert_eq!(color_presentation(RgbColor::new(1.0, 0.0, 0.0)).label, "0 100% 50%");
}

#[test]
fn test_e2e_edit_cycle_preserves_text() {
    // Scan, hand the color to the picker, get it back unedited, present:
    // the label reproduces the matched text. (Achromatic triples are
    // excluded: zero saturation erases the hue on the way through RGB.)
    for text in ["120 50% 50%", "0 100% 50%", "240 100% 50%", "30 25% 75%"] {
        let colors = document_colors(text);
        assert_eq!(colors.len(), 1);
        assert_eq!(color_presentation(colors[0].color).label, text);
    }
}

#[test]
fn test_e2e_edited_color_produces_new_label() {
    let colors = document_colors("0 100% 50%");
    let picked = RgbColor::new(0.25, 0.75, 0.25);
    assert_eq!(color_presentation(picked).label, "120 50% 50%");
    assert_ne!(
        color_presentation(picked).label,
        color_presentation(colors[0].color).label
    );
}
