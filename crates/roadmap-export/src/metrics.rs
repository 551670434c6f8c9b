//! Glyph advance widths for the built-in Helvetica faces.
//!
//! Widths are in 1/1000 em for the printable ASCII range (0x20..=0x7E),
//! taken from the standard Adobe font metrics. Latin-1 supplement glyphs
//! fall back to the width of a digit.

use crate::layout::TextStyle;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const PT_TO_MM: f32 = 25.4 / 72.0;

fn char_width(c: char, style: TextStyle) -> u16 {
    let table = match style {
        TextStyle::Regular => &HELVETICA,
        TextStyle::Bold => &HELVETICA_BOLD,
    };
    (c as usize)
        .checked_sub(0x20)
        .and_then(|i| table.get(i).copied())
        .unwrap_or(FALLBACK_WIDTH)
}

/// Rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, style: TextStyle, font_size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, style))).sum();
    units as f32 / 1000.0 * font_size_pt * PT_TO_MM
}
