//! Line layout for PDF export.
//!
//! Raw roadmap text is laid out independently of the parser: every
//! non-blank line becomes one paragraph, bold when it starts with `Day`,
//! word-wrapped to the text width and flowed onto as many pages as needed.

use crate::metrics::text_width_mm;
use crate::styles::DocumentStyles;

const HEADING_PREFIX: &str = "Day";

/// Ratio of font size from the vertical centre of a line cell to its baseline.
const BASELINE_SHIFT: f32 = 0.3;

const PT_TO_MM: f32 = 25.4 / 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Regular,
    Bold,
}

/// One source line after sanitising and wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub style: TextStyle,
    pub lines: Vec<String>,
}

/// A wrapped line positioned on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    /// Left edge of the text, from the page's left edge.
    pub x_mm: f32,
    /// Baseline, measured up from the bottom edge (PDF user space).
    pub baseline_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Drop every character outside Latin-1 (U+0000..=U+00FF).
///
/// The built-in PDF fonts only cover a single-byte encoding, so anything
/// else is removed rather than transliterated.
pub fn to_latin1(text: &str) -> String {
    text.chars().filter(|c| u32::from(*c) <= 0xFF).collect()
}

/// Style for a trimmed source line.
pub fn style_for(line: &str) -> TextStyle {
    if line.starts_with(HEADING_PREFIX) {
        TextStyle::Bold
    } else {
        TextStyle::Regular
    }
}

/// Split raw text into styled, wrapped paragraphs.
///
/// Blank lines are skipped, as are lines with nothing left after
/// non-Latin-1 characters are dropped.
pub fn layout_paragraphs(raw: &str, styles: &DocumentStyles) -> Vec<Paragraph> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let style = style_for(line);
            let lines = wrap_text(
                &to_latin1(line),
                style,
                styles.font_size_pt,
                styles.text_width_mm(),
            );
            (!lines.is_empty()).then_some(Paragraph { style, lines })
        })
        .collect()
}

/// Greedy word wrap. Runs of whitespace collapse to one space; a word
/// wider than the line is broken between characters.
pub fn wrap_text(text: &str, style: TextStyle, font_size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let measure = |s: &str| text_width_mm(s, style, font_size_pt);
    let space = measure(" ");

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = measure(word);

        if !current.is_empty() && current_width + space + word_width <= max_width_mm {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        if word_width <= max_width_mm {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let mut buf = [0u8; 4];
            let glyph: &str = c.encode_utf8(&mut buf);
            let char_width = measure(glyph);
            if !current.is_empty() && current_width + char_width > max_width_mm {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Flow paragraphs onto pages, one line cell per wrapped line.
///
/// Always returns at least one page so an empty document is still valid.
pub fn paginate(paragraphs: &[Paragraph], styles: &DocumentStyles) -> Vec<Page> {
    let per_page = styles.lines_per_page();
    let baseline_offset =
        styles.line_height_mm / 2.0 + styles.font_size_pt * PT_TO_MM * BASELINE_SHIFT;

    let mut pages = vec![Page::default()];
    for paragraph in paragraphs {
        for text in &paragraph.lines {
            if pages.last().is_some_and(|p| p.lines.len() >= per_page) {
                pages.push(Page::default());
            }
            let Some(page) = pages.last_mut() else {
                continue;
            };
            let row = page.lines.len() as f32;
            let from_top = styles.margin_mm + row * styles.line_height_mm + baseline_offset;
            page.lines.push(PlacedLine {
                style: paragraph.style,
                text: text.clone(),
                x_mm: styles.margin_mm,
                baseline_mm: styles.page_height_mm - from_top,
            });
        }
    }
    pages
}
