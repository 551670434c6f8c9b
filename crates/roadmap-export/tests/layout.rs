use roadmap_export::layout::{
    TextStyle, layout_paragraphs, paginate, style_for, to_latin1, wrap_text,
};
use roadmap_export::styles::DocumentStyles;

#[test]
fn day_lines_are_bold_everything_else_regular() {
    let styles = DocumentStyles::default();
    let paragraphs = layout_paragraphs("Day 1: Setup\nInstall the toolchain\n\n   Days off: none", &styles);

    let kinds: Vec<TextStyle> = paragraphs.iter().map(|p| p.style).collect();
    assert_eq!(kinds, vec![TextStyle::Bold, TextStyle::Regular, TextStyle::Bold]);
    assert_eq!(paragraphs[0].lines, vec!["Day 1: Setup"]);
}

#[test]
fn heading_prefix_is_checked_after_trimming() {
    assert_eq!(style_for("Day 3"), TextStyle::Bold);
    assert_eq!(style_for("Source: Day one"), TextStyle::Regular);
}

#[test]
fn non_latin1_characters_are_dropped() {
    assert_eq!(to_latin1("Café 🚀 résumé → done"), "Café  résumé  done");

    let styles = DocumentStyles::default();
    let paragraphs = layout_paragraphs("🚀🚀\nDay 1: ✓ ok", &styles);
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(paragraphs[0].lines, vec!["Day 1: ok"]);
}

#[test]
fn long_lines_wrap_within_width() {
    let text = "word ".repeat(100);
    let lines = wrap_text(&text, TextStyle::Regular, 12.0, 190.0);

    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| !l.starts_with(' ') && !l.ends_with(' ')));
    assert_eq!(lines.join(" "), text.trim_end());
}

#[test]
fn overlong_word_is_broken_between_characters() {
    let word = "x".repeat(400);
    let lines = wrap_text(&word, TextStyle::Bold, 12.0, 50.0);

    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), word);
}

#[test]
fn paragraphs_flow_onto_new_pages() {
    let styles = DocumentStyles::default();
    let per_page = styles.lines_per_page();
    let raw: String = (1..=per_page + 3).map(|i| format!("line {i}\n")).collect();

    let pages = paginate(&layout_paragraphs(&raw, &styles), &styles);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].lines.len(), per_page);
    assert_eq!(pages[1].lines.len(), 3);
    assert_eq!(pages[1].lines[0].text, format!("line {}", per_page + 1));
    // Lines run top to bottom and restart at the top of each page.
    assert!(pages[0].lines[0].baseline_mm > pages[0].lines[1].baseline_mm);
    assert_eq!(pages[0].lines[0].baseline_mm, pages[1].lines[0].baseline_mm);
    assert!(pages[0].lines.iter().all(|l| l.baseline_mm > styles.bottom_margin_mm));
}

#[test]
fn empty_text_still_has_one_page() {
    let styles = DocumentStyles::default();
    let pages = paginate(&layout_paragraphs("  \n\n", &styles), &styles);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].lines.is_empty());
}
