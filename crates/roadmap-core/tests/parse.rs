use roadmap_core::parse::parse_roadmap;

#[test]
fn text_without_day_headings_is_empty() {
    assert!(parse_roadmap("").is_empty());
    assert!(parse_roadmap("Here is your plan!\nGood luck.").is_empty());
    assert!(parse_roadmap("Day one: intro\nday 1: lowercase\nDay 1 no colon").is_empty());
}

#[test]
fn heading_with_sources() {
    let roadmap = parse_roadmap("Day 1: Learn basics\nSource: siteA, siteB");

    assert_eq!(roadmap.len(), 1);
    let day = roadmap.get("Day 1").unwrap();
    assert_eq!(day.tasks, "Learn basics");
    assert_eq!(day.sources, vec!["siteA", "siteB"]);
}

#[test]
fn continuation_lines_append_in_order() {
    let roadmap = parse_roadmap("Day 2: X\nmore text\n\n   even more   ");
    assert_eq!(roadmap.get("Day 2").unwrap().tasks, "X\nmore text\neven more");
}

#[test]
fn repeated_day_resets_entry_in_place() {
    let raw = "\
Day 1: first
Day 2: old plan
old continuation
Source: old.example
Day 3: third
Day 2: new plan";

    let roadmap = parse_roadmap(raw);
    let labels: Vec<&str> = roadmap.labels().collect();
    assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3"]);

    let day2 = roadmap.get("Day 2").unwrap();
    assert_eq!(day2.tasks, "new plan");
    assert!(day2.sources.is_empty());
}

#[test]
fn reparsing_is_idempotent() {
    let raw = "Intro\nDay 1: a\nSource: x\nDay 2: b\nc";
    assert_eq!(parse_roadmap(raw), parse_roadmap(raw));
}

#[test]
fn lines_before_first_day_are_dropped() {
    let raw = "Here is a roadmap\nSource: preamble.example\nDay 1: start";
    let roadmap = parse_roadmap(raw);

    assert_eq!(roadmap.len(), 1);
    let day = roadmap.get("Day 1").unwrap();
    assert_eq!(day.tasks, "start");
    assert!(day.sources.is_empty());
}

#[test]
fn sources_accumulate_and_drop_empty_pieces() {
    let raw = "Day 4: Ownership\nSource: The Book, , Rustlings,\nSource:   Rust by Example  ";
    let day = parse_roadmap(raw).get("Day 4").cloned().unwrap();

    assert_eq!(day.sources, vec!["The Book", "Rustlings", "Rust by Example"]);
    assert_eq!(day.tasks, "Ownership");
}

#[test]
fn empty_source_line_is_not_a_task() {
    let day = parse_roadmap("Day 1: a\nSource:").get("Day 1").cloned().unwrap();
    assert_eq!(day.tasks, "a");
    assert!(day.sources.is_empty());
}

#[test]
fn heading_without_content_still_separates_following_lines() {
    let raw = "Day 7:\nReview week one\nBuild a small CLI";
    let day = parse_roadmap(raw).get("Day 7").cloned().unwrap();
    assert_eq!(day.tasks, "\nReview week one\nBuild a small CLI");
}

#[test]
fn indented_and_crlf_lines_are_trimmed() {
    let raw = "  Day 10:  Traits  \r\n\t  generics\r\n  Source: docs.rs\r\n";
    let day = parse_roadmap(raw).get("Day 10").cloned().unwrap();
    assert_eq!(day.tasks, "Traits\ngenerics");
    assert_eq!(day.sources, vec!["docs.rs"]);
}

#[test]
fn day_label_keeps_digits_verbatim() {
    let roadmap = parse_roadmap("Day 01: zero padded\nDay 1: plain");
    let labels: Vec<&str> = roadmap.labels().collect();
    assert_eq!(labels, vec!["Day 01", "Day 1"]);
}

#[test]
fn colon_inside_task_text_is_kept() {
    let day = parse_roadmap("Day 3: Read chapter 4: Ownership").get("Day 3").cloned().unwrap();
    assert_eq!(day.tasks, "Read chapter 4: Ownership");
}
