//! Free-text roadmap parser.
//!
//! The generation service is asked for a `Day N: tasks` layout followed by
//! `Source:` lines, but nothing guarantees it complies. The parser is a
//! single pass over the lines with one piece of state, the index of the
//! day currently being filled. Anything it does not recognise is dropped.

use tracing::debug;

use crate::models::roadmap::{DayEntry, Roadmap};

const DAY_PREFIX: &str = "Day ";
const SOURCE_PREFIX: &str = "Source:";

/// Parse raw model output into an ordered day mapping.
///
/// Never fails: text with no `Day N:` heading yields an empty [`Roadmap`].
pub fn parse_roadmap(raw: &str) -> Roadmap {
    let mut roadmap = Roadmap::new();
    let mut current: Option<usize> = None;

    for (number, line) in raw.lines().enumerate() {
        let line = line.trim();

        if let Some((day, content)) = match_day_heading(line) {
            debug!(line = number + 1, day = %day, "day heading");
            current = Some(roadmap.insert(DayEntry::new(day, content)));
            continue;
        }

        let Some(entry) = current.and_then(|i| roadmap.entry_at_mut(i)) else {
            continue;
        };

        if line.starts_with(SOURCE_PREFIX) {
            let sources = split_sources(line);
            debug!(line = number + 1, day = %entry.day, count = sources.len(), "sources");
            entry.sources.extend(sources);
        } else if !line.is_empty() {
            entry.tasks.push('\n');
            entry.tasks.push_str(line);
        }
    }

    debug!(days = roadmap.len(), "parse finished");
    roadmap
}

/// Match `Day <digits>:<rest>` at the start of a trimmed line.
///
/// Returns the label (`"Day <digits>"`, digits kept verbatim) and the
/// trimmed remainder.
fn match_day_heading(line: &str) -> Option<(String, &str)> {
    let after = line.strip_prefix(DAY_PREFIX)?;
    let digits_end = after
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(after.len());
    if digits_end == 0 {
        return None;
    }
    let (digits, rest) = after.split_at(digits_end);
    let content = rest.strip_prefix(':')?;
    Some((format!("{DAY_PREFIX}{digits}"), content.trim()))
}

/// Everything after the first `Source:`, split on commas, trimmed, with
/// empty pieces dropped.
fn split_sources(line: &str) -> Vec<String> {
    line.split_once(SOURCE_PREFIX)
        .map(|(_, rest)| rest)
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
