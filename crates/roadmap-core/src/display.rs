use crate::models::roadmap::Roadmap;

pub const EMPTY_ROADMAP_NOTICE: &str = "No roadmap data available.";

/// Render a parsed roadmap for the scrollable results view.
///
/// Each day starts with a blank line and a `"Day N: "` heading, followed by
/// its task lines and then its sources as indented bullets.
pub fn format_roadmap(roadmap: &Roadmap) -> String {
    if roadmap.is_empty() {
        return EMPTY_ROADMAP_NOTICE.to_string();
    }

    let mut out = String::new();
    for entry in roadmap {
        out.push('\n');
        out.push_str(&entry.day);
        out.push_str(": ");
        for task in entry.tasks.trim().split('\n') {
            out.push_str(task);
            out.push('\n');
        }
        for source in &entry.sources {
            out.push_str("  - ");
            out.push_str(source);
            out.push('\n');
        }
    }
    out
}
