//! Prompt construction for roadmap requests.

use roadmap_core::models::request::RoadmapRequest;

pub const SYSTEM_PROMPT: &str = "\
You are a study planner. Answer with plain text lines only: \
one `Day N:` line per day followed by its tasks, then a `Source:` line \
listing comma-separated references.";

/// Build the user prompt for a request.
///
/// The layout hint (`Day 1: Tasks`) is what the response parser keys on.
pub fn build_prompt(request: &RoadmapRequest) -> String {
    format!(
        "Give me a complete roadmap to learn {topic} in {days} days. \
         Assume user level: {level}. Format:\n Day 1: Tasks\n Day 2: ...\n\
         Also provide sources. No extra formatting.",
        topic = request.topic,
        days = request.duration_days,
        level = request.level,
    )
}
