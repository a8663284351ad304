//! Meeting-minutes post-processing: action items and document rendering.

/// Keywords that mark a sentence as an action item (matched case-insensitively).
const ACTION_KEYWORDS: [&str; 9] = [
    "action",
    "todo",
    "task",
    "follow-up",
    "deadline",
    "assign",
    "complete",
    "review",
    "finish",
];

/// Metadata header of a minutes document.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingMetadata {
    pub title: String,
    pub date: String,
    pub organizer: String,
    pub attendees: String,
}

/// Extract sentences that look like action items.
///
/// Sentences split on `.`, `!`, `?`; a sentence qualifies when it contains
/// any action keyword.
pub fn extract_action_items(transcript: &str) -> Vec<String> {
    transcript
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let lower = s.to_lowercase();
            ACTION_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(str::to_string)
        .collect()
}

/// Render the minutes document from metadata, transcript, and action items.
pub fn render_minutes(meta: &MeetingMetadata, transcript: &str, actions: &[String]) -> String {
    let action_lines = actions
        .iter()
        .map(|a| format!("- {a}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Meeting Title: {}\n\
         Date: {}\n\
         Organizer: {}\n\
         Attendees: {}\n\
         \n\
         --- Transcript ---\n\
         {}\n\
         \n\
         --- Action Items ---\n\
         {}\n",
        meta.title, meta.date, meta.organizer, meta.attendees, transcript, action_lines
    )
}
