//! Human-readable summary renderer for configuration diffs.

use crate::diff::model::{ChangeKind, ChangeRecord};
use serde_json::Value;

/// Render a human-readable Markdown summary of a change list.
///
/// The summary is intended for review workflows and comparison displays.
/// It is informational only and does not affect the structured records.
pub fn render_human_summary(changes: &[ChangeRecord]) -> String {
    let mut out = String::new();

    out.push_str("## Config Diff\n\n");

    if changes.is_empty() {
        out.push_str("_No changes detected._\n");
        return out;
    }

    let added = changes.iter().filter(|c| c.kind == ChangeKind::Added).count();
    let removed = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Removed)
        .count();
    let changed = changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Changed)
        .count();

    out.push_str(&format!(
        "**Changes**: {} ({} added, {} removed, {} changed)\n\n",
        changes.len(),
        added,
        removed,
        changed
    ));

    for record in changes {
        match record.kind {
            ChangeKind::Added => {
                out.push_str(&format!(
                    "- **Added** `{}`: {}\n",
                    record.dotted_path(),
                    render_value(record.new_value.as_ref())
                ));
            }
            ChangeKind::Removed => {
                out.push_str(&format!(
                    "- **Removed** `{}`: {}\n",
                    record.dotted_path(),
                    render_value(record.old_value.as_ref())
                ));
            }
            ChangeKind::Changed => {
                out.push_str(&format!(
                    "- **Changed** `{}`: {} -> {}\n",
                    record.dotted_path(),
                    render_value(record.old_value.as_ref()),
                    render_value(record.new_value.as_ref())
                ));
            }
        }
    }

    out
}

/// Render a value compactly, truncated for display purposes.
fn render_value(value: Option<&Value>) -> String {
    let rendered = match value {
        Some(v) => serde_json::to_string(v).unwrap_or_default(),
        None => "null".to_string(),
    };
    if rendered.chars().count() > 60 {
        let head: String = rendered.chars().take(57).collect();
        format!("`{}…`", head)
    } else {
        format!("`{}`", rendered)
    }
}
