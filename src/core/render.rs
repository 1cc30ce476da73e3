use crate::domain::model::DirectoryEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const DIRECTORY_HEADER: &str = "## Employee Phone Number Directory";

const INDENT: &str = "    ";

static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// 保留每個身分組合第一次出現的項目，維持原本順序
pub fn dedupe(entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    let mut seen: HashSet<(String, String, String, String)> = HashSet::new();
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        let (name, position, office_raw, email) = entry.identity();
        let key = (
            name.to_string(),
            position.to_string(),
            office_raw.to_string(),
            email.to_string(),
        );
        if seen.insert(key) {
            kept.push(entry);
        } else {
            tracing::debug!("Skipping duplicate entry for '{}'", entry.name);
        }
    }

    kept
}

/// Renders entries as the plain-text phone directory.
///
/// Each entry is an indented name followed by its non-empty position, office
/// and email lines, then a blank separator. Runs of blank lines are collapsed
/// and the block ends with exactly one newline.
pub fn render_directory(entries: &[DirectoryEntry]) -> String {
    let mut lines: Vec<String> = vec![DIRECTORY_HEADER.to_string(), String::new()];

    for entry in entries {
        lines.push(format!("{}{}", INDENT, entry.name));
        if !entry.position.is_empty() {
            lines.push(entry.position.clone());
        }
        if !entry.office_formatted.is_empty() {
            lines.push(format!("Office: {}", entry.office_formatted));
        }
        if !entry.email.is_empty() {
            lines.push(format!("Email: {}", entry.email));
        }
        lines.push(String::new());
    }

    let joined = lines.join("\n");
    let collapsed = EXCESS_NEWLINES.replace_all(&joined, "\n\n");
    format!("{}\n", collapsed.trim_end())
}
