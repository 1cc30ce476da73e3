use crate::core::extract::{extract_employees, parse_payload};
use crate::core::normalize::to_entry;
use crate::core::render::{dedupe, render_directory};
use crate::domain::model::{Directory, DirectoryEntry, DirectoryOutcome, RawEmployee};
use crate::utils::error::Result;
use serde_json::Value;

/// 清理並去重，維持輸入順序
pub fn to_entries(employees: &[RawEmployee]) -> Vec<DirectoryEntry> {
    let entries: Vec<DirectoryEntry> = employees.iter().filter_map(to_entry).collect();
    let named = entries.len();
    let deduped = dedupe(entries);

    tracing::debug!(
        "{} raw employees, {} named, {} after dedupe",
        employees.len(),
        named,
        deduped.len()
    );

    deduped
}

pub fn directory_from_employees(employees: &[RawEmployee]) -> DirectoryOutcome {
    let entries = to_entries(employees);
    if entries.is_empty() {
        return DirectoryOutcome::Empty;
    }

    let markdown = render_directory(&entries);
    DirectoryOutcome::Rendered(Directory { entries, markdown })
}

pub fn directory_from_payload(payload: &Value) -> DirectoryOutcome {
    directory_from_employees(&extract_employees(payload))
}

/// Runs the whole parse, normalize, dedupe and render pipeline over raw JSON text.
///
/// Invalid JSON is an error; a valid document without usable entries is
/// `DirectoryOutcome::Empty`.
pub fn build_directory(input: &str) -> Result<DirectoryOutcome> {
    let payload = parse_payload(input)?;
    Ok(directory_from_payload(&payload))
}
