use crate::domain::model::{DirectoryEntry, RawEmployee};

/// 去除前後空白
pub fn normalize(value: &str) -> String {
    value.trim().to_string()
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a US phone number as `(DDD) DDD-DDDD`.
///
/// Ten digits are formatted directly; eleven digits with a leading `1` lose
/// the country code first. Anything else comes back as the trimmed input.
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return normalize(raw),
    };

    format!(
        "({}) {}-{}",
        &national[0..3],
        &national[3..6],
        &national[6..10]
    )
}

/// 沒有姓名的員工直接捨棄
pub fn to_entry(raw: &RawEmployee) -> Option<DirectoryEntry> {
    let name = normalize(&raw.contact_name);
    if name.is_empty() {
        return None;
    }

    let office_raw = normalize(&raw.office_number);
    let office_formatted = format_phone(&office_raw);

    Some(DirectoryEntry {
        name,
        position: normalize(&raw.employee_position),
        office_raw,
        office_formatted,
        email: normalize(&raw.email_address),
    })
}
