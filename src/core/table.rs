use crate::domain::model::DirectoryEntry;
use crate::utils::error::{DirectoryError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Position")]
    position: &'a str,
    #[serde(rename = "Office")]
    office: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
}

/// 將目錄項目輸出為表格預覽 (CSV)，Office 欄使用格式化後的號碼
pub fn render_table_csv(entries: &[DirectoryEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if entries.is_empty() {
        writer.write_record(["Name", "Position", "Office", "Email"])?;
    }

    for entry in entries {
        writer.serialize(TableRow {
            name: &entry.name,
            position: &entry.position,
            office: &entry.office_formatted,
            email: &entry.email,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        DirectoryError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}
