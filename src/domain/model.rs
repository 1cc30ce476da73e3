use serde::{Deserialize, Serialize};

/// 部門區塊底下單一員工的原始欄位，缺少或 null 皆為空字串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployee {
    pub contact_name: String,
    pub employee_position: String,
    pub office_number: String,
    pub email_address: String,
}

/// One cleaned record of the phone directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub position: String,
    pub office_raw: String,
    pub office_formatted: String,
    pub email: String,
}

impl DirectoryEntry {
    /// Identity tuple used for deduplication.
    pub fn identity(&self) -> (&str, &str, &str, &str) {
        (&self.name, &self.position, &self.office_raw, &self.email)
    }
}

/// Rendered directory, ready for display or download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub entries: Vec<DirectoryEntry>,
    pub markdown: String,
}

impl Directory {
    pub const FILE_NAME: &'static str = "directory.md";
    pub const MIME_TYPE: &'static str = "text/markdown";

    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.markdown.as_bytes()
    }
}

/// Result of a pipeline run over a payload that parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryOutcome {
    Rendered(Directory),
    /// No usable entries were found; nothing should be rendered.
    Empty,
}

impl DirectoryOutcome {
    pub fn is_empty(&self) -> bool {
        matches!(self, DirectoryOutcome::Empty)
    }

    pub fn into_directory(self) -> Option<Directory> {
        match self {
            DirectoryOutcome::Rendered(directory) => Some(directory),
            DirectoryOutcome::Empty => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub payload: serde_json::Value,
    pub employees: Vec<RawEmployee>,
}

/// `directory` 為 `None` 表示沒有可用的員工資料；JSON 預覽仍可輸出
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub directory: Option<Directory>,
    pub table_csv: Option<String>,
    pub pretty_json: Option<String>,
}

/// 整個 ETL 流程的結果：寫出的檔案與目錄內容，或是沒有資料
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written { paths: Vec<String>, markdown: String },
    /// No directory was rendered; `paths` lists any side outputs still written.
    NoEntries { paths: Vec<String> },
}
