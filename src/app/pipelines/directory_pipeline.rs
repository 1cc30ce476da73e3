use crate::core::directory::directory_from_employees;
use crate::core::extract::{extract_employees, parse_payload};
use crate::core::table::render_table_csv;
use crate::core::{ConfigProvider, Extraction, Pipeline, Storage, TransformResult};
use crate::utils::error::{DirectoryError, Result};
use std::path::Path;

pub const PRETTY_JSON_FILE_NAME: &str = "payload.pretty.json";

/// 讀取 JSON、產生電話目錄並寫出 `directory.md`（及選用的表格、JSON 預覽）
pub struct DirectoryPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> DirectoryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn output_file(&self, file_name: &str) -> String {
        Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }

    /// 表格檔名沿用目錄檔名，只換副檔名
    fn table_file_name(&self) -> String {
        let stem = Path::new(self.config.file_name())
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("directory");
        format!("{}.csv", stem)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DirectoryPipeline<S, C> {
    async fn extract(&self) -> Result<Extraction> {
        let input_path = self.config.input_path();
        tracing::info!("📥 Reading payload from: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        let text = String::from_utf8(bytes).map_err(|e| DirectoryError::MalformedInput {
            message: format!("input is not valid UTF-8: {}", e),
        })?;

        let payload = parse_payload(&text)?;
        let employees = extract_employees(&payload);

        tracing::info!("📊 Extracted {} employee records", employees.len());
        Ok(Extraction { payload, employees })
    }

    async fn transform(&self, extraction: Extraction) -> Result<TransformResult> {
        // JSON 預覽在判斷有無資料之前產生，空結果時也能檢查解析內容
        let pretty_json = if self.config.pretty_json_enabled() {
            Some(serde_json::to_string_pretty(&extraction.payload)?)
        } else {
            None
        };

        let outcome = directory_from_employees(&extraction.employees);
        if outcome.is_empty() {
            tracing::warn!("No employees found under `department_employees`");
        }
        let directory = outcome.into_directory();

        let table_csv = match &directory {
            Some(directory) if self.config.table_enabled() => {
                Some(render_table_csv(&directory.entries)?)
            }
            _ => None,
        };

        if let Some(directory) = &directory {
            tracing::info!("🔧 Rendered {} directory entries", directory.entries.len());
        }
        Ok(TransformResult {
            directory,
            table_csv,
            pretty_json,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let mut written = Vec::new();

        if let Some(directory) = &result.directory {
            let directory_path = self.output_file(self.config.file_name());
            self.storage
                .write_file(&directory_path, directory.as_bytes())
                .await?;
            tracing::debug!(
                "Wrote {} ({} bytes, {})",
                directory_path,
                directory.markdown.len(),
                directory.mime_type()
            );
            written.push(directory_path);
        }

        if let Some(table_csv) = &result.table_csv {
            let table_path = self.output_file(&self.table_file_name());
            self.storage
                .write_file(&table_path, table_csv.as_bytes())
                .await?;
            written.push(table_path);
        }

        if let Some(pretty_json) = &result.pretty_json {
            let json_path = self.output_file(PRETTY_JSON_FILE_NAME);
            self.storage
                .write_file(&json_path, pretty_json.as_bytes())
                .await?;
            written.push(json_path);
        }

        tracing::info!("💾 Saved {} file(s)", written.len());
        Ok(written)
    }
}
