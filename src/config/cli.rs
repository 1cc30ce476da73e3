use crate::core::Storage;
use crate::utils::error::Result;
use crate::utils::validation::STDIN_MARKER;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// 本機檔案系統；相對路徑以 `base_path` 為根，`-` 代表 stdin
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if path == STDIN_MARKER {
            let mut data = Vec::new();
            tokio::io::stdin().read_to_end(&mut data).await?;
            return Ok(data);
        }

        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}
