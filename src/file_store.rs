//! ファイルベースのキー・バリューストア
//!
//! 1キー = データディレクトリ内の`<key>.json`1ファイル。
//! 書き込みは一時ファイル経由のリネームで、読み手には全体が一度に置き換わる。

use portfolio_common::remote::parse_document;
use portfolio_common::{KeyValueStore, ProjectCollection, ProjectStore, Result, StoreError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileKeyValue {
    dir: PathBuf,
}

impl FileKeyValue {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

fn unavailable(action: &str, path: &Path, e: std::io::Error) -> StoreError {
    StoreError::StorageUnavailable(format!("{} {}: {}", action, path.display(), e))
}

impl KeyValueStore for FileKeyValue {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(unavailable("failed to read", &path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| unavailable("failed to create", &self.dir, e))?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        std::fs::write(&tmp, value).map_err(|e| unavailable("failed to write", &tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| unavailable("failed to replace", &path, e))?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "key written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable("failed to remove", &path, e)),
        }
    }
}

/// 読み取り専用のJSONファイル（ショーケースのフォールバック）
#[derive(Debug, Clone)]
pub struct BundledFile {
    path: PathBuf,
}

impl BundledFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectStore for BundledFile {
    fn location(&self) -> &'static str {
        "the bundled file"
    }

    async fn load(&self) -> Result<ProjectCollection> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| unavailable("failed to read", &self.path, e))?;
        parse_document(&content)
    }

    async fn save(&self, _collection: &ProjectCollection) -> Result<()> {
        Err(StoreError::StorageUnavailable(format!(
            "{} is read-only",
            self.path.display()
        )))
    }
}
