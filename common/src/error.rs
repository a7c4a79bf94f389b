//! エラー型定義

use thiserror::Error;

/// レコードストア・CRUD操作の共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// ローカルストレージが例外を投げた、または無効化されている
    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    /// ネットワーク障害または非2xxレスポンス
    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    /// 古い、または不正な位置インデックス
    #[error("Invalid project index {index} (collection has {len} projects)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Please select a project to update")]
    NoSelection,

    /// 選択後に一覧が変わり、その位置に別のレコードがある
    #[error("Project {index} has changed since it was selected. Please select it again")]
    SelectionChanged { index: usize },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_storage() {
        let error = StoreError::StorageUnavailable("quota exceeded".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Local storage unavailable"));
        assert!(display.contains("quota exceeded"));
    }

    #[test]
    fn test_error_display_remote() {
        let error = StoreError::RemoteUnavailable("HTTP error! status: 500".to_string());
        assert_eq!(
            error.to_string(),
            "Remote store unavailable: HTTP error! status: 500"
        );
    }

    #[test]
    fn test_error_display_index() {
        let error = StoreError::IndexOutOfRange { index: 5, len: 1 };
        let display = error.to_string();
        assert!(display.contains('5'));
        assert!(display.contains("1 projects"));
    }

    #[test]
    fn test_error_display_selection_and_field() {
        assert_eq!(
            StoreError::NoSelection.to_string(),
            "Please select a project to update"
        );
        assert_eq!(
            StoreError::MissingField("title").to_string(),
            "Missing required field: title"
        );
    }

    #[test]
    fn test_error_display_selection_changed() {
        let display = StoreError::SelectionChanged { index: 2 }.to_string();
        assert!(display.contains("Project 2 has changed"));
    }

    #[test]
    fn test_error_debug() {
        let error = StoreError::IndexOutOfRange { index: 3, len: 2 };
        let debug = format!("{:?}", error);
        assert!(debug.contains("IndexOutOfRange"));
    }
}
