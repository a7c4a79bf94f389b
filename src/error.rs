use portfolio_common::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("リモートストアのURLが設定されていません。`portfolio-admin config --set-remote-url URL` で設定してください")]
    MissingRemoteUrl,

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, AdminError>;
