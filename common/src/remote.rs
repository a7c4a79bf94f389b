//! リモートJSONドキュメントストア
//!
//! 1つの共有ドキュメントを`GET`で読み、`PUT`で丸ごと上書きする。
//! HTTPクライアントは`DocumentTransport`として注入する（Web: fetch / CLI: reqwest）。

use crate::error::{Result, StoreError};
use crate::store::ProjectStore;
use crate::types::ProjectCollection;
use serde::Deserialize;
use serde_json::Value;

/// 認証ヘッダーの既定名（JSONBin互換）
pub const DEFAULT_KEY_HEADER: &str = "X-Master-Key";

/// リモートストアの接続設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub key_header: String,
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: Some(api_key.into()),
            key_header: DEFAULT_KEY_HEADER.to_string(),
        }
    }

    /// 認証なしで読むドキュメント（同梱のフォールバックJSONなど）
    pub fn public(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            key_header: DEFAULT_KEY_HEADER.to_string(),
        }
    }

    pub fn with_key_header(mut self, header: impl Into<String>) -> Self {
        self.key_header = header.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    fn headers(&self) -> Vec<(String, String)> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => vec![(self.key_header.clone(), key.to_string())],
            _ => Vec::new(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::public("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

/// トランスポートに渡すリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// JSON本文（PUTのみ）
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentResponse {
    pub status: u16,
    pub body: String,
}

impl DocumentResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTPリクエストを1回送るだけのトランスポート
///
/// `Err`はネットワーク障害など、レスポンスを受け取れなかった場合のみ。
#[allow(async_fn_in_trait)]
pub trait DocumentTransport {
    async fn send(&self, request: DocumentRequest) -> std::result::Result<DocumentResponse, String>;
}

/// 読み出し時の包みのキー（JSONBin v3）
const RECORD_KEY: &str = "record";

/// レスポンス本文からコレクションを取り出す
///
/// 正規形は`{"projects": [...]}`。JSONBin v3の読み出しは
/// `{"record": {"projects": [...]}}`で包むため、`record`キーがあれば中身だけを読む。
/// 中身が読めなければ外側を読み直さずにエラーにする。
pub fn parse_document(body: &str) -> Result<ProjectCollection> {
    let mut value: Value = serde_json::from_str(body).map_err(unexpected_body)?;
    let document = match value.as_object_mut().and_then(|object| object.remove(RECORD_KEY)) {
        Some(record) => record,
        None => value,
    };
    ProjectCollection::deserialize(document).map_err(unexpected_body)
}

fn unexpected_body(e: serde_json::Error) -> StoreError {
    StoreError::RemoteUnavailable(format!("unexpected response body: {}", e))
}

/// リモートドキュメント上のストア
#[derive(Debug, Clone)]
pub struct RemoteStore<T> {
    config: RemoteConfig,
    transport: T,
}

impl<T: DocumentTransport> RemoteStore<T> {
    pub fn new(config: RemoteConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn request(&self, method: Method, body: Option<String>) -> Result<DocumentResponse> {
        if !self.config.is_configured() {
            return Err(StoreError::RemoteUnavailable(
                "remote store URL is not configured".into(),
            ));
        }

        let mut headers = self.config.headers();
        if body.is_some() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }

        let request = DocumentRequest {
            method,
            url: self.config.url.clone(),
            headers,
            body,
        };

        let response = self
            .transport
            .send(request)
            .await
            .map_err(StoreError::RemoteUnavailable)?;

        if !response.is_success() {
            return Err(StoreError::RemoteUnavailable(format!(
                "HTTP error! status: {}",
                response.status
            )));
        }
        Ok(response)
    }
}

impl<T: DocumentTransport> ProjectStore for RemoteStore<T> {
    fn location(&self) -> &'static str {
        "the remote server"
    }

    async fn load(&self) -> Result<ProjectCollection> {
        let response = self.request(Method::Get, None).await?;
        let collection = parse_document(&response.body)?;
        tracing::debug!(url = %self.config.url, count = collection.len(), "remote document loaded");
        Ok(collection)
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<()> {
        let body = collection.to_json().map_err(|e| {
            StoreError::RemoteUnavailable(format!("failed to encode project data: {}", e))
        })?;
        self.request(Method::Put, Some(body)).await?;
        tracing::debug!(url = %self.config.url, count = collection.len(), "remote document replaced");
        Ok(())
    }
}
