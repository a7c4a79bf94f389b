//! ショーケース読み込み（読み取り専用）
//!
//! 管理フォームとは別の表示専用フロー。リモートの読み込みに失敗したら
//! 同梱の`projects-data.json`にフォールバックする。

use crate::error::{Result, StoreError};
use crate::store::{KeyValueStore, LocalStore, ProjectStore};
use crate::types::ProjectCollection;

/// 同梱フォールバックJSONのパス
pub const FALLBACK_DOCUMENT: &str = "projects-data.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseSource {
    Local,
    Remote,
    Fallback,
}

impl ShowcaseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowcaseSource::Local => "local storage",
            ShowcaseSource::Remote => "remote API",
            ShowcaseSource::Fallback => "bundled file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    pub source: ShowcaseSource,
    pub projects: ProjectCollection,
}

/// ローカルデータを表示用に読む。未初期化なら初期化せずにエラー
pub fn load_local_showcase<K: KeyValueStore>(local: &LocalStore<K>) -> Result<Showcase> {
    let projects = local
        .peek()?
        .ok_or_else(|| StoreError::StorageUnavailable("no local data found".into()))?;
    tracing::info!(count = projects.len(), "projects loaded from local storage");
    Ok(Showcase {
        source: ShowcaseSource::Local,
        projects,
    })
}

/// リモートを読み、失敗したらフォールバックを読む
pub async fn load_remote_showcase<R, F>(remote: &R, fallback: &F) -> Result<Showcase>
where
    R: ProjectStore,
    F: ProjectStore,
{
    match remote.load().await {
        Ok(projects) => {
            tracing::info!(count = projects.len(), "projects loaded from remote API");
            Ok(Showcase {
                source: ShowcaseSource::Remote,
                projects,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "remote load failed, loading bundled file instead");
            let projects = fallback.load().await?;
            tracing::info!(count = projects.len(), "projects loaded from bundled file");
            Ok(Showcase {
                source: ShowcaseSource::Fallback,
                projects,
            })
        }
    }
}
