//! 保存先モード（local / remote）の切り替え

use crate::error::Result;
use crate::store::ProjectStore;
use crate::types::ProjectCollection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    #[default]
    Local,
    Remote,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::Local => "local",
            StorageMode::Remote => "remote",
        }
    }
}

impl std::str::FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "l" => Ok(StorageMode::Local),
            "remote" | "r" => Ok(StorageMode::Remote),
            _ => Err(format!("Unknown storage mode: {}. Use local or remote", s)),
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 呼び出しごとに`mode()`を見て local / remote のどちらかに委譲するストア
///
/// 2つのコレクションは統合も同期もしない。切り替えると見える一覧が変わるだけ。
pub struct ModeSwitch<L, R, M> {
    local: L,
    remote: R,
    mode: M,
}

impl<L, R, M> ModeSwitch<L, R, M>
where
    L: ProjectStore,
    R: ProjectStore,
    M: Fn() -> StorageMode,
{
    pub fn new(local: L, remote: R, mode: M) -> Self {
        Self { local, remote, mode }
    }

    pub fn mode(&self) -> StorageMode {
        (self.mode)()
    }

    pub fn local(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }
}

impl<L, R, M> ProjectStore for ModeSwitch<L, R, M>
where
    L: ProjectStore,
    R: ProjectStore,
    M: Fn() -> StorageMode,
{
    fn location(&self) -> &'static str {
        match self.mode() {
            StorageMode::Local => self.local.location(),
            StorageMode::Remote => self.remote.location(),
        }
    }

    async fn load(&self) -> Result<ProjectCollection> {
        match self.mode() {
            StorageMode::Local => self.local.load().await,
            StorageMode::Remote => self.remote.load().await,
        }
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<()> {
        match self.mode() {
            StorageMode::Local => self.local.save(collection).await,
            StorageMode::Remote => self.remote.save(collection).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::tests::FakeServer;
    use crate::remote::{RemoteConfig, RemoteStore};
    use crate::store::{LocalStore, MemoryKeyValue};
    use crate::types::ProjectRecord;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("local".parse::<StorageMode>().unwrap(), StorageMode::Local);
        assert_eq!("Remote".parse::<StorageMode>().unwrap(), StorageMode::Remote);
        assert!("cloud".parse::<StorageMode>().is_err());
        assert_eq!(StorageMode::Remote.to_string(), "remote");
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&StorageMode::Remote).unwrap();
        assert_eq!(json, r#""remote""#);
    }

    #[test]
    fn test_switch_does_not_migrate() {
        let mode = Cell::new(StorageMode::Local);
        let switch = ModeSwitch::new(
            LocalStore::new(MemoryKeyValue::new()),
            RemoteStore::new(
                RemoteConfig::new("https://example.test/b/1", "secret"),
                FakeServer::with_document(r#"{"projects":[{"title":"Remote"}]}"#),
            ),
            || mode.get(),
        );

        let local = ProjectCollection::new(vec![ProjectRecord::titled("Local", "2024-01")]);
        block_on(switch.save(&local)).unwrap();
        assert_eq!(switch.location(), "local storage");

        mode.set(StorageMode::Remote);
        let remote = block_on(switch.load()).unwrap();
        assert_eq!(remote.get(0).unwrap().title, "Remote");
        assert_eq!(switch.location(), "the remote server");

        mode.set(StorageMode::Local);
        assert_eq!(block_on(switch.load()).unwrap(), local);
    }
}
