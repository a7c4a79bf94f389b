//! レコードストア
//!
//! コレクション全体を読み込み、全体を書き戻すだけのストア。
//! 差分更新はなく、並行する書き込みは最後の書き込みが勝つ。

use crate::error::{Result, StoreError};
use crate::types::{ProjectCollection, ProjectRecord};
use std::cell::RefCell;
use std::collections::HashMap;

/// ローカルストアが使うキー
pub const PROJECTS_KEY: &str = "projectsData";

/// プロジェクト一覧の読み書き
///
/// ブラウザ上のFutureは`Send`にならないため、`Send`境界は付けない。
#[allow(async_fn_in_trait)]
pub trait ProjectStore {
    /// ステータスメッセージ用の保存先名（"local storage" など）
    fn location(&self) -> &'static str;

    async fn load(&self) -> Result<ProjectCollection>;

    async fn save(&self, collection: &ProjectCollection) -> Result<()>;
}

impl<S: ProjectStore> ProjectStore for &S {
    fn location(&self) -> &'static str {
        (**self).location()
    }

    async fn load(&self) -> Result<ProjectCollection> {
        (**self).load().await
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<()> {
        (**self).save(collection).await
    }
}

/// 同期アクセスのキー・バリューストア（localStorage相当）
///
/// 実装はすべての失敗を`StoreError::StorageUnavailable`で返す。
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// メモリ上のキー・バリューストア
#[derive(Debug, Default)]
pub struct MemoryKeyValue {
    entries: RefCell<HashMap<String, String>>,
    disabled: bool,
}

impl MemoryKeyValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作が失敗するストア（無効化されたストレージ）
    pub fn disabled() -> Self {
        Self {
            entries: RefCell::default(),
            disabled: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.disabled {
            Err(StoreError::StorageUnavailable("storage is disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryKeyValue {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// キー・バリューストア上の1キーにコレクションを保持するストア
#[derive(Debug, Default)]
pub struct LocalStore<K> {
    backend: K,
}

impl<K: KeyValueStore> LocalStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// 初期化せずに読み込む。キーが無ければ`None`
    pub fn peek(&self) -> Result<Option<ProjectCollection>> {
        match self.backend.get(PROJECTS_KEY)? {
            Some(text) => parse_stored(&text).map(Some),
            None => Ok(None),
        }
    }

    /// キーが無いときだけデモデータを書き込む。書き込んだらtrue
    pub fn seed_if_absent(&self, projects: Vec<ProjectRecord>) -> Result<bool> {
        if self.backend.get(PROJECTS_KEY)?.is_some() {
            return Ok(false);
        }
        let collection = ProjectCollection::new(projects);
        self.write(&collection)?;
        tracing::info!(count = collection.len(), "local store seeded with demo projects");
        Ok(true)
    }

    /// コレクションを破棄
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(PROJECTS_KEY)
    }

    fn read(&self) -> Result<ProjectCollection> {
        match self.peek()? {
            Some(collection) => Ok(collection),
            None => {
                let empty = ProjectCollection::default();
                self.write(&empty)?;
                tracing::debug!("local store initialized with an empty collection");
                Ok(empty)
            }
        }
    }

    fn write(&self, collection: &ProjectCollection) -> Result<()> {
        let json = collection.to_json().map_err(|e| {
            StoreError::StorageUnavailable(format!("failed to encode project data: {}", e))
        })?;
        self.backend.set(PROJECTS_KEY, &json)
    }
}

impl<K: KeyValueStore> ProjectStore for LocalStore<K> {
    fn location(&self) -> &'static str {
        "local storage"
    }

    async fn load(&self) -> Result<ProjectCollection> {
        self.read()
    }

    async fn save(&self, collection: &ProjectCollection) -> Result<()> {
        self.write(collection)?;
        tracing::debug!(count = collection.len(), "local store saved");
        Ok(())
    }
}

fn parse_stored(text: &str) -> Result<ProjectCollection> {
    serde_json::from_str(text)
        .map_err(|e| StoreError::StorageUnavailable(format!("stored project data is corrupt: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_first_load_initializes_empty() {
        let store = LocalStore::new(MemoryKeyValue::new());

        let first = block_on(store.load()).unwrap();
        assert!(first.is_empty());
        assert_eq!(
            store.backend().get(PROJECTS_KEY).unwrap().as_deref(),
            Some(r#"{"projects":[]}"#)
        );

        let second = block_on(store.load()).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_save_then_load() {
        let store = LocalStore::new(MemoryKeyValue::new());
        let collection = ProjectCollection::new(vec![ProjectRecord::titled("A", "2024-01")]);

        block_on(store.save(&collection)).unwrap();
        let loaded = block_on(store.load()).unwrap();
        assert_eq!(loaded, collection);

        // save(load())は内容を変えない
        block_on(store.save(&loaded)).unwrap();
        assert_eq!(block_on(store.load()).unwrap(), collection);
    }

    #[test]
    fn test_disabled_storage() {
        let store = LocalStore::new(MemoryKeyValue::disabled());
        assert!(matches!(
            block_on(store.load()),
            Err(StoreError::StorageUnavailable(_))
        ));
        assert!(matches!(
            block_on(store.save(&ProjectCollection::default())),
            Err(StoreError::StorageUnavailable(_))
        ));
    }

    #[test]
    fn test_corrupt_data() {
        let backend = MemoryKeyValue::new();
        backend.set(PROJECTS_KEY, "{ invalid json }").unwrap();
        let store = LocalStore::new(backend);

        let err = block_on(store.load()).unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
        // 壊れたデータは上書きしない
        assert_eq!(
            store.backend().get(PROJECTS_KEY).unwrap().as_deref(),
            Some("{ invalid json }")
        );
    }

    #[test]
    fn test_null_projects_read_as_empty() {
        let backend = MemoryKeyValue::new();
        backend.set(PROJECTS_KEY, r#"{"projects":null}"#).unwrap();
        let store = LocalStore::new(backend);

        assert!(block_on(store.load()).unwrap().is_empty());
    }

    #[test]
    fn test_seed_if_absent() {
        let store = LocalStore::new(MemoryKeyValue::new());
        assert!(store.peek().unwrap().is_none());

        let seeded = store
            .seed_if_absent(vec![ProjectRecord::titled("Demo", "2024-12")])
            .unwrap();
        assert!(seeded);
        assert_eq!(store.peek().unwrap().unwrap().len(), 1);

        // 既存データは上書きしない
        let seeded = store.seed_if_absent(vec![]).unwrap();
        assert!(!seeded);
        assert_eq!(store.peek().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let store = LocalStore::new(MemoryKeyValue::new());
        block_on(store.save(&ProjectCollection::new(vec![ProjectRecord::titled("A", "")]))).unwrap();
        store.clear().unwrap();
        assert!(store.peek().unwrap().is_none());
    }
}
