//! CRUDサービス
//!
//! 各操作は「全件読み込み → メモリ上で変更 → 全件書き戻し」の1サイクル。
//! load と save の間に他の書き込みがあれば、その変更は後の save で消える。
//!
//! 結果はすべて`StatusSink`へ通知し、呼び出し元には`Result`で返す。

use crate::error::{Result, StoreError};
use crate::store::ProjectStore;
use crate::types::{ProjectCollection, ProjectRecord};

/// ステータス表示の自動クリアまでの時間（ミリ秒）
pub const STATUS_CLEAR_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// ユーザー向けの一時メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// ステータス表示先
pub trait StatusSink {
    fn show(&self, status: Status);
}

/// ログに出すだけの表示先
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn show(&self, status: Status) {
        match status.kind {
            StatusKind::Success => tracing::info!("{}", status.message),
            StatusKind::Error => tracing::warn!("{}", status.message),
        }
    }
}

/// 通知されたステータスを記録する表示先（複製しても同じ履歴を共有する）
#[derive(Debug, Default, Clone)]
pub struct StatusLog {
    entries: std::rc::Rc<std::cell::RefCell<Vec<Status>>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Status> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<Status> {
        self.entries.borrow().last().cloned()
    }
}

impl StatusSink for StatusLog {
    fn show(&self, status: Status) {
        self.entries.borrow_mut().push(status);
    }
}

/// アクティブなストアに対するCRUD操作
pub struct CrudService<S> {
    store: S,
    status: Box<dyn StatusSink>,
}

impl<S: ProjectStore> CrudService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: Box::new(LogStatus),
        }
    }

    pub fn with_status(mut self, sink: impl StatusSink + 'static) -> Self {
        self.status = Box::new(sink);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// エラーをステータスに表示する
    pub fn report_error(&self, error: &StoreError) {
        tracing::warn!(location = self.store.location(), "{}", error);
        self.status.show(Status::error(error.to_string()));
    }

    /// 全件取得（失敗はそのまま返す）
    pub async fn try_list(&self) -> Result<ProjectCollection> {
        self.store.load().await
    }

    /// 全件取得。失敗時はエラーを表示して空の一覧を返す
    pub async fn list(&self) -> ProjectCollection {
        match self.store.load().await {
            Ok(collection) => collection,
            Err(e) => {
                self.report_error(&e);
                ProjectCollection::default()
            }
        }
    }

    /// 末尾に追加
    pub async fn create(&self, record: ProjectRecord) -> Result<()> {
        let result = self
            .mutate(|collection| {
                collection.push(record);
                Ok(())
            })
            .await;
        self.finish(result, "created")
    }

    /// 指定位置を置き換え
    pub async fn update(&self, index: usize, record: ProjectRecord) -> Result<()> {
        let result = self
            .mutate(|collection| collection.replace(index, record))
            .await;
        self.finish(result, "updated")
    }

    /// 選択した時点のレコードがまだ指定位置にあるときだけ置き換える
    pub async fn update_if_unchanged(
        &self,
        index: usize,
        expected: &ProjectRecord,
        record: ProjectRecord,
    ) -> Result<()> {
        let result = self
            .mutate(|collection| match collection.get(index) {
                Some(current) if current != expected => Err(StoreError::SelectionChanged { index }),
                _ => collection.replace(index, record),
            })
            .await;
        self.finish(result, "updated")
    }

    /// 指定位置を削除（後続は1つ前へ詰まる）
    pub async fn delete(&self, index: usize) -> Result<()> {
        let result = self
            .mutate(|collection| collection.remove(index).map(|_| ()))
            .await;
        self.finish(result, "deleted")
    }

    /// 読み込みに失敗した場合は書き込まない
    async fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut ProjectCollection) -> Result<()>,
    {
        let mut collection = self.store.load().await?;
        change(&mut collection)?;
        self.store.save(&collection).await
    }

    fn finish(&self, result: Result<()>, verb: &str) -> Result<()> {
        match &result {
            Ok(()) => self.status.show(Status::success(format!(
                "Project {} successfully ({})",
                verb,
                self.store.location()
            ))),
            Err(e) => self.report_error(e),
        }
        result
    }
}
