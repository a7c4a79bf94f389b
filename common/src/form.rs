//! フォームコントローラ
//!
//! 入力欄の値をレコードに詰め替えてCRUDサービスを呼ぶ。
//! DOM構造は持たない（Webはleptosコンポーネント、CLIは引数から値を渡す）。

use crate::error::{Result, StoreError};
use crate::service::CrudService;
use crate::store::ProjectStore;
use crate::types::ProjectRecord;

/// 削除確認ダイアログの文言
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this project?";

/// フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Image,
    Alt,
    Description,
    Link,
    Tags,
    Date,
    Meta,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Image,
        Field::Alt,
        Field::Description,
        Field::Link,
        Field::Tags,
        Field::Date,
        Field::Meta,
    ];

    /// 入力要素の名前
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Image => "image",
            Field::Alt => "alt",
            Field::Description => "description",
            Field::Link => "link",
            Field::Tags => "tags",
            Field::Date => "date",
            Field::Meta => "meta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Image => "Image URL",
            Field::Alt => "Image alt text",
            Field::Description => "Description",
            Field::Link => "Link",
            Field::Tags => "Tags (comma-separated)",
            Field::Date => "Date",
            Field::Meta => "Meta",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Title | Field::Description)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Description)
    }
}

/// 入力欄の値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub image: String,
    pub alt: String,
    pub description: String,
    pub link: String,
    pub tags: String,
    pub date: String,
    pub meta: String,
}

impl ProjectForm {
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            image: record.image.clone(),
            alt: record.alt.clone(),
            description: record.description.clone(),
            link: record.link.clone(),
            tags: record.tags.clone(),
            date: record.date.clone(),
            meta: record.meta.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Image => &self.image,
            Field::Alt => &self.alt,
            Field::Description => &self.description,
            Field::Link => &self.link,
            Field::Tags => &self.tags,
            Field::Date => &self.date,
            Field::Meta => &self.meta,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Image => &mut self.image,
            Field::Alt => &mut self.alt,
            Field::Description => &mut self.description,
            Field::Link => &mut self.link,
            Field::Tags => &mut self.tags,
            Field::Date => &mut self.date,
            Field::Meta => &mut self.meta,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 必須項目の有無だけを確認してレコードに変換（値は入力のまま）
    pub fn to_record(&self) -> Result<ProjectRecord> {
        if let Some(field) = Field::ALL
            .iter()
            .find(|f| f.is_required() && self.get(**f).trim().is_empty())
        {
            return Err(StoreError::MissingField(field.name()));
        }

        Ok(ProjectRecord {
            title: self.title.clone(),
            image: self.image.clone(),
            alt: self.alt.clone(),
            image_mobile: None,
            description: self.description.clone(),
            link: self.link.clone(),
            tags: self.tags.clone(),
            date: self.date.clone(),
            meta: self.meta.clone(),
        })
    }
}

/// セレクタの値を位置インデックスに変換。空や数値以外は未選択
pub fn parse_selection(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

/// 更新対象として選んだ位置と、そのとき読み込んだレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSelection {
    pub index: usize,
    pub original: ProjectRecord,
}

/// フォーム操作をCRUDサービスへ渡す
pub struct FormController<'a, S> {
    service: &'a CrudService<S>,
}

impl<'a, S: ProjectStore> FormController<'a, S> {
    pub fn new(service: &'a CrudService<S>) -> Self {
        Self { service }
    }

    /// 作成フォーム送信。成功したら呼び出し側でフォームをリセットして再描画する
    pub async fn submit_create(&self, form: &ProjectForm) -> Result<()> {
        let record = self.checked(form)?;
        self.service.create(record).await
    }

    /// 更新セレクタの選択。現在の一覧を読み込み、選択位置のレコードでフォームを埋める
    ///
    /// 未選択・範囲外は`Ok(None)`。
    pub async fn select_for_update(
        &self,
        value: &str,
    ) -> Result<Option<(UpdateSelection, ProjectForm)>> {
        let Some(index) = parse_selection(value) else {
            return Ok(None);
        };
        let collection = self.service.try_list().await.inspect_err(|e| {
            self.service.report_error(e);
        })?;
        Ok(collection.get(index).map(|record| {
            let selection = UpdateSelection {
                index,
                original: record.clone(),
            };
            (selection, ProjectForm::from_record(record))
        }))
    }

    /// 更新フォーム送信。未選択ならストアに触れずに`NoSelection`
    ///
    /// 選択後に一覧が変わっていれば`SelectionChanged`で何も書き込まない。
    pub async fn submit_update(
        &self,
        selection: Option<&UpdateSelection>,
        form: &ProjectForm,
    ) -> Result<()> {
        let Some(selection) = selection else {
            let error = StoreError::NoSelection;
            self.service.report_error(&error);
            return Err(error);
        };
        let record = self.checked(form)?;
        self.service
            .update_if_unchanged(selection.index, &selection.original, record)
            .await
    }

    /// 確認が取れたときだけ削除する。削除したらtrue
    pub async fn confirm_delete<F>(&self, index: usize, confirm: F) -> Result<bool>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Ok(false);
        }
        self.service.delete(index).await.map(|_| true)
    }

    fn checked(&self, form: &ProjectForm) -> Result<ProjectRecord> {
        form.to_record().inspect_err(|e| self.service.report_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::StatusLog;
    use crate::store::{LocalStore, MemoryKeyValue};
    use crate::types::ProjectCollection;
    use futures::executor::block_on;

    fn filled(title: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: "desc".to_string(),
            tags: "Rust, Leptos".to_string(),
            date: "2024-12".to_string(),
            ..Default::default()
        }
    }

    fn service_with(titles: &[&str]) -> (CrudService<LocalStore<MemoryKeyValue>>, StatusLog) {
        let store = LocalStore::new(MemoryKeyValue::new());
        let projects = titles.iter().map(|t| filled(t).to_record().unwrap()).collect();
        block_on(store.save(&ProjectCollection::new(projects))).unwrap();
        let log = StatusLog::new();
        (CrudService::new(store).with_status(log.clone()), log)
    }

    #[test]
    fn test_field_roundtrip() {
        let mut form = ProjectForm::default();
        for field in Field::ALL {
            form.set(field, field.name());
        }
        for field in Field::ALL {
            assert_eq!(form.get(field), field.name());
        }
        form.reset();
        assert_eq!(form, ProjectForm::default());
    }

    #[test]
    fn test_to_record_requires_presence() {
        let form = ProjectForm {
            title: "  ".to_string(),
            description: "desc".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_record(), Err(StoreError::MissingField("title")));

        let form = ProjectForm {
            title: "A".to_string(),
            ..Default::default()
        };
        assert_eq!(form.to_record(), Err(StoreError::MissingField("description")));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("2"), Some(2));
        assert_eq!(parse_selection(""), None);
        assert_eq!(parse_selection("abc"), None);
        assert_eq!(parse_selection("-1"), None);
    }

    #[test]
    fn test_submit_create() {
        let (service, _) = service_with(&["A"]);
        let controller = FormController::new(&service);
        block_on(controller.submit_create(&filled("B"))).unwrap();
        assert_eq!(block_on(service.list()).get(1).unwrap().title, "B");
    }

    #[test]
    fn test_submit_create_missing_field() {
        let (service, log) = service_with(&[]);
        let controller = FormController::new(&service);
        let err = block_on(controller.submit_create(&ProjectForm::default())).unwrap_err();
        assert_eq!(err, StoreError::MissingField("title"));
        assert!(block_on(service.list()).is_empty());
        assert!(log.last().unwrap().is_error());
    }

    #[test]
    fn test_select_for_update_populates_form() {
        let (service, _) = service_with(&["A", "B"]);
        let controller = FormController::new(&service);

        let (selection, form) = block_on(controller.select_for_update("1")).unwrap().unwrap();
        assert_eq!(selection.index, 1);
        assert_eq!(selection.original.title, "B");
        assert_eq!(form.title, "B");
        assert_eq!(form.tags, "Rust, Leptos");

        assert!(block_on(controller.select_for_update("")).unwrap().is_none());
        assert!(block_on(controller.select_for_update("9")).unwrap().is_none());
    }

    #[test]
    fn test_submit_update_without_selection() {
        let store = LocalStore::new(MemoryKeyValue::disabled());
        let log = StatusLog::new();
        let service = CrudService::new(store).with_status(log.clone());
        let controller = FormController::new(&service);

        // ストアは無効だが、未選択エラーが先に返る
        let err = block_on(controller.submit_update(None, &filled("A"))).unwrap_err();
        assert_eq!(err, StoreError::NoSelection);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.last().unwrap().message, "Please select a project to update");
    }

    #[test]
    fn test_submit_update() {
        let (service, _) = service_with(&["A", "B"]);
        let controller = FormController::new(&service);
        let (selection, _) = block_on(controller.select_for_update("0")).unwrap().unwrap();
        block_on(controller.submit_update(Some(&selection), &filled("A2"))).unwrap();
        let titles: Vec<String> = block_on(service.list()).iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles, ["A2", "B"]);
    }

    #[test]
    fn test_submit_update_after_list_changed() {
        let (service, log) = service_with(&["A", "B", "C", "D"]);
        let controller = FormController::new(&service);
        let (selection, mut form) = block_on(controller.select_for_update("2")).unwrap().unwrap();

        // 選択中に先頭が削除され、位置2はDになる
        block_on(service.delete(0)).unwrap();
        form.title = "C edited".to_string();
        let err = block_on(controller.submit_update(Some(&selection), &form)).unwrap_err();
        assert_eq!(err, StoreError::SelectionChanged { index: 2 });

        let titles: Vec<String> = block_on(service.list()).iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles, ["B", "C", "D"]);
        assert!(log.last().unwrap().is_error());
    }

    #[test]
    fn test_confirm_delete() {
        let (service, _) = service_with(&["A", "B"]);
        let controller = FormController::new(&service);

        assert!(!block_on(controller.confirm_delete(0, || false)).unwrap());
        assert_eq!(block_on(service.list()).len(), 2);

        assert!(block_on(controller.confirm_delete(0, || true)).unwrap());
        let collection = block_on(service.list());
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0).unwrap().title, "B");
    }
}
