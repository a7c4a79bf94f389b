//! プロジェクトレコードの型定義
//!
//! - ProjectRecord: ポートフォリオに表示する1件のプロジェクト
//! - ProjectCollection: `{"projects": [...]}` エンベロープ付きの順序付きリスト
//!
//! レコードに固有IDはなく、読み込み時点の位置インデックスだけが識別子になる。

use crate::error::{Result, StoreError};
use serde::{Deserialize, Deserializer, Serialize};

/// プロジェクトレコード
///
/// 欠けたキーと`null`は空文字列として読む。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,

    /// 狭い画面用の画像（`<source media="(max-width: 600px)">`）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_mobile: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub link: String,

    /// カンマ区切りのタグ（入力順・重複をそのまま保持）
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,

    /// 自由形式の日付ラベル
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ProjectRecord {
    /// タイトルと日付だけを持つレコード
    pub fn titled(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Default::default()
        }
    }
}

/// プロジェクト一覧（永続化エンベロープと同じ形）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectRecord>,
}

impl ProjectCollection {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    /// 末尾に追加
    pub fn push(&mut self, record: ProjectRecord) {
        self.projects.push(record);
    }

    /// 指定位置を置き換え。範囲外なら何も変更しない
    pub fn replace(&mut self, index: usize, record: ProjectRecord) -> Result<()> {
        self.check_index(index)?;
        self.projects[index] = record;
        Ok(())
    }

    /// 指定位置を削除し、後続を1つ前へ詰める。範囲外なら何も変更しない
    pub fn remove(&mut self, index: usize) -> Result<ProjectRecord> {
        self.check_index(index)?;
        Ok(self.projects.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.projects.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.projects.len(),
            })
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Vec<ProjectRecord>> for ProjectCollection {
    fn from(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }
}

impl<'a> IntoIterator for &'a ProjectCollection {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectCollection {
        ProjectCollection::new(vec![
            ProjectRecord::titled("A", "2024-01"),
            ProjectRecord::titled("B", "2024-02"),
            ProjectRecord::titled("C", "2024-03"),
        ])
    }

    #[test]
    fn test_record_deserialize_partial() {
        let json = r#"{"title": "Weather Dashboard", "tags": "JavaScript, API"}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Weather Dashboard");
        assert_eq!(record.tags, "JavaScript, API");
        assert_eq!(record.meta, "");
        assert!(record.image_mobile.is_none());
    }

    #[test]
    fn test_record_serialize_keys() {
        let record = ProjectRecord {
            image_mobile: Some("assets/small.jpg".to_string()),
            ..ProjectRecord::titled("A", "2024-01")
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["imageMobile"], "assets/small.jpg");
        assert_eq!(value["meta"], "");
        assert!(value.get("image_mobile").is_none());

        let value = serde_json::to_value(ProjectRecord::default()).unwrap();
        assert!(value.get("imageMobile").is_none());
    }

    #[test]
    fn test_collection_envelope() {
        let json = sample().to_json().unwrap();
        assert!(json.starts_with(r#"{"projects":["#));

        let empty: ProjectCollection = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_null_values_read_as_empty() {
        let json = r#"{"title": "Keep me", "meta": null, "image": null, "imageMobile": null}"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Keep me");
        assert_eq!(record.meta, "");
        assert_eq!(record.image, "");
        assert!(record.image_mobile.is_none());

        let collection: ProjectCollection = serde_json::from_str(r#"{"projects": null}"#).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        assert!(serde_json::from_str::<ProjectRecord>(r#"{"date": 2024}"#).is_err());
        assert!(serde_json::from_str::<ProjectCollection>(r#"{"projects": {}}"#).is_err());
    }

    #[test]
    fn test_collection_roundtrip() {
        let original = sample();
        let restored: ProjectCollection = serde_json::from_str(&original.to_json().unwrap()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_replace_in_range() {
        let mut collection = sample();
        collection
            .replace(1, ProjectRecord::titled("B2", "2024-02"))
            .unwrap();
        let titles: Vec<&str> = collection.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut collection = sample();
        let err = collection
            .replace(3, ProjectRecord::titled("X", ""))
            .unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(collection, sample());
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut collection = sample();
        let removed = collection.remove(0).unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(collection.get(0).unwrap().title, "B");
        assert_eq!(collection.get(1).unwrap().title, "C");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut collection = sample();
        assert!(matches!(
            collection.remove(10),
            Err(StoreError::IndexOutOfRange { index: 10, len: 3 })
        ));
        assert_eq!(collection.len(), 3);
    }
}
