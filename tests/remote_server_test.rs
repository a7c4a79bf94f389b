//! リモートストアテスト
//!
//! JSONBin互換のローカルサーバーを立て、reqwestトランスポート経由で検証

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use portfolio_admin::file_store::BundledFile;
use portfolio_admin::http::ReqwestTransport;
use portfolio_common::{
    load_remote_showcase, CrudService, ProjectRecord, ProjectStore, RemoteConfig, RemoteStore,
    ShowcaseSource, StatusLog, StoreError,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

const MASTER_KEY: &str = "test-master-key";

#[derive(Clone)]
struct Bin {
    record: Arc<Mutex<Value>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("X-Master-Key")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == MASTER_KEY)
        .unwrap_or(false)
}

/// 読み出しは`record`で包んで返す
async fn read_bin(State(bin): State<Bin>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let record = bin.record.lock().unwrap().clone();
    Json(json!({ "record": record, "metadata": { "private": true } })).into_response()
}

async fn update_bin(State(bin): State<Bin>, headers: HeaderMap, body: String) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let Ok(value) = serde_json::from_str::<Value>(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    *bin.record.lock().unwrap() = value.clone();
    Json(json!({ "record": value })).into_response()
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// サーバーを起動してベースURLを返す
async fn spawn_server(initial: Value) -> (String, Bin) {
    let bin = Bin {
        record: Arc::new(Mutex::new(initial)),
    };
    let app = Router::new()
        .route("/b/projects", get(read_bin).put(update_bin))
        .route("/broken", get(broken).put(broken))
        .with_state(bin.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), bin)
}

fn remote(url: String, key: &str) -> RemoteStore<ReqwestTransport> {
    RemoteStore::new(RemoteConfig::new(url, key), ReqwestTransport::new(5).unwrap())
}

fn record(title: &str) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        description: "served".to_string(),
        date: "2025-01".to_string(),
        ..Default::default()
    }
}

/// ラップされたドキュメントを読み、作成・削除で丸ごと置き換える
#[tokio::test]
async fn test_remote_crud() {
    let (base, bin) = spawn_server(json!({ "projects": [{ "title": "Seed", "date": "2024-01" }] })).await;
    let log = StatusLog::new();
    let service =
        CrudService::new(remote(format!("{}/b/projects", base), MASTER_KEY)).with_status(log.clone());

    let collection = service.list().await;
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(0).unwrap().title, "Seed");

    service.create(record("New")).await.expect("作成失敗");
    assert_eq!(
        log.last().unwrap().message,
        "Project created successfully (the remote server)"
    );

    let stored = bin.record.lock().unwrap().clone();
    assert_eq!(stored["projects"][1]["title"], "New");
    // PUTは包まずに送る
    assert!(stored.get("record").is_none());

    service.delete(0).await.expect("削除失敗");
    let titles: Vec<String> = service.list().await.iter().map(|r| r.title.clone()).collect();
    assert_eq!(titles, ["New"]);
}

/// 包みの中身が読めないときは空として扱わず、書き込みもしない
#[tokio::test]
async fn test_malformed_record_is_left_untouched() {
    let document = json!({ "projects": [{ "title": "Keep me", "meta": null }, { "title": "And me", "date": 2024 }] });
    let (base, bin) = spawn_server(document.clone()).await;
    let service = CrudService::new(remote(format!("{}/b/projects", base), MASTER_KEY))
        .with_status(StatusLog::new());

    assert!(matches!(
        service.try_list().await,
        Err(StoreError::RemoteUnavailable(_))
    ));
    assert!(service.create(record("New")).await.is_err());
    assert_eq!(*bin.record.lock().unwrap(), document);
}

/// 認証キーが違えばHTTPエラー
#[tokio::test]
async fn test_wrong_key_is_rejected() {
    let (base, bin) = spawn_server(json!({ "projects": [] })).await;
    let store = remote(format!("{}/b/projects", base), "wrong");

    let err = store.load().await.unwrap_err();
    assert_eq!(
        err,
        StoreError::RemoteUnavailable("HTTP error! status: 401".into())
    );

    // 読み込めないので書き込みも行われない
    let service = CrudService::new(store).with_status(StatusLog::new());
    assert!(service.create(record("X")).await.is_err());
    assert_eq!(*bin.record.lock().unwrap(), json!({ "projects": [] }));
}

/// サーバーエラーのときは空の一覧とエラー表示
#[tokio::test]
async fn test_server_error_lists_empty() {
    let (base, _) = spawn_server(json!({ "projects": [] })).await;
    let log = StatusLog::new();
    let service =
        CrudService::new(remote(format!("{}/broken", base), MASTER_KEY)).with_status(log.clone());

    assert!(service.list().await.is_empty());
    let status = log.last().unwrap();
    assert!(status.is_error());
    assert!(status.message.contains("status: 500"));
}

/// 接続できないサーバー
#[tokio::test]
async fn test_unreachable_server() {
    let store = remote("http://127.0.0.1:9/b/projects".to_string(), MASTER_KEY);
    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StoreError::RemoteUnavailable(_)));
}

/// リモートが失敗したら同梱JSONを表示する
#[tokio::test]
async fn test_showcase_falls_back_to_bundled_file() {
    let (base, _) = spawn_server(json!({ "projects": [] })).await;
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects-data.json");
    std::fs::write(&path, r#"{"projects":[{"title":"Bundled"}]}"#).unwrap();
    let fallback = BundledFile::new(&path);

    let showcase = load_remote_showcase(&remote(format!("{}/broken", base), MASTER_KEY), &fallback)
        .await
        .unwrap();
    assert_eq!(showcase.source, ShowcaseSource::Fallback);
    assert_eq!(showcase.projects.get(0).unwrap().title, "Bundled");

    let showcase =
        load_remote_showcase(&remote(format!("{}/b/projects", base), MASTER_KEY), &fallback)
            .await
            .unwrap();
    assert_eq!(showcase.source, ShowcaseSource::Remote);
    assert!(showcase.projects.is_empty());
}
