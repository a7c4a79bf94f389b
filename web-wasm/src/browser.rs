//! ブラウザAPIのアダプタ
//!
//! - BrowserStorage: `window.localStorage`上のキー・バリューストア
//! - FetchTransport: `fetch`によるドキュメントトランスポート

use portfolio_common::theme::THEME_KEY;
use portfolio_common::{
    DocumentRequest, DocumentResponse, DocumentTransport, KeyValueStore, Result, StoreError, Theme,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// JS例外をメッセージ文字列にする
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn unavailable(value: JsValue) -> StoreError {
    StoreError::StorageUnavailable(js_message(&value))
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::StorageUnavailable("window is not available".into()))?;
        window
            .local_storage()
            .map_err(unavailable)?
            .ok_or_else(|| StoreError::StorageUnavailable("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(unavailable)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(unavailable)
    }
}

/// `window.fetch`
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

impl DocumentTransport for FetchTransport {
    async fn send(&self, request: DocumentRequest) -> std::result::Result<DocumentResponse, String> {
        fetch(request).await.map_err(|e| js_message(&e))
    }
}

async fn fetch(request: DocumentRequest) -> std::result::Result<DocumentResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(request.method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &request.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let js_request = Request::new_with_str_and_init(&request.url, &opts)?;
    for (name, value) in &request.headers {
        js_request.headers().set(name, value)?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&js_request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok(DocumentResponse {
        status: resp.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// 起動時のテーマを決めて保存する
pub fn initial_theme() -> Theme {
    let stored = BrowserStorage.get(THEME_KEY).ok().flatten();
    let theme = Theme::initial(stored.as_deref(), prefers_dark());
    save_theme(theme);
    theme
}

pub fn save_theme(theme: Theme) {
    if let Err(e) = BrowserStorage.set(THEME_KEY, theme.as_str()) {
        tracing::warn!(error = %e, "failed to persist theme");
    }
}

/// `<html data-theme="...">`を切り替える
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            tracing::warn!(error = %js_message(&e), "failed to apply theme");
        }
    }
}

/// 削除確認ダイアログ
pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use portfolio_common::{LocalStore, ProjectRecord, ProjectStore};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_browser_storage_set_get_remove() {
        let storage = BrowserStorage;
        storage.set("portfolio-test", "value").expect("set failed");
        assert_eq!(storage.get("portfolio-test").unwrap().as_deref(), Some("value"));

        storage.remove("portfolio-test").expect("remove failed");
        assert_eq!(storage.get("portfolio-test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    async fn wasm_local_store_on_browser_storage() {
        let store = LocalStore::new(BrowserStorage);
        store.clear().expect("clear failed");

        assert!(store.load().await.unwrap().is_empty());
        let mut collection = store.load().await.unwrap();
        collection.push(ProjectRecord::titled("Browser", "2025-02"));
        store.save(&collection).await.unwrap();

        assert_eq!(store.peek().unwrap().unwrap().get(0).unwrap().title, "Browser");
        store.clear().expect("clear failed");
    }

    #[wasm_bindgen_test]
    fn wasm_js_message_from_error() {
        let error = js_sys::Error::new("boom");
        assert_eq!(js_message(&error.into()), "boom");
        assert_eq!(js_message(&JsValue::from_str("plain")), "plain");
    }
}
