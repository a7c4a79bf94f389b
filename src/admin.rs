//! CLIからのCRUD操作
//!
//! 各関数は結果をステータスとして表示し、成功したかどうかを返す。

use crate::cli::ProjectFields;
use crate::config::Config;
use crate::error::{AdminError, Result};
use crate::file_store::{BundledFile, FileKeyValue};
use crate::http::ReqwestTransport;
use crate::page::render_page;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use portfolio_common::render::EMPTY_LIST_MESSAGE;
use portfolio_common::{
    demo_projects, load_remote_showcase, option_label, summary_line, CrudService, FormController,
    LocalStore, ModeSwitch, ProjectCollection, ProjectForm, RemoteConfig, RemoteStore, Status,
    StatusKind, StatusSink, StorageMode, StoreError, DELETE_CONFIRM_PROMPT,
};
use std::future::Future;
use std::path::Path;
use std::time::Duration;

pub type AdminStore = ModeSwitch<
    LocalStore<FileKeyValue>,
    RemoteStore<ReqwestTransport>,
    Box<dyn Fn() -> StorageMode>,
>;

pub type AdminService = CrudService<AdminStore>;

/// ステータスを端末に出す
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn show(&self, status: Status) {
        match status.kind {
            StatusKind::Success => println!("✔ {}", status.message),
            StatusKind::Error => eprintln!("✖ {}", status.message),
        }
    }
}

pub fn local_store(config: &Config) -> Result<LocalStore<FileKeyValue>> {
    Ok(LocalStore::new(FileKeyValue::new(config.data_dir()?)))
}

/// リモート設定。local モードではURL未設定でもよい
fn remote_store(config: &Config, mode: StorageMode) -> Result<RemoteStore<ReqwestTransport>> {
    let remote_config = match config.remote_config() {
        Ok(remote_config) => remote_config,
        Err(AdminError::MissingRemoteUrl) if mode == StorageMode::Local => RemoteConfig::default(),
        Err(e) => return Err(e),
    };
    Ok(RemoteStore::new(remote_config, ReqwestTransport::new(config.timeout_seconds)?))
}

pub fn build_service(config: &Config, mode: StorageMode) -> Result<AdminService> {
    let store = ModeSwitch::new(
        local_store(config)?,
        remote_store(config, mode)?,
        Box::new(move || mode) as Box<dyn Fn() -> StorageMode>,
    );
    Ok(CrudService::new(store).with_status(ConsoleStatus))
}

/// 読み込み中はスピナーを表示する
pub async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let output = future.await;
    spinner.finish_and_clear();
    output
}

pub fn print_projects(collection: &ProjectCollection) {
    if collection.is_empty() {
        println!("{}", EMPTY_LIST_MESSAGE);
        return;
    }
    for (index, record) in collection.iter().enumerate() {
        println!("[{}] {}", index, option_label(record));
        println!("    {}", summary_line(record));
    }
}

pub async fn list(service: &AdminService) -> bool {
    let result = with_spinner("Loading projects...", service.try_list()).await;
    match result {
        Ok(collection) => {
            print_projects(&collection);
            true
        }
        Err(e) => {
            service.report_error(&e);
            print_projects(&ProjectCollection::default());
            false
        }
    }
}

pub async fn create(service: &AdminService, fields: &ProjectFields) -> bool {
    let mut form = ProjectForm::default();
    fields.apply_to(&mut form);
    if form.date.trim().is_empty() {
        form.date = chrono::Local::now().format("%Y-%m").to_string();
    }

    let controller = FormController::new(service);
    with_spinner("Saving...", controller.submit_create(&form)).await.is_ok()
}

pub async fn update(service: &AdminService, index: usize, fields: &ProjectFields) -> bool {
    let controller = FormController::new(service);

    let selected = match controller.select_for_update(&index.to_string()).await {
        Ok(selected) => selected,
        Err(_) => return false,
    };
    let Some((selection, mut form)) = selected else {
        let len = service.list().await.len();
        service.report_error(&StoreError::IndexOutOfRange { index, len });
        return false;
    };

    fields.apply_to(&mut form);
    with_spinner("Saving...", controller.submit_update(Some(&selection), &form))
        .await
        .is_ok()
}

pub async fn delete(service: &AdminService, index: usize, yes: bool) -> Result<bool> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt(DELETE_CONFIRM_PROMPT)
            .default(false)
            .interact()?;

    let controller = FormController::new(service);
    match controller.confirm_delete(index, || confirmed).await {
        Ok(true) => Ok(true),
        Ok(false) => {
            println!("キャンセルしました");
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

pub fn seed(local: &LocalStore<FileKeyValue>) -> Result<()> {
    if local.seed_if_absent(demo_projects())? {
        println!("✔ デモデータを書き込みました: {}", local.backend().dir().display());
    } else {
        println!("既にデータがあるため何もしません");
    }
    Ok(())
}

pub fn clear(local: &LocalStore<FileKeyValue>, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt("Delete all locally stored projects?")
            .default(false)
            .interact()?;
    if confirmed {
        local.clear()?;
        println!("✔ ローカルデータを削除しました");
    } else {
        println!("キャンセルしました");
    }
    Ok(())
}

pub async fn render(service: &AdminService, output: &Path, title: &str) -> Result<bool> {
    let collection = match with_spinner("Loading projects...", service.try_list()).await {
        Ok(collection) => collection,
        Err(e) => {
            service.report_error(&e);
            return Ok(false);
        }
    };

    std::fs::write(output, render_page(title, &collection))?;
    println!("✔ {}件のカードを出力: {}", collection.len(), output.display());
    Ok(true)
}

pub async fn showcase(config: &Config, fallback: &Path) -> Result<bool> {
    let remote = remote_store(config, StorageMode::Local)?;
    let fallback = BundledFile::new(fallback);

    match with_spinner("Loading projects...", load_remote_showcase(&remote, &fallback)).await {
        Ok(showcase) => {
            println!("({}から読み込み)", showcase.source.as_str());
            print_projects(&showcase.projects);
            Ok(true)
        }
        Err(e) => {
            eprintln!("✖ Unable to load data: {}", e);
            Ok(false)
        }
    }
}
