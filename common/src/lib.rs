//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有される型・ストア・CRUDサービス・カード描画

pub mod types;
pub mod error;
pub mod store;
pub mod remote;
pub mod mode;
pub mod service;
pub mod form;
pub mod render;
pub mod showcase;
pub mod demo;
pub mod theme;

pub use types::{ProjectCollection, ProjectRecord};
pub use error::{Result, StoreError};
pub use store::{KeyValueStore, LocalStore, MemoryKeyValue, ProjectStore, PROJECTS_KEY};
pub use remote::{
    DocumentRequest, DocumentResponse, DocumentTransport, Method, RemoteConfig, RemoteStore,
};
pub use mode::{ModeSwitch, StorageMode};
pub use service::{CrudService, LogStatus, Status, StatusKind, StatusLog, StatusSink, STATUS_CLEAR_MS};
pub use form::{Field, FormController, ProjectForm, UpdateSelection, DELETE_CONFIRM_PROMPT};
pub use render::{CardListState, CardModel, option_label, render_card_html, summary_line};
pub use showcase::{load_local_showcase, load_remote_showcase, Showcase, ShowcaseSource};
pub use demo::demo_projects;
pub use theme::Theme;
