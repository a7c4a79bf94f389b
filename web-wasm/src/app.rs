//! メインアプリケーションコンポーネント

use crate::browser::{BrowserStorage, FetchTransport};
use crate::components::{
    create_form::CreateForm, delete_list::DeleteList, header::Header, mode_selector::ModeSelector,
    project_grid::ProjectGrid, settings_panel::SettingsPanel, showcase::ShowcasePanel,
    status_message::StatusMessage, update_form::UpdateForm,
};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    demo_projects, render::CARD_STYLE, CardListState, CrudService, LocalStore, ModeSwitch,
    ProjectCollection, ProjectForm, RemoteConfig, RemoteStore, Status, StatusSink, StorageMode,
    UpdateSelection, STATUS_CLEAR_MS,
};

pub type WebStore =
    ModeSwitch<LocalStore<BrowserStorage>, RemoteStore<FetchTransport>, Box<dyn Fn() -> StorageMode>>;

pub type WebService = CrudService<WebStore>;

/// 画面全体で共有する状態
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub mode: RwSignal<StorageMode>,
    pub remote_url: RwSignal<String>,
    pub api_key: RwSignal<String>,
    /// 最後に読み込んだ一覧（更新セレクタ・削除リスト用）
    pub projects: RwSignal<ProjectCollection>,
    pub cards: RwSignal<CardListState>,
    /// 更新フォームの選択と入力値（一覧を読み直すたびに破棄する）
    pub update_selection: RwSignal<Option<UpdateSelection>>,
    pub update_form: RwSignal<ProjectForm>,
    pub status: RwSignal<Option<Status>>,
    status_generation: RwSignal<u32>,
    reload_generation: RwSignal<u32>,
}

impl AdminContext {
    fn new() -> Self {
        Self {
            mode: RwSignal::new(StorageMode::Local),
            remote_url: RwSignal::new(String::new()),
            api_key: RwSignal::new(String::new()),
            projects: RwSignal::new(ProjectCollection::default()),
            cards: RwSignal::new(CardListState::Loading),
            update_selection: RwSignal::new(None),
            update_form: RwSignal::new(ProjectForm::default()),
            status: RwSignal::new(None),
            status_generation: RwSignal::new(0),
            reload_generation: RwSignal::new(0),
        }
    }

    pub fn remote_config(&self) -> RemoteConfig {
        let url = self.remote_url.get_untracked();
        let key = self.api_key.get_untracked();
        if key.trim().is_empty() {
            RemoteConfig::public(url.trim())
        } else {
            RemoteConfig::new(url.trim(), key)
        }
    }

    /// 呼び出しごとに現在のモードを読むサービス
    pub fn service(&self) -> WebService {
        let mode = self.mode;
        let store = ModeSwitch::new(
            LocalStore::new(BrowserStorage),
            RemoteStore::new(self.remote_config(), FetchTransport),
            Box::new(move || mode.get_untracked()) as Box<dyn Fn() -> StorageMode>,
        );
        CrudService::new(store).with_status(SignalStatus { ctx: *self })
    }

    /// ステータスを表示し、一定時間後に消す（新しい表示があればそちらを残す）
    pub fn show_status(&self, status: Status) {
        self.status.set(Some(status));
        self.status_generation.update(|g| *g = g.wrapping_add(1));
        let generation = self.status_generation.get_untracked();

        let status_signal = self.status;
        let current = self.status_generation;
        Timeout::new(STATUS_CLEAR_MS, move || {
            if current.get_untracked() == generation {
                status_signal.set(None);
            }
        })
        .forget();
    }

    pub fn clear_update_selection(&self) {
        self.update_selection.set(None);
        self.update_form.set(ProjectForm::default());
    }

    /// アクティブなストアから読み直し、一覧を丸ごと置き換える
    ///
    /// 位置インデックスは読み直しで無効になるため、更新フォームの選択も破棄する。
    /// 後から始めた読み込みがあれば、先に始めた方の結果は捨てる。
    pub fn reload(&self) {
        let ctx = *self;
        ctx.reload_generation.update(|g| *g = g.wrapping_add(1));
        let generation = ctx.reload_generation.get_untracked();

        ctx.clear_update_selection();
        ctx.cards.set(CardListState::Loading);
        spawn_local(async move {
            let collection = ctx.service().list().await;
            if ctx.reload_generation.get_untracked() != generation {
                tracing::debug!("discarding superseded project list");
                return;
            }
            ctx.clear_update_selection();
            ctx.cards.set(CardListState::from_records(&collection));
            ctx.projects.set(collection);
        });
    }
}

/// ステータスを画面に出す表示先
struct SignalStatus {
    ctx: AdminContext,
}

impl StatusSink for SignalStatus {
    fn show(&self, status: Status) {
        if status.is_error() {
            tracing::warn!("{}", status.message);
        }
        self.ctx.show_status(status);
    }
}

pub fn use_admin() -> AdminContext {
    expect_context::<AdminContext>()
}

/// 初回起動時だけデモデータを書き込む
fn seed_demo_data() {
    if let Err(e) = LocalStore::new(BrowserStorage).seed_if_absent(demo_projects()) {
        tracing::warn!(error = %e, "failed to seed demo projects");
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let ctx = AdminContext::new();
    provide_context(ctx);

    seed_demo_data();
    ctx.reload();

    view! {
        <style>{CARD_STYLE}</style>
        <div class="container">
            <Header />
            <SettingsPanel />
            <ModeSelector />
            <StatusMessage />

            <section class="admin-forms">
                <CreateForm />
                <UpdateForm />
                <DeleteList />
            </section>

            <section class="projects">
                <h2>"Projects"</h2>
                <ProjectGrid cards=ctx.cards />
            </section>
            <ShowcasePanel />
        </div>
    }
}
