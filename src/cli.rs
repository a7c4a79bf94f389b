use clap::{Args, Parser, Subcommand};
use portfolio_common::{Field, ProjectForm, StorageMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(about = "ポートフォリオのプロジェクト管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 保存先 (local/remote)。未指定なら設定ファイルの値
    #[arg(short, long, global = true)]
    pub mode: Option<StorageMode>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロジェクト一覧を表示
    List,

    /// プロジェクトを追加
    Create {
        #[command(flatten)]
        fields: ProjectFields,
    },

    /// 指定位置のプロジェクトを更新（指定した項目だけ上書き）
    Update {
        /// 位置インデックス（list の番号）
        index: usize,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// 指定位置のプロジェクトを削除
    Delete {
        /// 位置インデックス（list の番号）
        index: usize,

        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// ローカルストアが空ならデモデータを書き込む
    Seed,

    /// ローカルストアのデータを消去
    Clear {
        /// 確認をスキップ
        #[arg(short, long)]
        yes: bool,
    },

    /// カード一覧をHTMLページとして出力
    Render {
        /// 出力HTMLファイル
        #[arg(short, long, default_value = "projects.html")]
        output: PathBuf,

        /// ページタイトル
        #[arg(short, long, default_value = "Projects")]
        title: String,
    },

    /// リモートから読み込み、失敗したら同梱JSONを表示（読み取り専用）
    Showcase {
        /// フォールバック用JSONファイル
        #[arg(short, long, default_value = "web-wasm/projects-data.json")]
        fallback: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// リモートストアのURLを設定
        #[arg(long)]
        set_remote_url: Option<String>,

        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定の保存先を設定 (local/remote)
        #[arg(long)]
        set_default_mode: Option<StorageMode>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// プロジェクトの入力項目
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,

    /// 画像のパスまたはURL
    #[arg(long)]
    pub image: Option<String>,

    /// 画像の代替テキスト
    #[arg(long)]
    pub alt: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub link: Option<String>,

    /// カンマ区切りのタグ
    #[arg(long)]
    pub tags: Option<String>,

    /// 日付ラベル（作成時の既定: 今月 YYYY-MM）
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub meta: Option<String>,
}

impl ProjectFields {
    fn value(&self, field: Field) -> Option<&String> {
        match field {
            Field::Title => self.title.as_ref(),
            Field::Image => self.image.as_ref(),
            Field::Alt => self.alt.as_ref(),
            Field::Description => self.description.as_ref(),
            Field::Link => self.link.as_ref(),
            Field::Tags => self.tags.as_ref(),
            Field::Date => self.date.as_ref(),
            Field::Meta => self.meta.as_ref(),
        }
    }

    /// 指定された項目だけフォームに上書きする
    pub fn apply_to(&self, form: &mut ProjectForm) {
        for field in Field::ALL {
            if let Some(value) = self.value(field) {
                form.set(field, value.clone());
            }
        }
    }
}
