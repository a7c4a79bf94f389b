//! カード描画
//!
//! レコード → `CardModel` → HTML の純粋な変換。
//! ブラウザ（Leptosコンポーネント）とCLI（静的HTMLページ）の両方から使う。

use crate::types::ProjectRecord;

/// 非同期読み込み中に並べるスケルトンの数
pub const SKELETON_COUNT: usize = 3;

/// 一覧が空のときの表示
pub const EMPTY_LIST_MESSAGE: &str = "No projects found. Create one above!";

pub const UNTITLED: &str = "Untitled Project";
pub const PLACEHOLDER_ALT: &str = "Project placeholder";
pub const LINK_LABEL: &str = "View on GitHub";
pub const IMAGE_WIDTH: u32 = 360;
pub const MOBILE_MEDIA: &str = "(max-width: 600px)";

/// 更新用セレクタのラベル: `タイトル (日付)`
pub fn option_label(record: &ProjectRecord) -> String {
    format!("{} ({})", record.title, record.date)
}

/// 削除リストの概要行: `タグ • 日付`
pub fn summary_line(record: &ProjectRecord) -> String {
    format!("{} • {}", record.tags, record.date)
}

/// カンマ区切りタグを分割（前後の空白を除去、空要素は捨てる、順序と重複は保持）
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub src: String,
    pub alt: String,
    pub mobile_src: Option<String>,
}

impl Picture {
    pub fn is_placeholder(&self) -> bool {
        self.src.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub label: String,
}

/// 1枚のカードの表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub title: String,
    pub picture: Picture,
    pub description: String,
    pub link: Option<CardLink>,
    pub tags: Vec<String>,
    pub date: Option<String>,
    pub meta: Option<String>,
}

impl CardModel {
    pub fn from_record(record: &ProjectRecord) -> Self {
        let title = match record.title.trim() {
            "" => UNTITLED.to_string(),
            title => title.to_string(),
        };

        let picture = if record.image.trim().is_empty() {
            Picture {
                src: String::new(),
                alt: PLACEHOLDER_ALT.to_string(),
                mobile_src: None,
            }
        } else {
            Picture {
                src: record.image.clone(),
                alt: record.alt.clone(),
                mobile_src: non_empty(record.image_mobile.as_deref().unwrap_or_default()),
            }
        };

        let link = non_empty(&record.link).map(|href| CardLink {
            href,
            label: LINK_LABEL.to_string(),
        });

        Self {
            title,
            picture,
            description: record.description.clone(),
            link,
            tags: split_tags(&record.tags),
            date: non_empty(&record.date),
            meta: non_empty(&record.meta),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 一覧表示の状態。更新のたびに全体を作り直す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardListState {
    Loading,
    Ready(Vec<CardModel>),
}

impl CardListState {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ProjectRecord>) -> Self {
        CardListState::Ready(records.into_iter().map(CardModel::from_record).collect())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CardListState::Loading)
    }
}

/// HTML特殊文字をエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn picture_html(picture: &Picture) -> String {
    let mut html = String::from("<picture>");
    if let Some(mobile) = &picture.mobile_src {
        html.push_str(&format!(
            r#"<source srcset="{}" media="{}">"#,
            escape_html(mobile),
            MOBILE_MEDIA
        ));
    }
    html.push_str(&format!(
        r#"<img src="{}" alt="{}" width="{}">"#,
        escape_html(&picture.src),
        escape_html(&picture.alt),
        IMAGE_WIDTH
    ));
    html.push_str("</picture>");
    html
}

/// カード1枚分の`<article>`
pub fn render_card_html(card: &CardModel) -> String {
    let mut html = String::from(r#"<article class="project-card">"#);

    if let Some(date) = &card.date {
        let date = escape_html(date);
        html.push_str(&format!(r#"<time datetime="{date}" class="date">{date}</time>"#));
    }
    html.push_str(&format!("<h2>{}</h2>", escape_html(&card.title)));
    html.push_str(&picture_html(&card.picture));

    if !card.tags.is_empty() {
        html.push_str(r#"<div class="tags">"#);
        for tag in &card.tags {
            html.push_str(&format!(r#"<span class="tag">{}</span>"#, escape_html(tag)));
        }
        html.push_str("</div>");
    }

    html.push_str(&format!("<p>{}</p>", escape_html(&card.description)));

    if let Some(link) = &card.link {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="cta-link">{}</a>"#,
            escape_html(&link.href),
            escape_html(&link.label)
        ));
    }
    if let Some(meta) = &card.meta {
        html.push_str(&format!(r#"<p class="meta">{}</p>"#, escape_html(meta)));
    }

    html.push_str("</article>");
    html
}

/// カードのスタイル
pub const CARD_STYLE: &str = r#"
.project-card {
  --card-bg: #f8fafc;
  --card-border: #e2e8f0;
  --card-accent: #0f172a;
  --card-text: #334155;
  --card-meta-text: #64748b;
  --tag-bg: #f1f5f9;
  --tag-text: #475569;
  display: flex;
  flex-direction: column;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 8px;
  padding: 1.5rem;
  transition: all 0.2s cubic-bezier(0.4, 0, 0.2, 1);
  overflow: hidden;
}
.project-card:hover { border-color: #cbd5e1; box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.03); }
.project-card h2 { font-size: 1.5rem; font-weight: 600; color: var(--card-accent); margin: 0 0 0.75rem 0; }
.project-card picture, .project-card img { display: block; width: 100%; margin: 1.25rem 0; border-radius: 6px; }
.project-card p { color: var(--card-text); line-height: 1.7; margin: 0.75rem 0; }
.project-card .meta { font-size: 0.875rem; color: var(--card-meta-text); font-style: italic; border-top: 1px solid var(--card-border); padding-top: 1rem; }
.project-card .date { display: inline-block; font-size: 0.8125rem; color: var(--card-meta-text); background: var(--tag-bg); padding: 0.25rem 0.625rem; border-radius: 4px; }
.project-card .tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
.project-card .tag { background: var(--tag-bg); color: var(--tag-text); padding: 0.375rem 0.75rem; border-radius: 4px; font-size: 0.8125rem; border: 1px solid var(--card-border); }
.project-card .cta-link { display: inline-block; margin-top: 1.25rem; padding: 0.5rem 1rem; background: var(--card-accent); color: white; text-decoration: none; border-radius: 4px; }
.skeleton-card { min-height: 320px; border-radius: 8px; background: linear-gradient(90deg, #f1f5f9 25%, #e2e8f0 50%, #f1f5f9 75%); background-size: 200% 100%; animation: skeleton 1.2s ease-in-out infinite; }
@keyframes skeleton { from { background-position: 200% 0; } to { background-position: -200% 0; } }
@media (max-width: 768px) { .project-card { padding: 1.25rem; } .project-card h2 { font-size: 1.25rem; } }
"#;
