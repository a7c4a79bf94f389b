//! ライト/ダークテーマ

/// テーマを保存するキー
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 保存値 → 環境設定（prefers-color-scheme）→ ライト の順で決める
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// トグルボタンの表示（現在のテーマ）
    pub fn button_label(&self) -> &'static str {
        match self {
            Theme::Light => "☀ Light mode",
            Theme::Dark => "🌙 Dark mode",
        }
    }
}
