//! 静的HTMLページ出力

use portfolio_common::render::{escape_html, CARD_STYLE, EMPTY_LIST_MESSAGE};
use portfolio_common::{render_card_html, CardModel, ProjectCollection};

const PAGE_STYLE: &str = r#"
body { font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; padding: 2rem; background: #ffffff; }
h1 { font-size: 2rem; color: #0f172a; }
.project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 1.5rem; }
.empty { color: #64748b; text-align: center; padding: 2rem; }
"#;

/// カード一覧を1枚のHTMLページにする
pub fn render_page(title: &str, collection: &ProjectCollection) -> String {
    let body = if collection.is_empty() {
        format!(r#"<p class="empty">{}</p>"#, EMPTY_LIST_MESSAGE)
    } else {
        let cards: Vec<String> = collection
            .iter()
            .map(|record| render_card_html(&CardModel::from_record(record)))
            .collect();
        format!(r#"<section class="project-grid">{}</section>"#, cards.join("\n"))
    };

    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{PAGE_STYLE}{CARD_STYLE}</style>
</head>
<body>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::ProjectRecord;

    #[test]
    fn test_render_page_with_cards() {
        let collection = ProjectCollection::new(vec![
            ProjectRecord::titled("A", "2024-01"),
            ProjectRecord::titled("B", "2024-02"),
        ]);
        let html = render_page("My <Projects>", &collection);
        assert!(html.contains("<title>My &lt;Projects&gt;</title>"));
        assert_eq!(html.matches(r#"<article class="project-card">"#).count(), 2);
        assert!(html.contains(".project-card"));
    }

    #[test]
    fn test_render_empty_page() {
        let html = render_page("Projects", &ProjectCollection::default());
        assert!(html.contains(EMPTY_LIST_MESSAGE));
        assert!(!html.contains("<article"));
    }
}
