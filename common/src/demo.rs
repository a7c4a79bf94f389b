//! デモ用の初期データ
//!
//! ローカルストアが空のときに書き込む3件。

use crate::types::ProjectRecord;

#[allow(clippy::too_many_arguments)]
fn project(
    title: &str,
    image: &str,
    alt: &str,
    description: &str,
    link: &str,
    tags: &str,
    date: &str,
    meta: &str,
) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        image: image.to_string(),
        alt: alt.to_string(),
        image_mobile: None,
        description: description.to_string(),
        link: link.to_string(),
        tags: tags.to_string(),
        date: date.to_string(),
        meta: meta.to_string(),
    }
}

pub fn demo_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            "Portfolio Website v3",
            "assets/linkedin.jpeg",
            "Modern portfolio website with responsive design",
            "Redesigned personal portfolio with a focus on accessibility and performance. \
             Custom components, dark mode, form validation and responsive grid layouts.",
            "https://github.com/yourusername/portfolio-v3",
            "HTML, CSS, Rust, WebAssembly",
            "2024-12",
            "Fully accessible, performance optimized, custom components",
        ),
        project(
            "Weather Dashboard",
            "assets/redis.jpg",
            "Real-time weather dashboard with forecast",
            "Interactive weather dashboard with current conditions, 7-day forecast, \
             location search and weather alerts. Responses are cached locally to reduce API calls.",
            "https://github.com/yourusername/weather-dashboard",
            "JavaScript, API, LocalStorage",
            "2024-10",
            "Real-time data, geolocation support, responsive design",
        ),
        project(
            "Code Snippet Manager",
            "assets/task-manager.jpg",
            "Code snippet manager with syntax highlighting",
            "Snippet management tool with syntax highlighting. Snippets can be saved, \
             categorized and searched by tag, with export/import for backup and sharing.",
            "https://github.com/yourusername/snippet-manager",
            "JavaScript, IndexedDB, Prism.js",
            "2024-08",
            "Offline-capable, syntax highlighting, tag-based search",
        ),
    ]
}
