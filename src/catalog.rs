//! Curated Project Catalog
//!
//! Projects bundled with the site and the markup for their detail dialog.
//! Everything interpolated into markup goes through [`escape_html`].

use crate::models::{Project, ProjectDetails};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "tag-all",
        title: "Tag-All",
        description: "Desktop organizer that tags files, notes and todos in one tree.",
        image: "public/projects/tag-all.webp",
        tags: &["Rust", "Tauri", "Leptos", "SQLite"],
        url: "https://github.com/octocat/tag-all",
        featured: true,
        details: ProjectDetails {
            overview: "A local-first workspace where every file, memo and task can carry any number of hierarchical tags, with a three-column layout for browsing them.",
            features: &[
                "Drag-and-drop reordering of nested items",
                "Markdown memos with live preview",
                "Folder watching with content hashes",
                "Multiple workspaces per database",
            ],
            technologies: &["Rust", "Tauri 2", "Leptos 0.8", "rusqlite"],
            challenges: "Keeping the tree responsive with thousands of rows while every tag change has to be reflected in several panes at once.",
            impact: "Replaced three separate apps in a daily workflow and made old notes searchable again.",
            metrics: Some(&[("Startup", "< 300 ms"), ("Items", "10k+"), ("Binary", "9 MB")]),
        },
    },
    Project {
        id: "trail-log",
        title: "Trail Log",
        description: "GPS track analyzer that turns raw GPX files into elevation and pace reports.",
        image: "public/projects/trail-log.webp",
        tags: &["Rust", "CLI", "GPX"],
        url: "https://github.com/octocat/trail-log",
        featured: true,
        details: ProjectDetails {
            overview: "Parses GPX exports from common watches, smooths noisy elevation data and produces per-segment statistics.",
            features: &[
                "Streaming GPX parser",
                "Elevation smoothing with configurable window",
                "HTML and JSON reports",
            ],
            technologies: &["Rust", "quick-xml", "clap"],
            challenges: "Watches disagree on timestamps and elevation sources, so every track needs normalizing before segments can be compared.",
            impact: "Used by a local running club to plan race-day pacing.",
            metrics: None,
        },
    },
    Project {
        id: "pixel-forge",
        title: "Pixel Forge",
        description: "Browser-based sprite editor compiled to WebAssembly.",
        image: "public/projects/pixel-forge.webp",
        tags: &["WebAssembly", "Canvas", "Rust"],
        url: "https://github.com/octocat/pixel-forge",
        featured: true,
        details: ProjectDetails {
            overview: "A layered pixel-art editor that runs fully in the browser with undo history and palette management.",
            features: &[
                "Unlimited undo with compact diffs",
                "Layer blending modes",
                "Sprite sheet export",
            ],
            technologies: &["Rust", "wasm-bindgen", "Canvas 2D"],
            challenges: "Keeping undo history small enough for long sessions on low-memory devices.",
            impact: "Adopted for asset work in two game-jam entries.",
            metrics: Some(&[("Bundle", "180 KB"), ("Undo steps", "unlimited")]),
        },
    },
    Project {
        id: "dotfiles",
        title: "Dotfiles",
        description: "Personal shell and editor configuration.",
        image: "public/projects/dotfiles.webp",
        tags: &["Shell", "Nix"],
        url: "https://github.com/octocat/dotfiles",
        featured: false,
        details: ProjectDetails {
            overview: "Reproducible shell, editor and terminal setup.",
            features: &["One-command bootstrap"],
            technologies: &["Nix", "zsh"],
            challenges: "Sharing one config across Linux and macOS.",
            impact: "New machines are ready in minutes.",
            metrics: None,
        },
    },
];

/// Featured projects in declaration order
pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Escape `& < > " '` for insertion into HTML text or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn tag_list(class: &str, tags: &[&str]) -> String {
    let items: String = tags
        .iter()
        .map(|t| format!(r#"<span class="{}">{}</span>"#, class, escape_html(t)))
        .collect();
    format!(r#"<div class="{}-list">{}</div>"#, class, items)
}

fn section(heading: &str, body: &str) -> String {
    format!(r#"<section class="project-detail-section"><h3>{}</h3>{}</section>"#, heading, body)
}

/// Body markup of the project detail dialog
pub fn project_detail_markup(project: &Project) -> String {
    let details = &project.details;
    let mut html = String::new();

    html.push_str(&format!(
        r#"<img class="project-detail-image" src="{}" alt="{}" loading="lazy" decoding="async" />"#,
        escape_html(project.image),
        escape_html(project.title)
    ));
    html.push_str(&tag_list("project-tag", project.tags));
    html.push_str(&format!(
        r#"<p class="project-detail-description">{}</p>"#,
        escape_html(project.description)
    ));
    html.push_str(&section("Overview", &format!("<p>{}</p>", escape_html(details.overview))));

    let features: String = details
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect();
    html.push_str(&section("Key Features", &format!("<ul>{}</ul>", features)));
    html.push_str(&section("Technologies", &tag_list("tech-tag", details.technologies)));

    if let Some(metrics) = details.metrics.filter(|m| !m.is_empty()) {
        let cells: String = metrics
            .iter()
            .map(|(label, value)| {
                format!(
                    r#"<div class="metric"><span class="metric-value">{}</span><span class="metric-label">{}</span></div>"#,
                    escape_html(value),
                    escape_html(label)
                )
            })
            .collect();
        html.push_str(&section("Metrics", &format!(r#"<div class="metric-grid">{}</div>"#, cells)));
    }

    html.push_str(&section("Challenges", &format!("<p>{}</p>", escape_html(details.challenges))));
    html.push_str(&section("Impact", &format!("<p>{}</p>", escape_html(details.impact))));
    html.push_str(&format!(
        r#"<a class="project-detail-link" href="{}" target="_blank" rel="noopener noreferrer">View project</a>"#,
        escape_html(project.url)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find_project(id: &str) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    fn hostile_project() -> Project {
        Project {
            id: "x",
            title: "<script>alert(1)</script>",
            description: r#"say "hi" & 'bye'"#,
            image: r#"x.png" onerror="alert(1)"#,
            tags: &["<b>bold</b>"],
            url: r#"javascript:"><script>"#,
            featured: true,
            details: ProjectDetails {
                overview: "<img src=x>",
                features: &["<li>nested</li>"],
                technologies: &["C++ & <Rust>"],
                challenges: "<script>",
                impact: "\"quoted\"",
                metrics: Some(&[("<k>", "<v>")]),
            },
        }
    }

    #[test]
    fn test_escape_html_all_five() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape_html("plain text"), "plain text");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_detail_markup_is_inert() {
        let html = project_detail_markup(&hostile_project());
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<img src=x>"));
        assert!(!html.contains("<k>"));
        assert!(!html.contains(r#"onerror="alert"#));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("say &quot;hi&quot; &amp; &#39;bye&#39;"));
        assert!(html.contains("C++ &amp; &lt;Rust&gt;"));
    }

    #[test]
    fn test_detail_markup_sections() {
        let project = find_project("tag-all").unwrap();
        let html = project_detail_markup(project);
        for heading in ["Overview", "Key Features", "Technologies", "Metrics", "Challenges", "Impact"] {
            assert!(html.contains(&format!("<h3>{}</h3>", heading)), "missing {}", heading);
        }
        assert_eq!(html.matches("<li>").count(), project.details.features.len());
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_metrics_section_omitted_when_absent() {
        let project = find_project("trail-log").unwrap();
        assert!(!project_detail_markup(project).contains("Metrics"));
    }

    #[test]
    fn test_featured_keeps_declaration_order() {
        let ids: Vec<_> = featured_projects().map(|p| p.id).collect();
        assert_eq!(ids, vec!["tag-all", "trail-log", "pixel-forge"]);
    }

    #[test]
    fn test_project_ids_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
