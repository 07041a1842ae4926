//! Inline dashboard used when the lab template cannot be rendered.

use askama::{Html, MarkupDisplay};

use super::LabHomeTemplate;

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Python Advanced Problem Solving</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; max-width: 800px; margin: 0 auto; }
        h1 { color: #3776ab; }
        .card { background: #f5f9fc; padding: 15px; margin-bottom: 15px; border-radius: 5px; }
        .info-item { margin-bottom: 8px; }
        .label { font-weight: bold; color: #3776ab; }
        a { color: #3776ab; text-decoration: none; margin-right: 15px; }
        a:hover { text-decoration: underline; }
    </style>
</head>
<body>
    <h1>Python Advanced Problem Solving Environment</h1>

    <div class="card">
        <h2>Environment Information</h2>
        <div class="info-item"><span class="label">Python Version:</span> {python_version}</div>
        <div class="info-item"><span class="label">Platform:</span> {platform}</div>
        <div class="info-item"><span class="label">Hostname:</span> {hostname}</div>
        <div class="info-item"><span class="label">Current Time:</span> {current_time}</div>
        <div class="info-item"><span class="label">Environment:</span> {environment}</div>
    </div>

    <div class="card">
        <h2>Available Resources</h2>
        <p>
            <a href="/api/info">API Environment Info</a>
            <a href="/api/exercises">Python Exercises API</a>
            <a href="{notebook_url}">Jupyter Notebook</a>
        </p>
    </div>
</body>
</html>
"#;

/// Render the lab dashboard without the template engine.
///
/// Placeholders are substituted literally; the CSS braces in the page are
/// left alone.
pub fn render_lab_fallback(page: &LabHomeTemplate) -> String {
    let fields: [(&str, &str); 6] = [
        ("{python_version}", &page.python_version),
        ("{platform}", &page.platform),
        ("{hostname}", &page.hostname),
        ("{current_time}", &page.current_time),
        ("{environment}", &page.environment),
        ("{notebook_url}", &page.notebook_url),
    ];

    fields
        .iter()
        .fold(FALLBACK_HTML.to_string(), |html, (placeholder, value)| {
            html.replace(placeholder, &escape(value))
        })
}

fn escape(value: &str) -> String {
    MarkupDisplay::new_unsafe(value, Html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnvironmentSnapshot;

    fn page() -> LabHomeTemplate {
        LabHomeTemplate::new(
            EnvironmentSnapshot {
                python_version: "3.12.1".into(),
                platform: "Linux-x86_64".into(),
                hostname: "lab-02".into(),
                current_time: "2024-01-02 03:04:05".into(),
            },
            "staging",
            "http://notebooks:8888",
        )
    }

    #[test]
    fn test_fallback_substitutes_every_field() {
        let html = render_lab_fallback(&page());

        for value in ["3.12.1", "Linux-x86_64", "lab-02", "2024-01-02 03:04:05", "staging"] {
            assert!(html.contains(value), "missing {value}");
        }
        assert!(!html.contains("{python_version}"));
        assert!(!html.contains("{environment}"));
        assert!(html.contains("body { font-family"));
    }

    #[test]
    fn test_fallback_escapes_values() {
        let mut page = page();
        page.hostname = "<b>host</b>".into();

        let html = render_lab_fallback(&page);
        assert!(html.contains("&lt;b&gt;host"));
        assert!(!html.contains("<b>host"));
    }
}
