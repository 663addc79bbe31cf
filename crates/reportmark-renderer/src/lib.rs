use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

mod meta;
mod print;
mod shell;
mod stats;
mod word;

pub use meta::{ReportMeta, export_file_name};
pub use print::print_stylesheet;
pub use shell::{cover_html, footer_html, report_shell};
pub use stats::{DocumentStats, ExportCheck, inspect};
pub use word::word_document;

const BASE_CSS: &str = include_str!("../assets/report.css");
const BASE_JS: &str = include_str!("../assets/report.js");

#[derive(Debug, Clone, Copy)]
pub enum Theme {
    Auto,
    Light,
    Dark,
}

/// Wraps rendered report fragments into a styled, self-contained page.
#[derive(Debug, Clone)]
pub struct Renderer {
    theme: Theme,
    custom_vars: BTreeMap<String, String>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            custom_vars: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }

    pub fn stylesheet(&self) -> String {
        let mut out = String::new();
        let (light_vars, dark_vars) = default_theme_vars();

        match self.theme {
            Theme::Auto => {
                out.push_str(&root_block(&light_vars, true));
                out.push_str("@media (prefers-color-scheme: dark) {\n");
                out.push_str(&indent_root_block(&dark_vars));
                out.push_str("}\n");
            }
            Theme::Light => {
                out.push_str(&root_block(&light_vars, true));
            }
            Theme::Dark => {
                out.push_str(&root_block(&dark_vars, true));
            }
        }

        if !self.custom_vars.is_empty() {
            out.push_str(&root_block(&self.custom_vars, false));
        }

        out.push_str(BASE_CSS);
        out
    }

    pub fn embed_html(&self, html: &str, with_inline_css: bool, with_inline_js: bool) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str("<html lang=\"en\">\n");
        out.push_str("<head>\n");
        out.push_str("  <meta charset=\"utf-8\" />\n");
        out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        if with_inline_css {
            out.push_str("  <style>\n");
            out.push_str(&self.stylesheet());
            out.push_str("\n  </style>\n");
        }
        out.push_str("</head>\n");
        out.push_str("<body>\n");
        out.push_str(html);
        if !html.ends_with('\n') {
            out.push('\n');
        }
        if with_inline_js {
            out.push_str("  <script>\n");
            out.push_str(BASE_JS);
            out.push_str("\n  </script>\n");
        }
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }

    pub fn generate_files(&self, out_dir: &Path) -> io::Result<()> {
        fs::create_dir_all(out_dir)?;
        fs::write(out_dir.join("report.css"), self.stylesheet())?;
        fs::write(out_dir.join("report.js"), BASE_JS)?;
        Ok(())
    }
}

fn default_theme_vars() -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let light = BTreeMap::from([
        ("--report-bg".to_string(), "#f8fafc".to_string()),
        ("--report-surface".to_string(), "#ffffff".to_string()),
        ("--report-fg".to_string(), "#1e293b".to_string()),
        ("--report-muted".to_string(), "#64748b".to_string()),
        ("--report-border".to_string(), "#e2e8f0".to_string()),
        ("--report-accent".to_string(), "#2563eb".to_string()),
        ("--report-table-head-bg".to_string(), "#f1f5f9".to_string()),
    ]);

    let dark = BTreeMap::from([
        ("--report-bg".to_string(), "#0f172a".to_string()),
        ("--report-surface".to_string(), "#1e293b".to_string()),
        ("--report-fg".to_string(), "#e2e8f0".to_string()),
        ("--report-muted".to_string(), "#94a3b8".to_string()),
        ("--report-border".to_string(), "#334155".to_string()),
        ("--report-accent".to_string(), "#60a5fa".to_string()),
        ("--report-table-head-bg".to_string(), "#1e293b".to_string()),
    ]);

    (light, dark)
}

fn format_vars(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str("  ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out
}

fn root_block(vars: &BTreeMap<String, String>, include_color_scheme: bool) -> String {
    let mut out = String::new();
    out.push_str(":root {\n");
    if include_color_scheme {
        out.push_str("  color-scheme: light dark;\n");
    }
    out.push_str(&format_vars(vars));
    out.push_str("}\n");
    out
}

fn indent_root_block(vars: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    out.push_str("  :root {\n");
    out.push_str("    color-scheme: light dark;\n");
    for (key, value) in vars {
        out.push_str("    ");
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str("  }\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{Renderer, Theme};

    #[test]
    fn embed_html_includes_css_and_js() {
        let renderer = Renderer::new(Theme::Light);
        let html = renderer.embed_html("<p>Hi</p>", true, true);
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        assert!(html.contains("<p>Hi</p>"));
    }

    #[test]
    fn embed_html_can_skip_assets() {
        let renderer = Renderer::new(Theme::Light);
        let html = renderer.embed_html("<p>Hi</p>", false, false);
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<p>Hi</p>"));
    }

    #[test]
    fn custom_vars_override_theme_defaults() {
        let renderer = Renderer::new(Theme::Light).with_var("--report-accent", "#ff0000");
        let css = renderer.stylesheet();
        assert!(css.contains("--report-accent: #ff0000;"));
    }
}
