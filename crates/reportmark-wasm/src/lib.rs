use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use reportmark_core::DEFAULT_HEADER_OFFSET;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    sanitized: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsReportMeta {
    project_name: Option<String>,
    version: Option<String>,
    date: Option<String>,
    prepared_by: Option<String>,
    approved_by: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    html: String,
    toc: Vec<JsTocEntry>,
    check: JsExportCheck,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTocEntry {
    text: String,
    level: u8,
    id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsExportCheck {
    verified: bool,
    issues: Vec<String>,
    tables: usize,
    lists: usize,
    headings: usize,
}

#[wasm_bindgen]
pub fn render_report(source: &str) -> Result<JsValue, JsValue> {
    render_report_with_options(source, JsValue::UNDEFINED)
}

#[wasm_bindgen]
pub fn render_report_with_options(source: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let blocks = reportmark_core::parse(source);
    let toc = reportmark_core::build_toc(source);
    let check = reportmark_renderer::inspect(&blocks);

    let sanitized = options_from_js(options)?;
    let html = if sanitized {
        reportmark_core::emit_html_sanitized(&blocks)
    } else {
        reportmark_core::emit_html(&blocks)
    };

    let result = RenderResult {
        html,
        toc: toc
            .into_iter()
            .map(|entry| JsTocEntry {
                text: entry.text,
                level: entry.level,
                id: entry.id,
            })
            .collect(),
        check: JsExportCheck {
            verified: check.verified,
            issues: check.issues,
            tables: check.stats.tables,
            lists: check.stats.lists,
            headings: check.stats.headings,
        },
    };
    serde_wasm_bindgen::to_value(&result).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Anchor identifier for a heading text, identical to the one the renderer
/// assigns, so hosts can resolve navigation targets without re-parsing.
#[wasm_bindgen]
pub fn derive_slug(text: &str) -> String {
    reportmark_core::slugify(text)
}

/// Scroll position for a navigation target whose rendered element sits at
/// `element_top` relative to the document. Pass a negative `header_offset`
/// to use the default sticky-header compensation.
#[wasm_bindgen]
pub fn scroll_target(element_top: f64, header_offset: f64) -> f64 {
    let offset = if header_offset < 0.0 {
        DEFAULT_HEADER_OFFSET
    } else {
        header_offset
    };
    element_top - offset
}

#[wasm_bindgen]
pub fn word_export(source: &str, meta: JsValue) -> Result<String, JsValue> {
    let meta = meta_from_js(meta)?;
    let blocks = reportmark_core::parse(source);
    let body = reportmark_core::emit_html_sanitized(&blocks);
    Ok(reportmark_renderer::word_document(&meta, &body))
}

fn options_from_js(value: JsValue) -> Result<bool, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(false);
    }
    let parsed: RenderOptions =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(parsed.sanitized.unwrap_or(false))
}

fn meta_from_js(value: JsValue) -> Result<reportmark_renderer::ReportMeta, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(reportmark_renderer::ReportMeta::default());
    }
    let parsed: JsReportMeta =
        serde_wasm_bindgen::from_value(value).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(reportmark_renderer::ReportMeta {
        project_name: parsed.project_name.unwrap_or_default(),
        version: parsed.version.unwrap_or_default(),
        date: parsed.date.unwrap_or_default(),
        prepared_by: parsed.prepared_by.unwrap_or_default(),
        approved_by: parsed.approved_by.unwrap_or_default(),
    })
}
