use std::collections::{HashMap, HashSet};

use ammonia::Builder;

use crate::ast::{Block, Inline, ListKind, TocEntry};

/// Emits raw, un-sanitized HTML from a slice of blocks.
pub fn emit_html(blocks: &[Block]) -> String {
    // Deterministic formatting: 2-space indentation and LF newlines.
    let mut writer = HtmlWriter::new();
    for block in blocks {
        emit_block(&mut writer, block);
    }
    writer.finish()
}

/// Emits HTML from a slice of blocks and sanitizes it through an allow-list.
pub fn emit_html_sanitized(blocks: &[Block]) -> String {
    let raw_html = emit_html(blocks);

    let tags: HashSet<&'static str> = [
        "a", "div", "h1", "h2", "h3", "p", "span", "strong", "table", "tbody", "td", "th",
        "thead", "tr",
    ]
    .iter()
    .copied()
    .collect();

    let mut generic_attributes: HashSet<&'static str> = HashSet::new();
    generic_attributes.insert("class");
    generic_attributes.insert("id");

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());

    let mut generic_attribute_prefixes = HashSet::new();
    generic_attribute_prefixes.insert("data-");

    Builder::new()
        .tags(tags)
        .generic_attributes(generic_attributes)
        .tag_attributes(tag_attributes)
        .generic_attribute_prefixes(generic_attribute_prefixes)
        .clean(&raw_html)
        .to_string()
}

/// Renders the sidebar navigation fragment for a table of contents.
pub fn emit_toc_html(entries: &[TocEntry]) -> String {
    let mut writer = HtmlWriter::new();
    writer.line("<nav class=\"Reportmark-toc\" data-reportmark=\"toc\">");
    writer.indent += 1;
    for entry in entries {
        writer.line(&format!(
            "<a class=\"Reportmark-toc-link\" data-level=\"{}\" href=\"#{}\">{}</a>",
            entry.level,
            escape_attr(&entry.id),
            escape_html(&entry.text)
        ));
    }
    writer.indent -= 1;
    writer.line("</nav>");
    writer.finish()
}

struct HtmlWriter {
    out: String,
    indent: usize,
}

impl HtmlWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(mut self) -> String {
        if self.out.ends_with('\n') {
            self.out.pop();
        }
        self.out
    }
}

fn emit_block(writer: &mut HtmlWriter, block: &Block) {
    match block {
        Block::Heading { level, id, content } => {
            writer.line(&format!(
                "<h{} id=\"{}\">{}</h{}>",
                level,
                escape_attr(id),
                render_inlines(content),
                level
            ));
        }
        Block::Paragraph { content } => {
            writer.line(&format!("<p>{}</p>", render_inlines(content)));
        }
        Block::Table(table) => {
            // The wrapper carries the full-width hint a page-break-aware
            // exporter keys on.
            writer.line("<div class=\"Reportmark-table\" data-reportmark=\"table\">");
            writer.indent += 1;
            writer.line("<table>");
            writer.indent += 1;
            writer.line("<thead>");
            writer.indent += 1;
            writer.line("<tr>");
            writer.indent += 1;
            for cell in &table.header {
                writer.line(&format!("<th>{}</th>", render_inlines(cell)));
            }
            writer.indent -= 1;
            writer.line("</tr>");
            writer.indent -= 1;
            writer.line("</thead>");
            writer.line("<tbody>");
            writer.indent += 1;
            for row in &table.rows {
                writer.line("<tr>");
                writer.indent += 1;
                for cell in row {
                    writer.line(&format!("<td>{}</td>", render_inlines(cell)));
                }
                writer.indent -= 1;
                writer.line("</tr>");
            }
            writer.indent -= 1;
            writer.line("</tbody>");
            writer.indent -= 1;
            writer.line("</table>");
            writer.indent -= 1;
            writer.line("</div>");
        }
        Block::List(list) => {
            writer.line("<div class=\"Reportmark-list\" data-reportmark=\"list\">");
            writer.indent += 1;
            for (idx, item) in list.items.iter().enumerate() {
                writer.line(&format!(
                    "<div class=\"Reportmark-list-item\" data-indent=\"{}\">",
                    item.indent
                ));
                writer.indent += 1;
                let marker = match item.kind {
                    ListKind::Bullet => "•".to_string(),
                    // Renumbered from run position; the source numeral is
                    // ignored.
                    ListKind::Ordered => format!("{}.", idx + 1),
                };
                writer.line(&format!(
                    "<span class=\"Reportmark-list-marker\">{}</span>",
                    marker
                ));
                writer.line(&format!(
                    "<span class=\"Reportmark-list-text\">{}</span>",
                    render_inlines(&item.content)
                ));
                writer.indent -= 1;
                writer.line("</div>");
            }
            writer.indent -= 1;
            writer.line("</div>");
        }
    }
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Strong(text) => {
                out.push_str("<strong>");
                out.push_str(&escape_html(text));
                out.push_str("</strong>");
            }
            Inline::Link { text, target } => {
                out.push_str("<a class=\"Reportmark-anchor\" href=\"#");
                out.push_str(&escape_attr(target));
                out.push_str("\">");
                out.push_str(&escape_html(text));
                out.push_str("</a>");
            }
        }
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
