use crate::meta::ReportMeta;

/// Cover page, rendered ahead of the document body in every export.
pub fn cover_html(meta: &ReportMeta) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"Reportmark-cover cover\">\n");
    out.push_str("  <p class=\"Reportmark-cover-badge\">Official Quality Assurance Document</p>\n");
    out.push_str(&format!(
        "  <h1>{}</h1>\n",
        escape_html(&meta.project_name)
    ));
    out.push_str("  <h2>SYSTEM TEST PLAN</h2>\n");
    out.push_str("  <table class=\"Reportmark-cover-grid\">\n");
    out.push_str(&cover_row("Release Version", &meta.version));
    out.push_str(&cover_row("Generation Date", &meta.date));
    out.push_str(&cover_row("Lead Architect", &meta.prepared_by));
    out.push_str("  </table>\n");
    out.push_str("</div>\n");
    out
}

/// Sign-off footer. An empty approver renders the pending placeholder rather
/// than an empty cell.
pub fn footer_html(meta: &ReportMeta) -> String {
    let approved = if meta.approved_by.trim().is_empty() {
        "Pending Signature"
    } else {
        meta.approved_by.as_str()
    };
    let mut out = String::new();
    out.push_str("<div class=\"Reportmark-footer footer\">\n");
    out.push_str(&format!(
        "  <p><span class=\"Reportmark-footer-label\">Authored By</span> {}</p>\n",
        escape_html(&meta.prepared_by)
    ));
    out.push_str(&format!(
        "  <p><span class=\"Reportmark-footer-label\">Authorized By</span> {}</p>\n",
        escape_html(approved)
    ));
    out.push_str("</div>\n");
    out
}

/// Full printable surface: cover, rendered body, sign-off footer.
pub fn report_shell(meta: &ReportMeta, body_html: &str) -> String {
    let mut out = cover_html(meta);
    out.push_str(body_html);
    if !body_html.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&footer_html(meta));
    out
}

fn cover_row(label: &str, value: &str) -> String {
    format!(
        "    <tr><td class=\"Reportmark-cover-label\">{}</td><td>{}</td></tr>\n",
        label,
        escape_html(value)
    )
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

#[cfg(test)]
mod tests {
    use super::{footer_html, report_shell};
    use crate::meta::ReportMeta;

    fn meta() -> ReportMeta {
        ReportMeta {
            project_name: "Billing <Core>".to_string(),
            version: "1.0.0".to_string(),
            date: "2025-11-02".to_string(),
            prepared_by: "R. Ortiz".to_string(),
            approved_by: String::new(),
        }
    }

    #[test]
    fn shell_orders_cover_body_footer() {
        let html = report_shell(&meta(), "<p>Body</p>");
        let cover = html.find("Reportmark-cover").expect("cover present");
        let body = html.find("<p>Body</p>").expect("body present");
        let footer = html.find("Reportmark-footer").expect("footer present");
        assert!(cover < body && body < footer);
        assert!(html.contains("Billing &lt;Core&gt;"));
    }

    #[test]
    fn missing_approver_falls_back_to_pending() {
        assert!(footer_html(&meta()).contains("Pending Signature"));
    }
}
