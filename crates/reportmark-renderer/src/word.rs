use crate::meta::ReportMeta;
use crate::shell::report_shell;

const WORD_CSS: &str = include_str!("../assets/word.css");

/// Builds the Word-compatible HTML envelope around a rendered body.
///
/// Word accepts an HTML file carrying the legacy Office namespaces and
/// point-unit styles; the caller saves it with a `.doc` extension and a UTF-8
/// BOM so older Word builds pick the right encoding.
pub fn word_document(meta: &ReportMeta, body_html: &str) -> String {
    let mut out = String::new();
    out.push_str(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\n",
    );
    out.push_str("<head><meta charset='utf-8'><title>Test Plan Document</title>\n");
    out.push_str("<style>\n");
    out.push_str(WORD_CSS);
    out.push_str("</style>\n");
    out.push_str("</head><body>\n");
    out.push_str(&report_shell(meta, body_html));
    out.push_str("</body></html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::word_document;
    use crate::meta::ReportMeta;

    #[test]
    fn envelope_carries_office_namespaces_and_styles() {
        let meta = ReportMeta {
            project_name: "Gateway".to_string(),
            version: "0.9".to_string(),
            ..ReportMeta::default()
        };
        let doc = word_document(&meta, "<p>Body</p>");
        assert!(doc.contains("urn:schemas-microsoft-com:office:word"));
        assert!(doc.contains("@page"));
        assert!(doc.contains("<p>Body</p>"));
        assert!(doc.contains("SYSTEM TEST PLAN"));
        assert!(doc.ends_with("</body></html>\n"));
    }
}
