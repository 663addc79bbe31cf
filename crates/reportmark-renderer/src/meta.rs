/// Identification block collected by the wizard before generation. Everything
/// is display text; nothing here feeds back into parsing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportMeta {
    pub project_name: String,
    pub version: String,
    pub date: String,
    pub prepared_by: String,
    pub approved_by: String,
}

/// Download name for an exported document: whitespace runs in the project
/// name become underscores and the release version is appended.
pub fn export_file_name(meta: &ReportMeta, extension: &str) -> String {
    let mut name = String::with_capacity(meta.project_name.len());
    let mut last_underscore = false;
    for ch in meta.project_name.chars() {
        if ch.is_whitespace() {
            if !last_underscore {
                name.push('_');
                last_underscore = true;
            }
        } else {
            name.push(ch);
            last_underscore = false;
        }
    }
    format!("Test_Plan_{}_v{}.{}", name, meta.version, extension)
}

#[cfg(test)]
mod tests {
    use super::{ReportMeta, export_file_name};

    #[test]
    fn file_name_collapses_whitespace() {
        let meta = ReportMeta {
            project_name: "Inventory  Service".to_string(),
            version: "2.1.0".to_string(),
            ..ReportMeta::default()
        };
        assert_eq!(
            export_file_name(&meta, "pdf"),
            "Test_Plan_Inventory_Service_v2.1.0.pdf"
        );
    }
}
