const PRINT_CSS: &str = include_str!("../assets/print.css");

/// Page-break rules injected around rasterized PDF capture. The exporter
/// itself is an external collaborator; this stylesheet is the contract that
/// keeps headings attached to their sections and table rows unsplit.
pub fn print_stylesheet() -> &'static str {
    PRINT_CSS
}
