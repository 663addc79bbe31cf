use std::collections::hash_map::DefaultHasher;
use std::env;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io::{self, Read};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use reportmark_core::{TocEntry, build_toc, emit_html, emit_html_sanitized, emit_toc_html, parse};
use reportmark_renderer::{Renderer, ReportMeta, Theme, word_document};

mod history;

use history::{HistoryItem, HistoryStore, JsonFileStore, upsert};

fn main() {
    let mut input: Option<String> = None;
    let mut raw = false;
    let mut sanitized = false;
    let mut word = false;
    let mut toc_mode: Option<TocMode> = None;
    let mut theme = Theme::Auto;
    let mut history_path: Option<String> = None;
    let mut meta = ReportMeta {
        project_name: "Untitled Project".to_string(),
        version: "1.0.0".to_string(),
        ..ReportMeta::default()
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--raw" => raw = true,
            "--sanitized" => sanitized = true,
            "--word" => word = true,
            "--toc" => {
                let mode = match args.next().as_deref() {
                    Some("json") => TocMode::Json,
                    Some("pretty") => TocMode::Pretty,
                    _ => {
                        eprintln!("--toc expects: json | pretty");
                        print_usage();
                        process::exit(2);
                    }
                };
                toc_mode = Some(mode);
            }
            "--theme" => {
                theme = match args.next().as_deref() {
                    Some("auto") => Theme::Auto,
                    Some("light") => Theme::Light,
                    Some("dark") => Theme::Dark,
                    _ => {
                        eprintln!("--theme expects: auto | light | dark");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            "--project" => meta.project_name = expect_value(&mut args, "--project"),
            "--release" => meta.version = expect_value(&mut args, "--release"),
            "--date" => meta.date = expect_value(&mut args, "--date"),
            "--prepared-by" => meta.prepared_by = expect_value(&mut args, "--prepared-by"),
            "--approved-by" => meta.approved_by = expect_value(&mut args, "--approved-by"),
            "--history" => history_path = Some(expect_value(&mut args, "--history")),
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let blocks = parse(&source);
    let toc = build_toc(&source);

    if let Some(path) = history_path {
        if let Err(err) = record_history(&path, &meta, &source) {
            eprintln!("failed to update history {}: {}", path, err);
            process::exit(1);
        }
    }

    if let Some(mode) = toc_mode {
        print_toc(&toc, mode);
        return;
    }

    let body = if sanitized {
        emit_html_sanitized(&blocks)
    } else {
        emit_html(&blocks)
    };

    if word {
        // Word sniffs the encoding from a UTF-8 BOM; keep it first in the file.
        print!("\u{feff}{}", word_document(&meta, &body));
        return;
    }

    if raw {
        print!("{}", body);
        return;
    }

    let renderer = Renderer::new(theme);
    let mut page = emit_toc_html(&toc);
    page.push('\n');
    page.push_str(&body);
    print!("{}", renderer.embed_html(&page, true, true));
}

fn print_usage() {
    eprintln!(
        "Usage: reportmark-cli [--raw] [--sanitized] [--word] [--toc json|pretty] \
         [--theme auto|light|dark] [--project NAME] [--release V] [--date D] \
         [--prepared-by P] [--approved-by A] [--history FILE] [input]"
    );
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    match args.next() {
        Some(value) => value,
        None => {
            eprintln!("{} expects a value", flag);
            print_usage();
            process::exit(2);
        }
    }
}

fn record_history(path: &str, meta: &ReportMeta, source: &str) -> io::Result<()> {
    let store = JsonFileStore::new(path);
    let mut items = store.load()?;
    let updated_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    upsert(
        &mut items,
        HistoryItem {
            id: document_id(source),
            project_name: meta.project_name.clone(),
            version: meta.version.clone(),
            updated_at,
            source: source.to_string(),
        },
    );
    store.save(&items)
}

fn document_id(source: &str) -> String {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[derive(Clone, Copy)]
enum TocMode {
    Json,
    Pretty,
}

fn print_toc(toc: &[TocEntry], mode: TocMode) {
    match mode {
        TocMode::Json => println!("{}", toc_to_json(toc)),
        TocMode::Pretty => {
            for entry in toc {
                println!("{}\t{}\t{}", entry.level, entry.id, entry.text);
            }
        }
    }
}

fn toc_to_json(toc: &[TocEntry]) -> String {
    if toc.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::new();
    out.push_str("[\n");
    for (idx, entry) in toc.iter().enumerate() {
        out.push_str("  {\n");
        out.push_str(&format!("    \"level\": {},\n", entry.level));
        out.push_str(&format!("    \"id\": \"{}\",\n", escape_json(&entry.id)));
        out.push_str(&format!("    \"text\": \"{}\"\n", escape_json(&entry.text)));
        out.push_str("  }");
        if idx + 1 < toc.len() {
            out.push_str(",\n");
        } else {
            out.push('\n');
        }
    }
    out.push(']');
    out
}

fn escape_json(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
