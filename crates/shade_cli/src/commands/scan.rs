//! `shade scan`: walk the content globs, find color utilities, plan the build.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color};
use shade_observability::{record_duration, record_error, scan_span};
use shade_scan::{BuildPlan, ContentScanner, ScanOptions};
use tracing::Instrument;

use super::load_config;
use crate::output;

pub async fn handle(
    explicit: Option<&Path>,
    root: Option<PathBuf>,
    max_files: Option<usize>,
    exclude: Vec<String>,
) -> Result<()> {
    let (config_path, config) = load_config(explicit)?;
    let theme = config.resolve();

    // content globs are relative to the config file
    let root = match root {
        Some(root) => root,
        None => match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };

    let mut options = ScanOptions::default();
    if let Some(max) = max_files {
        options = options.with_max_files(max);
    }
    for name in exclude {
        options = options.with_exclude(name);
    }
    let scanner = ContentScanner::new(root.clone(), config.content.clone()).with_options(options);

    let spinner = output::spinner(&format!("Scanning {}", root.display()));
    let span = scan_span!(root.display(), theme.strategy());
    let started = Instant::now();
    let result = async {
        let outcome = scanner.scan(&theme).await;
        record_duration("scan.duration_ms", started.elapsed());
        if let Err(e) = &outcome {
            record_error(e);
        }
        outcome
    }
    .instrument(span)
    .await;

    let report = match result {
        Ok(report) => {
            output::spinner_success(
                &spinner,
                &format!(
                    "Scanned {} file{} in {:.0?}",
                    report.files.len(),
                    if report.files.len() == 1 { "" } else { "s" },
                    started.elapsed()
                ),
            );
            report
        }
        Err(e) => {
            output::spinner_error(&spinner, "Scan failed");
            return Err(e).with_context(|| format!("failed to scan {}", root.display()));
        }
    };

    let plan = BuildPlan::new(&theme, Some(&report));
    let unknown = report.unknown_tokens();

    if output::is_json() {
        output::data(
            "scan",
            &serde_json::json!({
                "strategy": report.strategy,
                "files": report.files,
                "unknown": unknown.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "plan": plan.tokens.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "truncated": report.truncated,
            }),
        );
        return Ok(());
    }

    let mut table = output::table();
    output::table_header(&mut table, &["File", "Line", "Class", "Token"]);
    for file in &report.files {
        for usage in &file.usages {
            let token = if usage.known {
                Cell::new(usage.token.to_string())
            } else {
                Cell::new(usage.token.to_string()).fg(Color::Yellow)
            };
            table.add_row(vec![
                Cell::new(&file.path),
                Cell::new(usage.line),
                Cell::new(&usage.class),
                token,
            ]);
        }
    }
    if report.total_usages() > 0 {
        println!("{table}");
    } else {
        output::dim("no color utilities found");
    }

    for token in &unknown {
        output::warning(&format!("`{token}` is used but not defined in the palette"));
    }
    if report.truncated {
        output::warning("file limit reached; results are partial");
    }

    output::kv("strategy", &plan.strategy.to_string());
    output::kv("usages", &report.total_usages().to_string());
    output::kv(
        "planned colors",
        &format!("{} of {}", plan.len(), theme.palette.color_count()),
    );
    Ok(())
}
