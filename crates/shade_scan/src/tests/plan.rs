use crate::{BuildPlan, ContentScanner};
use shade_core::{ColorToken, Mode, ScanStrategy, ShadeKey, ThemeConfig};
use std::fs;
use tempfile::TempDir;

fn project_with(source: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), source).unwrap();
    dir
}

#[tokio::test]
async fn test_jit_plans_only_used_tokens() {
    let dir = project_with(r#"<a class="text-blue-600 bg-gray-900 text-blue-600">"#);
    let config = ThemeConfig::reference();
    let theme = config.resolve();
    let report = ContentScanner::new(dir.path().to_path_buf(), config.content.clone())
        .scan(&theme)
        .await
        .unwrap();

    let plan = BuildPlan::new(&theme, Some(&report));
    assert_eq!(plan.strategy, ScanStrategy::PerFile);
    assert_eq!(plan.len(), 2);
    assert!(plan.contains(&ColorToken::new("blue", ShadeKey::Step(600))));

    let colors: Vec<String> = plan
        .colors(&theme)
        .map(|(t, c)| format!("{t}={c}"))
        .collect();
    assert_eq!(colors, vec!["blue-600=#2563EB", "gray-900=#121826"]);
}

#[tokio::test]
async fn test_aot_plans_whole_palette() {
    let dir = project_with("<a class=\"text-blue-600\">");
    let config = ThemeConfig::reference().with_mode(Mode::Aot);
    let theme = config.resolve();
    let report = ContentScanner::new(dir.path().to_path_buf(), config.content.clone())
        .scan(&theme)
        .await
        .unwrap();

    let plan = BuildPlan::new(&theme, Some(&report));
    assert_eq!(plan.strategy, ScanStrategy::Precompile);
    assert_eq!(plan.len(), theme.palette.color_count());
}

#[test]
fn test_jit_without_scan_is_empty() {
    let theme = ThemeConfig::reference().resolve();
    assert!(BuildPlan::new(&theme, None).is_empty());
}
