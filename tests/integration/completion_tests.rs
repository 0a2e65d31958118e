//! End-to-end completion at a render call

use super::test_helpers::*;
use render_complete::completion::language_for_path;
use render_complete::workspace::FsSourceProvider;
use render_complete::{CatalogCache, CompletionKind, CompletionProvider};
use std::path::Path;
use std::sync::Arc;

#[tokio::test]
async fn test_render_call_offers_project_components() -> anyhow::Result<()> {
    let project = setup_project()?;
    let provider = Arc::new(FsSourceProvider::new(vec![project.path().to_path_buf()]));
    let completions = CompletionProvider::new(Arc::new(CatalogCache::new(provider)));

    let language = language_for_path(Path::new("app/views/pages/home.html.erb")).expect("erb");
    let mut items = completions
        .provide(language, "  <%= render ")
        .await?
        .expect("render call triggers completions");
    items.sort_by(|a, b| a.label.cmp(&b.label));

    let inserted: Vec<_> = items.iter().map(|i| i.insert_text.as_str()).collect();
    assert_eq!(
        inserted,
        vec![
            "BadgeComponent.new",
            "CardComponent.new(title: ${1:value}, count: ${2:0})",
            "RowComponent.new(${1:label}, size: ${2:10})",
        ]
    );
    assert!(items.iter().all(|i| i.kind == CompletionKind::Class));
    assert_eq!(items[1].detail.as_deref(), Some("title:, count: 0"));
    Ok(())
}

#[tokio::test]
async fn test_non_render_line_offers_nothing() -> anyhow::Result<()> {
    let project = setup_project()?;
    let provider = Arc::new(FsSourceProvider::new(vec![project.path().to_path_buf()]));
    let completions = CompletionProvider::new(Arc::new(CatalogCache::new(provider)))
        .with_languages(vec!["slim".to_string()]);

    assert!(completions.provide("slim", "= link_to ").await?.is_none());
    assert!(completions.provide("erb", "<%= render ").await?.is_none());
    assert!(completions.provide("slim", "= render ").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_custom_sort_text() -> anyhow::Result<()> {
    let project = setup_project()?;
    let provider = Arc::new(FsSourceProvider::new(vec![project.path().to_path_buf()]));
    let completions =
        CompletionProvider::new(Arc::new(CatalogCache::new(provider))).with_sort_text("zz");

    let items = completions.provide("haml", "= render Ca").await?.unwrap_or_default();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i.sort_text == "zz"));
    Ok(())
}
