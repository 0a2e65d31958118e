//! Catalog construction against real project trees

use super::test_helpers::*;
use pretty_assertions::assert_eq;
use render_complete::workspace::{read_all, FsSourceProvider};
use render_complete::{
    build_catalog, synthesize_snippet, Catalog, CatalogBuilder, ComponentDescriptor, SourceUnit,
};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn by_name(catalog: &Catalog) -> BTreeMap<String, Option<String>> {
    catalog
        .iter()
        .map(|d| (d.name.clone(), d.args.clone()))
        .collect()
}

#[tokio::test]
async fn test_project_catalog() -> anyhow::Result<()> {
    let project = setup_project()?;
    let provider = FsSourceProvider::new(vec![project.path().to_path_buf()]);

    let results = read_all(&provider).await?;
    assert_eq!(results.len(), 3);

    let catalog = CatalogBuilder::new().build_from_results(results);
    let expected: BTreeMap<String, Option<String>> = [
        ("BadgeComponent".to_string(), None),
        ("CardComponent".to_string(), Some("title:, count: 0".to_string())),
        ("RowComponent".to_string(), Some("label, size: 10".to_string())),
    ]
    .into_iter()
    .collect();
    assert_eq!(by_name(&catalog), expected);
    Ok(())
}

#[tokio::test]
async fn test_unreadable_file_does_not_blank_catalog() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    write_source(temp_dir.path(), "app/components/card_component.rb", CARD_COMPONENT)?;
    // Invalid UTF-8 cannot be read as text
    write_bytes(
        temp_dir.path(),
        "app/components/binary_component.rb",
        &[0xff, 0xfe, 0x00, 0xc3, 0x28],
    )?;

    let provider = FsSourceProvider::new(vec![temp_dir.path().to_path_buf()]);
    let results = read_all(&provider).await?;
    assert_eq!(results.len(), 2);
    assert_eq!(results.iter().filter(|(_, r)| r.is_err()).count(), 1);

    let catalog = CatalogBuilder::new().build_from_results(results);
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["CardComponent"]);
    Ok(())
}

#[test]
fn test_no_initializer_gives_bare_snippet() {
    let catalog = build_catalog(&[SourceUnit::new("badge_component.rb", BADGE_COMPONENT)]);
    let descriptor = catalog.get("BadgeComponent").expect("badge discovered");

    assert_eq!(descriptor.args, None);
    assert_eq!(synthesize_snippet(descriptor), "BadgeComponent.new");
}

#[test]
fn test_multiple_classes_share_first_initializer() {
    // Arguments are not scoped to the matched class: the first initializer
    // anywhere in the file is used.
    let text = r#"
class Options
  def initialize(theme, density)
  end
end

class TableComponent < ViewComponent::Base
  def initialize(rows:, columns: [])
  end
end
"#;
    let catalog = build_catalog(&[SourceUnit::new("table_component.rb", text)]);
    assert_eq!(
        catalog.as_slice(),
        &[ComponentDescriptor::new(
            "TableComponent",
            Some("theme, density".to_string())
        )]
    );
}

#[test]
fn test_many_units_all_processed() {
    let units: Vec<SourceUnit> = (0..200)
        .map(|i| {
            SourceUnit::new(
                format!("app/components/c{i}_component.rb"),
                format!("class C{i}Component < ViewComponent::Base\n  def initialize(n: {i})\n  end\nend\n"),
            )
        })
        .collect();

    let catalog = build_catalog(&units);
    assert_eq!(catalog.len(), 200);
    let c42 = catalog.get("C42Component").expect("C42 present");
    assert_eq!(synthesize_snippet(c42), "C42Component.new(n: ${1:42})");
}
