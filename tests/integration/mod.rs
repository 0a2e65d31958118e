// Integration test modules
pub mod cache_tests;
pub mod catalog_tests;
pub mod completion_tests;
pub mod config_tests;

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use anyhow::Result;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub const CARD_COMPONENT: &str = r#"# frozen_string_literal: true

class CardComponent < ViewComponent::Base
  def initialize(title:, count: 0)
    @title = title
    @count = count
  end
end
"#;

    pub const ROW_COMPONENT: &str = r#"class RowComponent < ApplicationComponent
  def initialize(label, size: 10)
    @label = label
    @size = size
  end
end
"#;

    pub const BADGE_COMPONENT: &str = r#"class BadgeComponent < ViewComponent::Base
  def call
    tag.span(content, class: "badge")
  end
end
"#;

    /// Write `text` at `rel` under `root`, creating parent directories
    pub fn write_source(root: &Path, rel: &str, text: &str) -> Result<PathBuf> {
        write_bytes(root, rel, text.as_bytes())
    }

    pub fn write_bytes(root: &Path, rel: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    /// A project with three components and one unrelated Ruby file
    pub fn setup_project() -> Result<TempDir> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();
        write_source(root, "app/components/card_component.rb", CARD_COMPONENT)?;
        write_source(root, "app/components/layout/row_component.rb", ROW_COMPONENT)?;
        write_source(root, "app/components/badge_component.rb", BADGE_COMPONENT)?;
        write_source(root, "app/models/user.rb", "class User < ApplicationRecord\nend\n")?;
        Ok(temp_dir)
    }
}
