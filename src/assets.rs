//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const CHAT: &str = include_str!("../assets/chat.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheet location relative to a generated page.
pub const STYLESHEET_PATH: &str = "assets/chat.css";

/// Writes the bundled stylesheet into `assets/` under `out_dir`
pub fn write_css_assets(out_dir: &Path) -> Result<()> {
    let target = out_dir.join(STYLESHEET_PATH);
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create assets directory: {}", dir.display()))?;
    }

    let css = [BASE, CHAT, MARKDOWN].join("\n");
    fs::write(&target, css)
        .with_context(|| format!("Failed to write CSS asset: {}", target.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;

        // Act
        write_css_assets(dir.path())?;

        // Assert
        let css = fs::read_to_string(dir.path().join("assets/chat.css"))?;
        assert!(css.contains(".message-user"), "Should bundle chat styles");
        assert!(css.contains("blockquote"), "Should bundle markdown styles");
        Ok(())
    }
}
