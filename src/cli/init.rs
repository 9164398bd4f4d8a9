//! Init command - write an example configuration file

use crate::config::EXAMPLE_CONFIG;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

const CONFIG_FILE: &str = "lexiscore.toml";

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nPut human prompts in {} and synthetic JSON files in {}, then run {}",
        style("Data/<id>/prompt.xml").cyan(),
        style("QwenMax/*.json").cyan(),
        style("lexiscore").bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_once() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).expect("init");
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);

        std::fs::write(&path, "# edited").unwrap();
        run(dir.path()).expect("second init");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# edited");
    }

    #[test]
    fn test_init_missing_dir() {
        assert!(run(Path::new("/nonexistent/lexiscore/dir")).is_err());
    }
}
