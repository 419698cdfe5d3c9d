//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# doculint configuration

[conventions]
# Package treated as the program entry point; it needs no package comment.
entry_package = "main"

# Function in the entry package that needs no doc comment.
entry_function = "main"

# Automatic package initializers need no doc comment.
initializer_function = "init"

[rules.doculint]
enabled = true
# severity = "warning"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("doculint.toml"), force)?;

    println!("Created doculint.toml");
    println!("\nNext steps:");
    println!("  1. Edit doculint.toml to adjust conventions");
    println!("  2. Run: doculint check <units.json>");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
