use colored::*;
use std::{fs, path::PathBuf};

pub fn init_config(force: bool) -> Result<(), String> {
    let config_path = PathBuf::from("jpn.toml");

    if config_path.exists() && !force {
        return Err("jpn.toml already exists. Use --force to overwrite.".to_string());
    }

    let template = r#"# jpn Configuration File

# Default javadoc root used when `lookup` is run without --root.
# A zip archive, a directory tree, or a base URL all work:
#   javadoc_root = "./build/docs/javadoc"
#   javadoc_root = "./lib/commons-lang3-3.12.0-javadoc.jar"
#   javadoc_root = "https://docs.oracle.com/javase/8/docs/api"
# javadoc_root = ""

# Location of the lookup result cache
cache_file = "./jpn-cache.json"

# When true, a member whose names cannot be found prints an empty
# result instead of failing (same as passing --graceful)
graceful = false
"#;

    fs::write(&config_path, template).map_err(|e| format!("Failed to create jpn.toml: {}", e))?;

    println!("{} Created jpn.toml", "✅".green());
    println!("\n{}", "Configuration file created with defaults:".cyan());
    println!("  {} javadoc_root = (unset)", "•".blue());
    println!("  {} cache_file = \"./jpn-cache.json\"", "•".blue());
    println!("  {} graceful = false", "•".blue());
    println!(
        "\n{}",
        "Edit jpn.toml to point at the javadoc you use most.".cyan()
    );

    Ok(())
}
