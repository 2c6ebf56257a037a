//! The `check` command: validate a root and list what it documents.

use colored::*;

use crate::query::open_root;

pub fn check_root(root: &str, verbose: bool) -> Result<(), String> {
    let javadoc = open_root(root)?;
    let packages = javadoc.packages().map_err(|e| e.to_string())?;

    println!(
        "{} Valid javadoc root: {}",
        "✅".green(),
        javadoc.root().bold()
    );
    println!(
        "{} {} documented package(s)",
        "📦".cyan(),
        packages.len().to_string().bold()
    );

    let shown = if verbose { packages.len() } else { 15 };
    for package in packages.iter().take(shown) {
        println!("  {} {}", "•".cyan(), package.green());
    }
    if packages.len() > shown {
        println!("  ... and {} more (use --verbose)", packages.len() - shown);
    }

    Ok(())
}
