use clap::{Parser, Subcommand};
use colored::*;

mod cache;
mod check;
mod config;
mod error_format;
mod init;
mod query;
mod syntax;

use check::check_root;
use config::Config;
use init::init_config;
use query::{LookupOptions, run_lookup};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "jpn")]
#[command(about = "Extract method parameter names from javadoc HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Ignore the lookup cache
    #[arg(short, long, global = true)]
    force: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up parameter names for a method or constructor
    Lookup {
        /// Member spec, e.g. com.example.Foo#process(java.lang.String,int)
        /// (use <init> as the name for constructors)
        member: String,
        /// Javadoc root: zip archive, directory, or base URL
        /// (uses javadoc_root from jpn.toml if not specified)
        #[arg(short, long)]
        root: Option<String>,
        /// Print an empty result instead of failing when names are missing
        #[arg(long)]
        graceful: bool,
        /// Emit the name list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the documentation page path for a type name
    Resolve {
        /// Fully qualified type name, e.g. com.example.Foo
        type_name: String,
    },
    /// Validate a javadoc root and list its packages
    Check {
        /// Javadoc root: zip archive, directory, or base URL
        root: String,
    },
    /// Initialize a new jpn.toml configuration file
    Init {
        /// Overwrite existing jpn.toml if present
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load();

    let result = match cli.command {
        Commands::Lookup {
            member,
            root,
            graceful,
            json,
        } => {
            // CLI flag overrides config file
            if graceful {
                config.graceful = true;
            }
            let opts = LookupOptions {
                graceful: config.graceful,
                json,
                verbose: cli.verbose,
                force: cli.force,
            };
            run_lookup(&config, &member, root.as_deref(), &opts)
        }
        Commands::Resolve { type_name } => match jpn::resolve::doc_path(&type_name) {
            Ok(path) => {
                println!("{}", path);
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        },
        Commands::Check { root } => check_root(&root, cli.verbose),
        Commands::Init { force } => init_config(force),
    };

    if let Err(e) = result {
        eprintln!("\n{} {}", "❌".red(), e.red());
        std::process::exit(1);
    }
}
