//! The `lookup` command: member spec in, ordered parameter names out.

use colored::*;

use jpn::{Callable, Javadoc, OnMissing};

use crate::cache::{CacheEntry, cache_key, load_cache, save_cache};
use crate::config::Config;
use crate::error_format::format_lookup_failure;
use crate::syntax::highlight_declaration;

pub struct LookupOptions {
    pub graceful: bool,
    pub json: bool,
    pub verbose: bool,
    pub force: bool,
}

pub fn run_lookup(
    config: &Config,
    member_spec: &str,
    root: Option<&str>,
    opts: &LookupOptions,
) -> Result<(), String> {
    let callable = Callable::parse_spec(member_spec)?;
    let root = root
        .or(config.javadoc_root.as_deref())
        .ok_or("No javadoc root given. Pass --root or set javadoc_root in jpn.toml.")?;

    // Cached results skip opening the root entirely
    let key = cache_key(root, member_spec);
    if !opts.force {
        let cache = load_cache(&config.cache_file);
        if let Some(entry) = cache.get(&key) {
            if opts.verbose {
                eprintln!("{} Using cached result", "ℹ️".blue());
            }
            print_names(&callable, &entry.names, opts);
            return Ok(());
        }
    }

    let javadoc = open_root(root)?;
    let policy = if opts.graceful {
        OnMissing::Empty
    } else {
        OnMissing::Raise
    };

    match javadoc.signature(&callable) {
        Ok(m) => {
            if opts.verbose && !opts.json {
                println!("  {}", highlight_declaration(&m.declaration));
            }
            print_names(&callable, &m.names, opts);

            // A cached empty list would shadow later strict lookups, so
            // only non-empty results are remembered.
            if !m.names.is_empty() {
                let mut cache = load_cache(&config.cache_file);
                cache.insert(
                    key,
                    CacheEntry {
                        member: member_spec.to_string(),
                        names: m.names,
                    },
                );
                save_cache(&config.cache_file, &cache);
            }
            Ok(())
        }
        Err(_) if policy == OnMissing::Empty => {
            print_names(&callable, &[], opts);
            Ok(())
        }
        Err(err) => Err(format_lookup_failure(&err, &javadoc)),
    }
}

fn print_names(callable: &Callable, names: &[String], opts: &LookupOptions) {
    if opts.json {
        println!("{}", serde_json::to_string(names).unwrap());
        return;
    }

    println!("{} {}", "🔍".cyan(), callable.describe().bold());
    if names.is_empty() {
        println!("  {} no parameter names", "ℹ️".blue());
    } else {
        for (position, name) in names.iter().enumerate() {
            println!("  {} {} {}", "•".cyan(), position, name.green());
        }
    }
}

/// Open a javadoc root given on the command line or in jpn.toml. HTTP
/// and HTTPS roots go through the URL backend, anything else is a path.
pub fn open_root(root: &str) -> Result<Javadoc, String> {
    let result = if root.starts_with("http://") || root.starts_with("https://") {
        Javadoc::from_url(root)
    } else {
        Javadoc::open(root)
    };
    result.map_err(|e| e.to_string())
}
