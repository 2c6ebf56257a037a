use colored::*;
use terminal_size::{Width, terminal_size};

use jpn::{Javadoc, JavadocError};

/// Get the current terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        80 // Default fallback width
    }
}

/// Create a separator line that fits the terminal width
fn separator(width: usize) -> String {
    "─".repeat(width.min(120)) // Cap at 120 for very wide terminals
}

/// Render a failed lookup for the terminal, with package suggestions
/// pulled from the root's package-list when the page was missing.
pub fn format_lookup_failure(err: &JavadocError, javadoc: &Javadoc) -> String {
    let term_width = get_terminal_width();
    let sep_width = (term_width - 2).max(40); // Leave some margin

    let mut formatted = String::new();
    formatted.push_str(&format!(
        "\n{} {}\n",
        "💥".red(),
        "Lookup Failed".red().bold()
    ));
    formatted.push_str(&format!("{}\n", separator(sep_width).red()));
    formatted.push_str(&format!("\n  {} {}\n", "💬".red(), err.to_string().white()));

    match err {
        JavadocError::ContentNotFound { path, .. } => {
            if let Some(package) = package_of(path) {
                let suggestions = package_suggestions(javadoc, &package);
                if !suggestions.is_empty() {
                    formatted.push_str(&format!(
                        "\n  {} {}\n",
                        "💡".yellow(),
                        "Documented packages near that name:".yellow().bold()
                    ));
                    for candidate in suggestions.iter().take(5) {
                        formatted.push_str(&format!("    {} {}\n", "•".cyan(), candidate.green()));
                    }
                }
            }
        }
        JavadocError::SignatureNotFound { .. } => {
            formatted.push_str(&format!(
                "\n  {} {}\n",
                "💡".cyan(),
                "Parameter types must match the declared overload exactly \
                 (erased names, e.g. java.lang.String or int[])."
            ));
        }
        JavadocError::ExtractionFailed { .. } => {
            formatted.push_str(&format!(
                "\n  {} {}\n",
                "💡".cyan(),
                "This javadoc was generated without parameter names; \
                 regenerate it or use another source."
            ));
        }
        JavadocError::UnsupportedType { .. } => {
            formatted.push_str(&format!(
                "\n  {} {}\n",
                "💡".cyan(),
                "Nested types share their outer type's page, which cannot \
                 be resolved from a binary name."
            ));
        }
        _ => {}
    }

    formatted
}

/// The package part of a page path: `com/example/Foo.html` -> `com.example`.
fn package_of(path: &str) -> Option<String> {
    let (dir, _file) = path.rsplit_once('/')?;
    Some(dir.replace('/', "."))
}

/// Documented packages within a small edit distance of the missing one,
/// closest first.
fn package_suggestions(javadoc: &Javadoc, package: &str) -> Vec<String> {
    let Ok(packages) = javadoc.packages() else {
        return Vec::new();
    };

    let mut scored: Vec<(usize, String)> = packages
        .into_iter()
        .filter(|candidate| candidate != package)
        .map(|candidate| (edit_distance(package, &candidate), candidate))
        .filter(|(dist, _)| *dist <= 3)
        .collect();

    // Sort by distance (closest first)
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Calculate simple edit distance between two strings (Levenshtein distance)
fn edit_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = std::cmp::min(
                std::cmp::min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                matrix[i - 1][j - 1] + cost,
            );
        }
    }

    matrix[len1][len2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_of() {
        assert_eq!(
            package_of("com/example/Foo.html").as_deref(),
            Some("com.example")
        );
        assert_eq!(package_of("Foo.html"), None);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("com.example", "com.example"), 0);
        assert_eq!(edit_distance("com.exmple", "com.example"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }
}
