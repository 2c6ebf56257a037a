use lazy_static::lazy_static;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

/// Highlight one flattened Java declaration for terminal output.
/// Falls back to the plain text when highlighting is unavailable.
pub fn highlight_declaration(declaration: &str) -> String {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension("java")
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let mut h = HighlightLines::new(syntax, &THEME_SET.themes["base16-ocean.dark"]);

    match h.highlight_line(declaration, &SYNTAX_SET) {
        Ok(ranges) => {
            let mut out = syntect::util::as_24_bit_terminal_escaped(&ranges, false);
            out.push_str("\x1b[0m");
            out
        }
        Err(_) => declaration.to_string(),
    }
}
