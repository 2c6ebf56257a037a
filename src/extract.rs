//! Scanning javadoc markup for one callable's declared parameter names.
//!
//! The primary target is the JDK 8 standard doclet: member detail
//! sections hold one `<pre>` declaration block per member, with
//! `&nbsp;`-separated tokens and `<a href>`-linked type names. The
//! scanner also accepts the `<div class="member-signature">` blocks the
//! JDK 17+ doclet emits. Tags are stripped before entities are decoded,
//! so generic brackets written as `&lt;`/`&gt;` survive flattening.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{JavadocError, Result};
use crate::member::{simple_type_name, Callable, CallableKind};

lazy_static! {
    static ref PRE_BLOCK: Regex = Regex::new(r"(?s)<pre[^>]*>(.*?)</pre>").unwrap();
    static ref SIGNATURE_DIV: Regex =
        Regex::new(r#"(?s)<div class="member-signature"[^>]*>(.*?)</div>"#).unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// A matched declaration: the flattened signature text and the
/// parameter names it declares, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureMatch {
    pub declaration: String,
    pub names: Vec<String>,
}

/// Find the declaration block for `callable` on a page and extract its
/// parameter names.
///
/// Overload selection is exact: the declared parameter type sequence
/// must match the descriptor's positionally after normalization.
/// Returning names for the wrong overload is worse than failing.
pub fn find_signature(page: &str, callable: &Callable) -> Result<SignatureMatch> {
    let target = match callable.kind {
        CallableKind::Method => callable.name.clone(),
        CallableKind::Constructor => simple_type_name(&callable.declaring_type).to_string(),
    };

    let section = member_detail_section(page, callable.kind);
    let mut name_seen = false;

    for block in declaration_blocks(section) {
        let declaration = flatten_markup(&block);
        let Some(raw_params) = declared_parameters(&declaration, &target) else {
            continue;
        };
        name_seen = true;

        let params = split_parameters(&raw_params);
        if !types_match(&params, &callable.parameter_types) {
            continue;
        }

        // Selected overload. Every position must yield a real name now;
        // a partially-named list is never returned.
        let mut names = Vec::with_capacity(params.len());
        for param in &params {
            match &param.name {
                Some(name) => names.push(name.clone()),
                None => {
                    return Err(JavadocError::ExtractionFailed {
                        member: callable.describe(),
                        reason: format!(
                            "declaration omits a name for parameter of type {}",
                            param.declared_type
                        ),
                    });
                }
            }
        }
        if names.len() != callable.parameter_types.len() {
            return Err(JavadocError::ExtractionFailed {
                member: callable.describe(),
                reason: format!(
                    "extracted {} names for {} parameters",
                    names.len(),
                    callable.parameter_types.len()
                ),
            });
        }

        return Ok(SignatureMatch { declaration, names });
    }

    let reason = if name_seen {
        "declarations with that name exist, but none matches the parameter types"
    } else {
        "page has no declaration with that name"
    };
    Err(JavadocError::SignatureNotFound {
        member: callable.describe(),
        reason: reason.to_string(),
    })
}

/// Parameter names only, in declaration order.
pub fn extract_parameter_names(page: &str, callable: &Callable) -> Result<Vec<String>> {
    find_signature(page, callable).map(|m| m.names)
}

#[derive(Debug)]
struct Parameter {
    declared_type: String,
    name: Option<String>,
}

/// Narrow the page to the member detail section when the doclet marked
/// one, so code samples in the class description cannot shadow real
/// declarations. Falls back to the whole page for unknown layouts.
fn member_detail_section(page: &str, kind: CallableKind) -> &str {
    let markers: &[&str] = match kind {
        CallableKind::Method => &[
            "name=\"method.detail\"",
            "id=\"method.detail\"",
            "id=\"method-detail\"",
            ">Method Detail<",
        ],
        CallableKind::Constructor => &[
            "name=\"constructor.detail\"",
            "id=\"constructor.detail\"",
            "id=\"constructor-detail\"",
            ">Constructor Detail<",
        ],
    };
    for marker in markers {
        if let Some(idx) = page.find(marker) {
            return &page[idx..];
        }
    }
    page
}

/// Every candidate declaration block in document order.
fn declaration_blocks(section: &str) -> Vec<String> {
    let mut blocks: Vec<(usize, String)> = PRE_BLOCK
        .captures_iter(section)
        .chain(SIGNATURE_DIV.captures_iter(section))
        .map(|cap| {
            let m = cap.get(1).unwrap();
            (m.start(), m.as_str().to_string())
        })
        .collect();
    blocks.sort_by_key(|(start, _)| *start);
    blocks.into_iter().map(|(_, block)| block).collect()
}

/// Reduce a markup block to plain declaration text: strip tags, decode
/// entities, collapse whitespace.
fn flatten_markup(block: &str) -> String {
    let stripped = TAG.replace_all(block, "");
    let decoded = decode_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&#8203;", "")
        .replace("&zwnj;", "")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// The raw text between the parentheses of `target(...)` in a flattened
/// declaration, or None when the block does not declare `target`.
fn declared_parameters(declaration: &str, target: &str) -> Option<String> {
    let bytes = declaration.as_bytes();
    let mut search_from = 0;
    while let Some(rel) = declaration[search_from..].find(target) {
        let at = search_from + rel;
        search_from = at + 1;

        // Must be a standalone identifier directly followed by the
        // parameter list, not a substring of a longer name.
        let before_ok = at == 0 || {
            let prev = bytes[at - 1] as char;
            !(prev.is_alphanumeric() || prev == '_' || prev == '$' || prev == '.')
        };
        if !before_ok {
            continue;
        }
        let after = at + target.len();
        let rest = declaration[after..].trim_start();
        if !rest.starts_with('(') {
            continue;
        }

        return balanced_parens(rest);
    }
    None
}

/// Text inside the first balanced parenthesis group of `text`, which
/// must start at an opening parenthesis.
fn balanced_parens(text: &str) -> Option<String> {
    let mut depth = 0usize;
    let start = text.find('(')?;
    for (idx, c) in text[start..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start + 1..start + idx].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a declared parameter list on top-level commas and break each
/// parameter into its type text and (when present) its name token.
fn split_parameters(raw: &str) -> Vec<Parameter> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let mut pieces = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    for c in raw.chars() {
        match c {
            '<' | '(' | '[' => {
                depth += 1;
                current.push(c);
            }
            '>' | ')' | ']' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                pieces.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    pieces.push(current.trim().to_string());

    pieces.iter().map(|piece| parse_parameter(piece)).collect()
}

/// One rendered parameter is a type token run followed by a name token;
/// annotations and `final` are noise. A doclet configured to drop
/// parameter names renders the type alone.
fn parse_parameter(piece: &str) -> Parameter {
    let tokens: Vec<&str> = piece
        .split_whitespace()
        .filter(|tok| !tok.starts_with('@') && *tok != "final")
        .collect();

    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() && IDENTIFIER.is_match(last) => Parameter {
            declared_type: rest.join(" "),
            name: Some((*last).to_string()),
        },
        _ => Parameter {
            declared_type: tokens.join(" "),
            name: None,
        },
    }
}

fn types_match(params: &[Parameter], expected: &[String]) -> bool {
    params.len() == expected.len()
        && params
            .iter()
            .zip(expected)
            .all(|(param, want)| normalize_type(&param.declared_type) == normalize_type(want))
}

/// Normalize a type name for overload comparison: erase generics, drop
/// package qualifiers, fold varargs into array notation. Both the
/// descriptor side and the parsed-markup side go through this, so the
/// two representations meet in the middle.
pub fn normalize_type(raw: &str) -> String {
    let mut flat = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => flat.push(c),
            _ => {}
        }
    }

    let flat = flat.replace("...", "[]");
    let flat: String = flat.chars().filter(|c| !c.is_whitespace()).collect();

    let mut base = flat.as_str();
    let mut dims = 0usize;
    while let Some(stripped) = base.strip_suffix("[]") {
        base = stripped;
        dims += 1;
    }

    let simple = simple_type_name(base);
    let mut out = simple.to_string();
    for _ in 0..dims {
        out.push_str("[]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture in the JDK 8 standard doclet layout: anchors with
    // dash-separated signatures, <h4> member headings, <pre> declaration
    // blocks with &nbsp; token separators and linked type names.
    const JDK8_PAGE: &str = r#"
<html>
<body>
<div class="description">
<pre>public class <span class="typeNameLabel">Widget</span>
extends java.lang.Object</pre>
<p>Use it like <code>widget.process("x")</code>.</p>
</div>
<a name="constructor.detail"><!-- --></a>
<h3>Constructor Detail</h3>
<a name="Widget-int-">
<!--   -->
</a>
<h4>Widget</h4>
<pre>public&nbsp;Widget(int&nbsp;capacity)</pre>
<a name="method.detail"><!-- --></a>
<h3>Method Detail</h3>
<a name="process-java.lang.String-">
<!--   -->
</a>
<h4>process</h4>
<pre>public&nbsp;void&nbsp;process(<a href="String.html">java.lang.String</a>&nbsp;text)</pre>
<a name="process-java.lang.String-int-">
<!--   -->
</a>
<h4>process</h4>
<pre>public&nbsp;void&nbsp;process(<a href="String.html">java.lang.String</a>&nbsp;text,
                    int&nbsp;repeat)</pre>
<a name="configure-java.util.Map-">
<!--   -->
</a>
<h4>configure</h4>
<pre>public&nbsp;void&nbsp;configure(java.util.Map&lt;java.lang.String,java.lang.Integer&gt;&nbsp;settings)</pre>
<a name="fill-byte:A-">
<!--   -->
</a>
<h4>fill</h4>
<pre>public&nbsp;void&nbsp;fill(byte[]&nbsp;buffer,
                int...&nbsp;offsets)</pre>
<a name="bare-int-">
<!--   -->
</a>
<h4>bare</h4>
<pre>public&nbsp;void&nbsp;bare(int)</pre>
</body>
</html>
"#;

    // Fixture in the JDK 17 doclet layout: section elements with
    // member-signature spans.
    const JDK17_PAGE: &str = r#"
<section class="method-details" id="method-detail">
<h2>Method Details</h2>
<section class="detail" id="process(java.lang.String,int)">
<h3>process</h3>
<div class="member-signature"><span class="modifiers">public</span>&nbsp;<span class="return-type">void</span>&nbsp;<span class="element-name">process</span><wbr><span class="parameters">(<span class="parameter-type">String</span>&nbsp;<span class="parameter-name">text</span>,
 <span class="parameter-type">int</span>&nbsp;<span class="parameter-name">repeat</span>)</span></div>
</section>
</section>
"#;

    fn method(name: &str, types: &[&str]) -> Callable {
        Callable::method(
            "com.example.Widget",
            name,
            types.iter().map(|t| t.to_string()).collect(),
        )
    }

    #[test]
    fn test_extracts_single_parameter() {
        let names =
            extract_parameter_names(JDK8_PAGE, &method("process", &["java.lang.String"])).unwrap();
        assert_eq!(names, vec!["text"]);
    }

    #[test]
    fn test_overload_selected_by_type_sequence() {
        let names = extract_parameter_names(
            JDK8_PAGE,
            &method("process", &["java.lang.String", "int"]),
        )
        .unwrap();
        assert_eq!(names, vec!["text", "repeat"]);
    }

    #[test]
    fn test_constructor_extraction() {
        let callable =
            Callable::constructor("com.example.Widget", vec!["int".to_string()]);
        let names = extract_parameter_names(JDK8_PAGE, &callable).unwrap();
        assert_eq!(names, vec!["capacity"]);
    }

    #[test]
    fn test_generic_parameter_matches_erased_type() {
        let names =
            extract_parameter_names(JDK8_PAGE, &method("configure", &["java.util.Map"])).unwrap();
        assert_eq!(names, vec!["settings"]);
    }

    #[test]
    fn test_array_and_varargs_parameters() {
        let names =
            extract_parameter_names(JDK8_PAGE, &method("fill", &["byte[]", "int[]"])).unwrap();
        assert_eq!(names, vec!["buffer", "offsets"]);
    }

    #[test]
    fn test_absent_name_is_signature_not_found() {
        let err = extract_parameter_names(JDK8_PAGE, &method("vanish", &["int"])).unwrap_err();
        assert!(matches!(err, JavadocError::SignatureNotFound { .. }));
    }

    #[test]
    fn test_wrong_arity_is_signature_not_found() {
        // `process` exists, but no overload takes three parameters.
        let err = extract_parameter_names(
            JDK8_PAGE,
            &method("process", &["java.lang.String", "int", "int"]),
        )
        .unwrap_err();
        assert!(matches!(err, JavadocError::SignatureNotFound { .. }));
    }

    #[test]
    fn test_wrong_types_is_signature_not_found() {
        let err =
            extract_parameter_names(JDK8_PAGE, &method("process", &["int"])).unwrap_err();
        assert!(matches!(err, JavadocError::SignatureNotFound { .. }));
    }

    #[test]
    fn test_nameless_declaration_is_extraction_failed() {
        // The doclet rendered `bare(int)` without a parameter name.
        let err = extract_parameter_names(JDK8_PAGE, &method("bare", &["int"])).unwrap_err();
        assert!(matches!(err, JavadocError::ExtractionFailed { .. }));
    }

    #[test]
    fn test_code_sample_does_not_shadow_declaration() {
        // The class description contains `widget.process("x")`; only the
        // detail section declaration may match.
        let m = find_signature(JDK8_PAGE, &method("process", &["java.lang.String"])).unwrap();
        assert!(m.declaration.contains("public void process"));
    }

    #[test]
    fn test_jdk17_member_signature_blocks() {
        let names = extract_parameter_names(
            JDK17_PAGE,
            &method("process", &["java.lang.String", "int"]),
        )
        .unwrap();
        assert_eq!(names, vec!["text", "repeat"]);
    }

    #[test]
    fn test_three_parameter_order_preserved() {
        let page = r#"
<a name="method.detail"><!-- --></a>
<h3>Method Detail</h3>
<h4>blend</h4>
<pre>public&nbsp;void&nbsp;blend(int&nbsp;a,
          int&nbsp;b,
          int&nbsp;c)</pre>
"#;
        let names =
            extract_parameter_names(page, &method("blend", &["int", "int", "int"])).unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_zero_arity_method() {
        let page = r#"
<a name="method.detail"><!-- --></a>
<h4>close</h4>
<pre>public&nbsp;void&nbsp;close()</pre>
"#;
        let names = extract_parameter_names(page, &method("close", &[])).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_annotated_and_final_parameters() {
        let page = r#"
<a name="method.detail"><!-- --></a>
<h4>apply</h4>
<pre>public&nbsp;void&nbsp;apply(@NotNull final&nbsp;java.lang.String&nbsp;value)</pre>
"#;
        let names =
            extract_parameter_names(page, &method("apply", &["java.lang.String"])).unwrap();
        assert_eq!(names, vec!["value"]);
    }

    #[test]
    fn test_result_length_always_matches_arity() {
        for (types, expect) in [
            (vec!["java.lang.String"], 1usize),
            (vec!["java.lang.String", "int"], 2),
        ] {
            let callable = method("process", &types);
            let names = extract_parameter_names(JDK8_PAGE, &callable).unwrap();
            assert_eq!(names.len(), expect);
        }
    }

    #[test]
    fn test_normalize_type() {
        assert_eq!(normalize_type("java.lang.String"), "String");
        assert_eq!(normalize_type("String"), "String");
        assert_eq!(normalize_type("java.util.Map<String, Integer>"), "Map");
        assert_eq!(normalize_type("int..."), "int[]");
        assert_eq!(normalize_type("byte[][]"), "byte[][]");
        assert_eq!(normalize_type("java.util.List<int[]>"), "List");
    }
}
