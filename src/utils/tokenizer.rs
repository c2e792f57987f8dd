use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters stripped from file content before splitting
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.,!"'?()]"#).expect("punctuation pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Normalize raw file content into a single-spaced, lowercase string.
///
/// Punctuation from the fixed set `. , ! " ' ? ( )` becomes a space, every
/// run of two or more whitespace characters becomes one space, and the
/// result is lowercased. A lone tab or newline is left alone, so words joined
/// by a single line break stay one token.
pub fn normalize(content: &str) -> String {
    let stripped = PUNCTUATION.replace_all(content, " ");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.to_lowercase()
}

/// Split content into the distinct tokens it contains.
///
/// Leading or trailing separators leave an empty token behind; it is kept
/// only when `keep_empty` is set.
pub fn extract_words(content: &str, keep_empty: bool) -> HashSet<String> {
    normalize(content)
        .split(' ')
        .filter(|word| keep_empty || !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Normalize a query word. Queries are matched as a single exact token, so
/// only case is folded.
pub fn normalize_query(word: &str) -> String {
    word.to_lowercase()
}

/// Derive the identifier reported for a file: its relative path with the
/// extension of the final path element removed.
pub fn file_identifier(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(dot) => &path[..name_start + dot],
        None => path,
    }
}
