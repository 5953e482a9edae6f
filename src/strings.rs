//! String utilities: splitting, tokenizing, censoring, wildcard matching,
//! word-aware truncation, and placeholder interpolation.

use glob_match::glob_match;
use regex::Regex;
use std::collections::HashMap;

/// Default suffix appended by [`truncate_words`] when text is dropped.
pub const ELLIPSIS: &str = "\u{2026}";

/// Split on a delimiter, trimming each piece and dropping empty pieces.
///
/// `split_list("a, b,, c", ",")` yields `["a", "b", "c"]`.
pub fn split_list(value: &str, delimiter: &str) -> Vec<String> {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize into words by splitting on runs of non-word characters.
pub fn words(value: &str) -> Vec<String> {
    let re = Regex::new(r"\W+").unwrap();
    re.split(value)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Mask bad words in `value`, case-insensitively and bounded by word
/// boundaries so substrings inside longer words survive.
///
/// A literal `*` inside a bad word matches any run of word characters
/// (`"scam*"` also censors `"scammers"`). When `replacement` is `None`,
/// each censored word is masked by `#` repeated to its length; otherwise
/// the replacement string is used verbatim.
pub fn censor(value: &str, bad_words: &[&str], replacement: Option<&str>) -> String {
    let mut out = value.to_string();

    for word in bad_words {
        if word.is_empty() {
            continue;
        }

        let escaped = regex::escape(word).replace(r"\*", r"\w*?");
        let Ok(re) = Regex::new(&format!(r"(?i)\b{}\b", escaped)) else {
            continue;
        };

        out = re
            .replace_all(&out, |caps: &regex::Captures| match replacement {
                Some(mask) => mask.to_string(),
                None => "#".repeat(caps[0].chars().count()),
            })
            .into_owned();
    }

    out
}

/// Shell-glob wildcard matching (`*`, `?`, character classes).
pub fn wildcard_match(pattern: &str, value: &str) -> bool {
    glob_match(pattern, value)
}

/// Truncate to roughly `limit` characters without splitting words.
///
/// Newlines are folded into spaces and space runs collapsed before
/// counting. Whole words are kept until the accumulated length reaches
/// `limit`; if anything was dropped, `suffix` (default [`ELLIPSIS`]) is
/// appended.
pub fn truncate_words(value: &str, limit: usize, suffix: Option<&str>) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let flattened = value.replace("\r\n", " ").replace(['\r', '\n'], " ");
    let collapsed = Regex::new(r" {2,}")
        .unwrap()
        .replace_all(&flattened, " ")
        .into_owned();

    if collapsed.chars().count() <= limit {
        return collapsed;
    }

    let mut out = String::new();
    for word in collapsed.split(' ') {
        out.push_str(word);
        out.push(' ');
        if out.chars().count() >= limit {
            break;
        }
    }

    let out = out.trim_end().to_string();
    if out.chars().count() == collapsed.chars().count() {
        out
    } else {
        out + suffix.unwrap_or(ELLIPSIS)
    }
}

/// Substitute `{key}` placeholders from key/value pairs.
///
/// Placeholders without a matching key are left intact.
pub fn interpolate(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

/// Substitute `{key}` placeholders from a map.
pub fn interpolate_map(template: &str, variables: &HashMap<String, String>) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(split_list("a, b ,, c", ","), vec!["a", "b", "c"]);
        assert_eq!(split_list("  ", ","), Vec::<String>::new());
    }

    #[test]
    fn words_splits_on_non_word_runs() {
        assert_eq!(
            words("hello, world -- again!"),
            vec!["hello", "world", "again"]
        );
        assert_eq!(words("snake_case stays"), vec!["snake_case", "stays"]);
    }

    #[test]
    fn censor_masks_to_word_length() {
        assert_eq!(
            censor("what the frack", &["frack"], None),
            "what the #####"
        );
    }

    #[test]
    fn censor_is_case_insensitive() {
        assert_eq!(censor("FRACK that", &["frack"], None), "##### that");
    }

    #[test]
    fn censor_respects_word_boundaries() {
        assert_eq!(censor("classic", &["ass"], None), "classic");
    }

    #[test]
    fn censor_uses_replacement_when_given() {
        assert_eq!(
            censor("what the frack", &["frack"], Some("[redacted]")),
            "what the [redacted]"
        );
    }

    #[test]
    fn censor_expands_star_to_word_chars() {
        assert_eq!(censor("those scammers", &["scam*"], None), "those ########");
    }

    #[test]
    fn wildcard_match_covers_glob_forms() {
        assert!(wildcard_match("*.log", "app.log"));
        assert!(wildcard_match("db-??", "db-01"));
        assert!(!wildcard_match("*.log", "app.txt"));
    }

    #[test]
    fn truncate_words_returns_short_input_unchanged() {
        assert_eq!(truncate_words("short", 10, None), "short");
    }

    #[test]
    fn truncate_words_breaks_on_word_boundary() {
        let out = truncate_words("the quick brown fox jumps", 12, None);
        assert_eq!(out, format!("the quick brown{}", ELLIPSIS));
    }

    #[test]
    fn truncate_words_collapses_whitespace_first() {
        let out = truncate_words("one  two\nthree four five six seven", 13, None);
        assert_eq!(out, format!("one two three{}", ELLIPSIS));
    }

    #[test]
    fn truncate_words_honors_custom_suffix() {
        let out = truncate_words("alpha beta gamma delta", 11, Some("..."));
        assert_eq!(out, "alpha beta...");
    }

    #[test]
    fn interpolate_replaces_known_keys_only() {
        let out = interpolate("{greeting}, {name}! {missing}", &[("greeting", "hi"), ("name", "ada")]);
        assert_eq!(out, "hi, ada! {missing}");
    }

    #[test]
    fn interpolate_map_matches_slice_variant() {
        let mut vars = HashMap::new();
        vars.insert("a".to_string(), "1".to_string());
        assert_eq!(interpolate_map("{a}{a}", &vars), "11");
    }
}
