use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

pub type SyntaxDictionary = BTreeMap<String, String>;

const STOPLIST: [&str; 29] = [
    "and",
    "or",
    "not",
    "where",
    "is",
    "has",
    "any",
    "all",
    "inherit",
    "initial",
    "unset",
    "revert",
    "length",
    "percentage",
    "number",
    "integer",
    "string",
    "color",
    "image",
    "url",
    "calc",
    "var",
    "env",
    "attr",
    "global",
    "values",
    "keyword",
    "value",
    "property",
];

const NON_KEYWORD_CHARS: &[char] = &['(', ')', '[', ']', '{', '}', '#', '%', '<', '>'];

fn type_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<([^>]+)>").expect("type reference pattern is valid"))
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?-u:\b)([a-z-]+|[0-9]+)(?-u:\b)").expect("token pattern is valid")
    })
}

pub fn extract_keywords(syntax: &str, dictionary: &SyntaxDictionary) -> Vec<String> {
    let expanded = expand_syntax_types(syntax, dictionary);
    let mut keywords = BTreeSet::new();

    for token in tokenize(&expanded) {
        if is_keyword(token) {
            keywords.insert(token.to_ascii_lowercase());
        }
    }

    keywords.into_iter().collect()
}

/// Replaces each `<name>` found in `dictionary` with its syntax.
///
/// Single pass: references inside substituted text stay as they are, and
/// unknown references are left verbatim.
pub fn expand_syntax_types(syntax: &str, dictionary: &SyntaxDictionary) -> String {
    if dictionary.is_empty() {
        return syntax.to_string();
    }

    type_reference_pattern()
        .replace_all(syntax, |caps: &regex::Captures<'_>| match dictionary.get(&caps[1]) {
            Some(definition) => definition.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

pub fn tokenize(expanded: &str) -> impl Iterator<Item = &str> {
    token_pattern().find_iter(expanded).map(|m| m.as_str())
}

pub fn is_keyword(token: &str) -> bool {
    let token = token.to_ascii_lowercase();
    let numeric = is_numeric(&token);

    if token.len() < 2 && !numeric {
        return false;
    }
    if token.contains(NON_KEYWORD_CHARS) {
        return false;
    }
    if STOPLIST.contains(&token.as_str()) {
        return false;
    }

    true
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}
