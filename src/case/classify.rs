use super::caser::join;
use super::tokenizer::{base_char, tokenize};
use super::CaseStyle;
use unicode_segmentation::UnicodeSegmentation;

pub fn matches(s: &str, style: CaseStyle) -> bool {
    match style {
        CaseStyle::Camel => is_camel_case(s),
        CaseStyle::Pascal => is_pascal_case(s),
        CaseStyle::Kebab => is_kebab_case(s),
        CaseStyle::Snake => is_snake_case(s),
        CaseStyle::ScreamingSnake => is_screaming_snake_case(s),
    }
}

pub fn is_snake_case(s: &str) -> bool {
    has_word(s) && all_bases(s, |c| c.is_lowercase() || c.is_numeric() || c == '_' || c == '.')
}

pub fn is_screaming_snake_case(s: &str) -> bool {
    has_word(s) && all_bases(s, |c| c.is_uppercase() || c.is_numeric() || c == '_' || c == '.')
}

pub fn is_kebab_case(s: &str) -> bool {
    has_word(s) && all_bases(s, |c| c.is_lowercase() || c.is_numeric() || c == '-' || c == '.')
}

/// Lowercase first character and already in canonical camel form.
pub fn is_camel_case(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase) && is_humped(s, CaseStyle::Camel)
}

/// Uppercase first character and already in canonical pascal form.
pub fn is_pascal_case(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase) && is_humped(s, CaseStyle::Pascal)
}

fn is_humped(s: &str, style: CaseStyle) -> bool {
    !s.contains(['_', '-']) && join(&tokenize(s), style) == s
}

// Graphemes are judged by their base char, so combining marks never count.
fn all_bases(s: &str, accept: impl Fn(char) -> bool) -> bool {
    s.graphemes(true).all(|g| accept(base_char(g)))
}

fn has_word(s: &str) -> bool {
    s.chars().any(char::is_alphanumeric)
}
