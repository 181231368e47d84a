use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;
use uuid::{Uuid, Variant, Version};

pub use crate::case::{
    is_camel_case, is_kebab_case, is_pascal_case, is_screaming_snake_case, is_snake_case,
};

lazy_static! {
    static ref SLUG: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// True when the string parses as an integer or a float.
pub fn is_number(s: &str) -> bool {
    let trimmed = s.trim();
    !trimmed.is_empty() && (trimmed.parse::<i128>().is_ok() || trimmed.parse::<f64>().is_ok())
}

/// Compares alphanumeric graphemes only, ignoring case.
pub fn is_palindrome(s: &str) -> bool {
    let graphemes: Vec<String> = s
        .graphemes(true)
        .filter(|g| g.chars().any(char::is_alphanumeric))
        .map(str::to_lowercase)
        .collect();

    graphemes.iter().eq(graphemes.iter().rev())
}

/// Only objects and arrays count; JSON scalars are rejected.
pub fn is_json_string(s: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(s),
        Ok(Value::Object(_) | Value::Array(_))
    )
}

/// Accepts the hyphenated form and the 32 hex digit form.
pub fn is_uuidv4_string(s: &str) -> bool {
    if s.len() != 36 && s.len() != 32 {
        return false;
    }

    match Uuid::try_parse(s) {
        Ok(uuid) => {
            uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

pub fn is_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number() {
        assert!(is_number("2"));
        assert!(is_number("3.14"));
        assert!(is_number("-17"));
        assert!(is_number("1e10"));
        assert!(is_number(" 42 "));

        assert!(!is_number("2/2"));
        assert!(!is_number(""));
        assert!(!is_number("twelve"));
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("tattarrattat"));
        assert!(is_palindrome("Bob"));
        assert!(is_palindrome("LOL"));
        assert!(is_palindrome("Alucard = Dracula"));
        assert!(is_palindrome("Level"));

        assert!(!is_palindrome("Hello"));
    }

    #[test]
    fn test_is_json_string() {
        assert!(is_json_string(r#"["hello", "gentleman", {"an": "object"}]"#));
        assert!(is_json_string("{}"));
        assert!(is_json_string("[]"));
        assert!(is_json_string(r#"{"aList": [1, 2, 3, 4, {"aNumber": 5}]}"#));

        assert!(!is_json_string("None"));
        assert!(!is_json_string("1"));
        assert!(!is_json_string("\"a string\""));
        assert!(!is_json_string("Hello there"));
        assert!(!is_json_string("(1, 2)"));
        assert!(!is_json_string(r#"{"a set"}"#));
    }

    #[test]
    fn test_is_uuidv4_string() {
        let uuid = Uuid::new_v4();
        assert!(is_uuidv4_string(&uuid.hyphenated().to_string()));
        assert!(is_uuidv4_string(&uuid.simple().to_string()));
        assert!(is_uuidv4_string(&uuid.hyphenated().to_string().to_uppercase()));

        // version 1
        assert!(!is_uuidv4_string("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
        assert!(!is_uuidv4_string(&uuid.urn().to_string()));
        assert!(!is_uuidv4_string("None"));
        assert!(!is_uuidv4_string("1"));
        assert!(!is_uuidv4_string("Hello there"));
        assert!(!is_uuidv4_string(r#"{"aList": [1, 2, 3, 4, {"aNumber": 5}]}"#));
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("monkey-d-luffy"));
        assert!(is_slug("v2"));

        assert!(!is_slug(""));
        assert!(!is_slug("Monkey-D-Luffy"));
        assert!(!is_slug("double--dash"));
        assert!(!is_slug("-leading"));
        assert!(!is_slug("snake_case"));
    }
}
