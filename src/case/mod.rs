pub mod caser;
pub mod classify;
pub mod tokenizer;

use crate::error::{Error, Result};
use crate::walker;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use classify::{
    is_camel_case, is_kebab_case, is_pascal_case, is_screaming_snake_case, is_snake_case,
    matches,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    Camel,
    Pascal,
    Kebab,
    Snake,
    ScreamingSnake,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Kebab,
        CaseStyle::Snake,
        CaseStyle::ScreamingSnake,
    ];

    /// Separator placed between words
    pub fn separator(self) -> &'static str {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Kebab => "-",
            CaseStyle::Snake | CaseStyle::ScreamingSnake => "_",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Snake => "snake",
            CaseStyle::ScreamingSnake => "screaming_snake",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");

        match normalized.as_str() {
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "kebab" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "screaming_snake" => Ok(CaseStyle::ScreamingSnake),
            _ => Err(Error::UnknownCaseStyle(s.to_string())),
        }
    }
}

pub fn to_camel_case(s: &str) -> String {
    caser::join(&tokenizer::tokenize(s), CaseStyle::Camel)
}

pub fn to_pascal_case(s: &str) -> String {
    caser::join(&tokenizer::tokenize(s), CaseStyle::Pascal)
}

pub fn to_kebab_case(s: &str) -> String {
    caser::join(&tokenizer::tokenize(s), CaseStyle::Kebab)
}

pub fn to_snake_case(s: &str, screaming: bool) -> String {
    let style = if screaming {
        CaseStyle::ScreamingSnake
    } else {
        CaseStyle::Snake
    };
    caser::join(&tokenizer::tokenize(s), style)
}

/// ASCII-only kebab-case, with dots dropped like any other separator.
///
/// Unlike [`to_kebab_case`], digits stay attached to their word (`v2`).
pub fn to_slug(s: &str) -> String {
    let folded = deunicode::deunicode(s);
    let tokens = tokenizer::tokenize_with(&folded, false);

    tokens
        .words
        .iter()
        .map(|word| word.text.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn convert_string_case(s: &str, case_style: CaseStyle) -> String {
    match case_style {
        CaseStyle::Camel => to_camel_case(s),
        CaseStyle::Pascal => to_pascal_case(s),
        CaseStyle::Kebab => to_kebab_case(s),
        CaseStyle::Snake => to_snake_case(s, false),
        CaseStyle::ScreamingSnake => to_snake_case(s, true),
    }
}

/// Converts strings and mapping keys to a fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseConverter {
    style: CaseStyle,
    preserve_dots: bool,
}

impl CaseConverter {
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            preserve_dots: true,
        }
    }

    /// Treat `.` as an ordinary separator instead of keeping it in place.
    pub fn preserve_dots(mut self, preserve: bool) -> Self {
        self.preserve_dots = preserve;
        self
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn convert(&self, s: &str) -> String {
        caser::join(&tokenizer::tokenize_with(s, self.preserve_dots), self.style)
    }

    pub fn convert_keys(&self, value: &Value) -> Result<Value> {
        walker::walk_object("convert_keys", value, &|key: &str| self.convert(key))
    }
}
