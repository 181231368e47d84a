//! Runtime argument checks for untyped (`serde_json::Value`) input.
//!
//! The typed API takes `&str` and cannot receive the wrong kind of argument.
//! [`Operation`] exposes the same functions over JSON values, rejecting
//! anything of the wrong type before doing any work.

use crate::case::{self, CaseStyle};
use crate::error::{Error, Result};
use crate::{html, validation, walker};
use serde_json::{Map, Value};

pub fn expect_str<'a>(function: &'static str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(function, "string", value))
}

pub fn expect_object<'a>(
    function: &'static str,
    value: &'a Value,
) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| invalid(function, "object", value))
}

fn invalid(function: &'static str, expected: &'static str, value: &Value) -> Error {
    Error::InvalidArgument {
        function,
        expected,
        found: type_name(value),
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    IsSnakeCase,
    IsScreamingSnakeCase,
    IsKebabCase,
    IsCamelCase,
    IsPascalCase,
    IsNumber,
    IsPalindrome,
    IsJsonString,
    IsUuidv4String,
    IsSlug,
    ToSlug,
    ToCamelCase,
    ToPascalCase,
    ToKebabCase,
    ToSnakeCase { screaming: bool },
    ConvertStringCase(CaseStyle),
    SanitizeString,
    ConvertDictKeysCase(CaseStyle),
}

impl Operation {
    pub const ALL: [Operation; 18] = [
        Operation::IsSnakeCase,
        Operation::IsScreamingSnakeCase,
        Operation::IsKebabCase,
        Operation::IsCamelCase,
        Operation::IsPascalCase,
        Operation::IsNumber,
        Operation::IsPalindrome,
        Operation::IsJsonString,
        Operation::IsUuidv4String,
        Operation::IsSlug,
        Operation::ToSlug,
        Operation::ToCamelCase,
        Operation::ToPascalCase,
        Operation::ToKebabCase,
        Operation::ToSnakeCase { screaming: false },
        Operation::ConvertStringCase(CaseStyle::Snake),
        Operation::SanitizeString,
        Operation::ConvertDictKeysCase(CaseStyle::Snake),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::IsSnakeCase => "is_snake_case",
            Operation::IsScreamingSnakeCase => "is_screaming_snake_case",
            Operation::IsKebabCase => "is_kebab_case",
            Operation::IsCamelCase => "is_camel_case",
            Operation::IsPascalCase => "is_pascal_case",
            Operation::IsNumber => "is_number",
            Operation::IsPalindrome => "is_palindrome",
            Operation::IsJsonString => "is_json_string",
            Operation::IsUuidv4String => "is_uuidv4_string",
            Operation::IsSlug => "is_slug",
            Operation::ToSlug => "to_slug",
            Operation::ToCamelCase => "to_camel_case",
            Operation::ToPascalCase => "to_pascal_case",
            Operation::ToKebabCase => "to_kebab_case",
            Operation::ToSnakeCase { .. } => "to_snake_case",
            Operation::ConvertStringCase(_) => "convert_string_case",
            Operation::SanitizeString => "sanitize_string",
            Operation::ConvertDictKeysCase(_) => "convert_dict_keys_case",
        }
    }

    /// Whether the primary argument is a mapping rather than a string.
    pub fn takes_object(&self) -> bool {
        matches!(self, Operation::ConvertDictKeysCase(_))
    }

    pub fn apply(&self, input: &Value) -> Result<Value> {
        let name = self.name();
        let str_arg = || expect_str(name, input);

        let result = match self {
            Operation::IsSnakeCase => Value::Bool(case::is_snake_case(str_arg()?)),
            Operation::IsScreamingSnakeCase => {
                Value::Bool(case::is_screaming_snake_case(str_arg()?))
            }
            Operation::IsKebabCase => Value::Bool(case::is_kebab_case(str_arg()?)),
            Operation::IsCamelCase => Value::Bool(case::is_camel_case(str_arg()?)),
            Operation::IsPascalCase => Value::Bool(case::is_pascal_case(str_arg()?)),
            Operation::IsNumber => Value::Bool(validation::is_number(str_arg()?)),
            Operation::IsPalindrome => Value::Bool(validation::is_palindrome(str_arg()?)),
            Operation::IsJsonString => Value::Bool(validation::is_json_string(str_arg()?)),
            Operation::IsUuidv4String => Value::Bool(validation::is_uuidv4_string(str_arg()?)),
            Operation::IsSlug => Value::Bool(validation::is_slug(str_arg()?)),
            Operation::ToSlug => Value::String(case::to_slug(str_arg()?)),
            Operation::ToCamelCase => Value::String(case::to_camel_case(str_arg()?)),
            Operation::ToPascalCase => Value::String(case::to_pascal_case(str_arg()?)),
            Operation::ToKebabCase => Value::String(case::to_kebab_case(str_arg()?)),
            Operation::ToSnakeCase { screaming } => {
                Value::String(case::to_snake_case(str_arg()?, *screaming))
            }
            Operation::ConvertStringCase(style) => {
                Value::String(case::convert_string_case(str_arg()?, *style))
            }
            Operation::SanitizeString => Value::String(html::sanitize_string(str_arg()?)),
            Operation::ConvertDictKeysCase(style) => {
                walker::convert_dict_keys_case(input, *style)?
            }
        };

        Ok(result)
    }
}
