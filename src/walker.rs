use crate::case::{convert_string_case, CaseStyle};
use crate::error::Result;
use crate::guard;
use log::trace;
use serde_json::{Map, Value};

/// Rename every mapping key in `value` to `case_style`, recursing through
/// nested objects and arrays. Values other than keys are left untouched.
pub fn convert_dict_keys_case(value: &Value, case_style: CaseStyle) -> Result<Value> {
    walk_object("convert_dict_keys_case", value, &|key: &str| {
        convert_string_case(key, case_style)
    })
}

pub(crate) fn walk_object(
    function: &'static str,
    value: &Value,
    rename: &dyn Fn(&str) -> String,
) -> Result<Value> {
    let map = guard::expect_object(function, value)?;
    Ok(Value::Object(rename_keys(map, rename, 0)))
}

fn rename_keys(
    map: &Map<String, Value>,
    rename: &dyn Fn(&str) -> String,
    depth: usize,
) -> Map<String, Value> {
    trace!("renaming {} keys at depth {}", map.len(), depth);

    map.iter()
        .map(|(key, value)| (rename(key), walk(value, rename, depth + 1)))
        .collect()
}

fn walk(value: &Value, rename: &dyn Fn(&str) -> String, depth: usize) -> Value {
    match value {
        Value::Object(map) => Value::Object(rename_keys(map, rename, depth)),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| walk(item, rename, depth)).collect())
        }
        scalar => scalar.clone(),
    }
}
