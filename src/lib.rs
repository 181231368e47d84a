pub mod case;
pub mod config;
pub mod error;
pub mod guard;
pub mod html;
pub mod validation;
pub mod walker;

pub use case::{
    convert_string_case, to_camel_case, to_kebab_case, to_pascal_case, to_slug, to_snake_case,
    CaseConverter, CaseStyle,
};
pub use config::Config;
pub use error::{Error, Result};
pub use guard::Operation;
pub use html::sanitize_string;
pub use validation::{
    is_camel_case, is_json_string, is_kebab_case, is_number, is_palindrome, is_pascal_case,
    is_screaming_snake_case, is_slug, is_snake_case, is_uuidv4_string,
};
pub use walker::convert_dict_keys_case;
