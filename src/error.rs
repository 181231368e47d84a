use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The primary argument had the wrong runtime type.
    #[error("{function}: expected {expected}, got {found}")]
    InvalidArgument {
        function: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown case style: '{0}'")]
    UnknownCaseStyle(String),
}
