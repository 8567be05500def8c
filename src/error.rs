use thiserror::Error;

/// Errors reported by navigation operations.
///
/// None of these leave the menu in a changed state: a failed operation keeps
/// the previous configuration and rendered tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The render target does not exist in the document.
    #[error("navigation container `{0}` not found")]
    MissingContainer(String),

    /// An entry with this id already exists at the top level.
    #[error("duplicate menu entry id `{0}`")]
    DuplicateId(String),

    /// Entry labels must be non-empty.
    #[error("menu entry `{0}` has an empty label")]
    EmptyLabel(String),

    #[error("invalid navigation configuration: {0}")]
    InvalidConfig(String),
}

pub type NavResult<T> = std::result::Result<T, NavError>;
