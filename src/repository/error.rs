use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No item matches the requested id (or the id did not parse).
    NotFound,
    /// A field required for creation was absent.
    InvalidInput { missing: Vec<&'static str> },
    /// The id counter has passed `u64::MAX`.
    IdsExhausted,
    LockPoisoned(&'static str),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "Item not found"),
            RepositoryError::InvalidInput { .. } => {
                write!(f, "Name, description, and price are required")
            }
            RepositoryError::IdsExhausted => write!(f, "item id space exhausted"),
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}
