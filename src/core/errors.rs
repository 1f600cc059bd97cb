use thiserror::Error;

/// Errors reported at the call that introduced invalid input.
///
/// Ordinary "not found" and "not capable" outcomes are never errors; they come
/// back as `bool` or `Option` from the operation that looked for them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KitchenError {
    #[error("dish must have a non-empty name")]
    InvalidDish,
    #[error("backup batch must contain at least one ingredient")]
    EmptyBackupBatch,
    #[error("station '{0}' is already registered")]
    DuplicateStation(String),
    #[error("station registry is full (capacity {capacity})")]
    RegistryFull { capacity: usize },
    #[error("configuration error: {0}")]
    Config(String),
}

pub type KitchenResult<T> = Result<T, KitchenError>;

impl KitchenError {
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error came from caller input rather than setup data
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            KitchenError::InvalidDish
                | KitchenError::EmptyBackupBatch
                | KitchenError::DuplicateStation(_)
        )
    }
}
