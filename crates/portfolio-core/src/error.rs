//! Error types for Mash Portfolio

use thiserror::Error;

/// Main error type for portfolio operations
///
/// Navigation mistakes never show up here; they are clamped or ignored by
/// the controllers. These variants cover configuration-time defects.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A catalog was configured without any entries
    #[error("Catalog '{0}' has no entries")]
    EmptyCatalog(String),

    /// Two entries in one catalog share an id
    #[error("Catalog '{catalog}' contains duplicate entry id '{id}'")]
    DuplicateEntryId { catalog: String, id: String },

    /// Category slug did not match any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Site configuration is structurally valid JSON but semantically wrong
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
