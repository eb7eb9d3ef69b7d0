use thiserror::Error;

/// Errors raised while building the engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog IO error: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
