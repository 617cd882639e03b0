use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("No free name for '{base}' with a counter up to {max_suffix}")]
    NamespaceExhausted { base: String, max_suffix: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
