use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrriplanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, IrriplanError>;
