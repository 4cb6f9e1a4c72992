use std::path::PathBuf;

use fruitbox::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not read tokens: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed token list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration file {} does not exist", .0.display())]
    MissingConfig(PathBuf),
    #[error("bad configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error("invalid input: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<ValidationError>),
}

impl From<figment::Error> for AppError {
    fn from(value: figment::Error) -> Self {
        Self::Config(Box::new(value))
    }
}
