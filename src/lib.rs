use thiserror::Error;

pub type Result<T> = std::result::Result<T, FaqError>;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Corpus load error: {0}")]
    Load(String),

    #[error("Index build error: {0}")]
    IndexBuild(String),

    #[error("Invalid threshold {0}: must be within [0.0, 1.0]")]
    InvalidThreshold(f32),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod commands;
pub mod config;
pub mod corpus;
pub mod matcher;
