use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BufplotError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Failed to write chart image: {0}")]
    OutputWrite(String),
}

pub type Result<T> = std::result::Result<T, BufplotError>;
