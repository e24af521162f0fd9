use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input directory {0:?} cannot be read: {1}")]
    InputUnreadable(PathBuf, String),

    #[error("Output directory {0:?} cannot be created: {1}")]
    OutputUnavailable(PathBuf, String),
}
