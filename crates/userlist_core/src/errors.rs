use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserListError {
    /// The name source could not be read at startup. Fatal.
    #[error("failed to initialize user data from {}", path.display())]
    Initialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("no names start with letter '{0}'")]
    LetterNotFound(char),
}

pub type Result<T> = std::result::Result<T, UserListError>;
