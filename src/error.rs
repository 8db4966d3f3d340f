use std::path::PathBuf;

use thiserror::Error;

use crate::translator::SyntaxError;

#[derive(Error, Debug)]
pub enum Bf2PyError {
    #[error("couldn't read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("couldn't write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error: {0}")]
    Syntax(
        #[from]
        SyntaxError,
    ),
}

impl Bf2PyError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Bf2PyError::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Bf2PyError::Write { path: path.into(), source }
    }
}
