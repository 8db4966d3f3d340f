pub mod translator;

use thiserror::Error;

pub use translator::{translate, Translation, Translator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("line {line}, found ']' without matching '['")]
    UnmatchedLoopClose { line: usize, column: usize },

    // Only detectable once the whole source has been scanned
    #[error("found '[' without matching ']'")]
    UnmatchedLoopOpen,
}

impl SyntaxError {
    pub fn line(&self) -> Option<usize> {
        match self {
            SyntaxError::UnmatchedLoopClose { line, .. } => Some(*line),
            SyntaxError::UnmatchedLoopOpen => None,
        }
    }
}
