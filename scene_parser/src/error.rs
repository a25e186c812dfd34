use std::path::PathBuf;

use thiserror::Error;

use crate::stream::Lexeme;

/// Anything that stops a parse. `Syntax` mirrors the usual "expected X, got Y" report: `expected`
/// is either literal token text or a placeholder category such as `_Real_` or `_SceneItem_`, and
/// `actual` is the offending token, `_EOF_` at end of input.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, got {actual}")]
    Syntax {
        expected: String,
        actual: String,
        line: usize,
    },
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {message}", .path.display())]
    Mesh {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub fn syntax(expected: &str, actual: &Lexeme) -> Self {
        ParseError::Syntax {
            expected: expected.to_owned(),
            actual: actual.to_string(),
            line: actual.line,
        }
    }

    /// Line the error was detected on, in the scene file or the mesh file respectively.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } | ParseError::Mesh { line, .. } => Some(*line),
            ParseError::Io { .. } => None,
        }
    }
}
