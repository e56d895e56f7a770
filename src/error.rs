//! Error types for module generation.

use thiserror::Error;

use crate::width::Signedness;

/// Errors that can occur while generating the alias module.
#[derive(Debug, Error)]
pub enum GenError {
    /// A platform type has a byte width with no standard-size alias.
    #[error("unsupported {signedness} type size {width}")]
    UnsupportedWidth { signedness: Signedness, width: usize },

    /// Writing the generated text or a diagnostic failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Create an unsupported-width error.
    pub fn unsupported_width(width: usize, signedness: Signedness) -> Self {
        Self::UnsupportedWidth { signedness, width }
    }

    /// Whether this error is recoverable by substituting a placeholder.
    pub fn is_unsupported_width(&self) -> bool {
        matches!(self, Self::UnsupportedWidth { .. })
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
