use thiserror::Error;

/// Failures that abort scene initialization.
///
/// Nothing past initialization is fallible: once the choreography has
/// completed, the remaining components only read flags.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A panel image could not be fetched or decoded.
    #[error("failed to load panel texture {index} ({uri}): {reason}")]
    ResourceLoad {
        index: usize,
        uri: String,
        reason: String,
    },

    /// Panel, texture and layout tables disagree on the panel count.
    #[error("{what}: expected {expected} entries, found {actual}")]
    ResourceMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl SceneError {
    pub fn load(index: usize, uri: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceLoad {
            index,
            uri: uri.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Fails with [`SceneError::ResourceMismatch`] unless `actual == expected`.
pub fn ensure_count(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(SceneError::ResourceMismatch {
            what,
            expected,
            actual,
        })
    }
}
