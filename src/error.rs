use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum GatherError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("No candidate encoding could decode {path}")]
    Decode { path: PathBuf },
}
impl GatherError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GatherError::Io {
            path: path.into(),
            source,
        }
    }
}
