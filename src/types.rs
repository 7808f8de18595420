use crate::encoding::Encoding;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single gathered file with its path, decoded content, and metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The content of the file as text.
    pub content: String,
    /// The encoding that accepted the file's bytes.
    ///
    /// Informational only: the content is whatever that candidate
    /// produced, and which one succeeded does not change it.
    pub encoding: Encoding,
    /// The size of the file in bytes, if requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A file that matched the filters but could not be read.
///
/// Unreadable files never abort a run; they are recorded here and the
/// remaining files are processed.
#[derive(Debug, Serialize, Deserialize)]
pub struct SkippedFile {
    /// The path of the unreadable file.
    pub path: PathBuf,
    /// A human-readable description of the underlying failure.
    pub reason: String,
}

/// The complete result of a gather operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct GatherReport {
    /// All matched and readable files, sorted by path.
    pub files: Vec<FileEntry>,
    /// Files skipped due to I/O failures, sorted by path.
    pub skipped: Vec<SkippedFile>,
}
