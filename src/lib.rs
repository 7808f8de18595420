//! # Codegather
//!
//! `codegather` is a library for recursively walking a directory tree, selecting source
//! files by extension, reading their contents through an ordered encoding fallback chain,
//! and bundling everything into a single Markdown document.
//!
//! The fallback chain tries candidate encodings in order and keeps the first that accepts
//! the file's bytes. Both preset chains end with Latin-1, which maps every byte value to a
//! code point, so reading a matched file can only fail at the I/O level. Unreadable files
//! are recorded and skipped; a batch run never aborts because one file could not be read.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codegather::{GatherBuilder, EncodingChain, TraversalScope, gather};
//!
//! let options = GatherBuilder::new(".")
//!     .extensions(vec!["h".into(), "cpp".into()])
//!     .exclude_marker("(Ignore)")
//!     .scope(TraversalScope::FullTree)
//!     .chain(EncodingChain::utf16le_first())
//!     .build();
//!
//! let report = gather(options).expect("Failed to gather directory");
//!
//! for file in &report.files {
//!     println!("File: {} ({})", file.path.display(), file.encoding.name());
//! }
//! for skip in &report.skipped {
//!     eprintln!("Skipped: {} ({})", skip.path.display(), skip.reason);
//! }
//! ```

mod encoding;
mod engine;
mod error;
mod options;
pub mod output;
mod types;

pub use encoding::{Decoded, Encoding, EncodingChain};
pub use engine::gather;
pub use error::GatherError;
pub use options::{GatherBuilder, GatherOptions, TraversalScope};
pub use types::{FileEntry, GatherReport, SkippedFile};
