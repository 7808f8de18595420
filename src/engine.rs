use crate::error::GatherError;
use crate::options::{GatherOptions, TraversalScope};
use crate::types::{FileEntry, GatherReport, SkippedFile};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &GatherOptions) -> Result<Self, GatherError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .git_ignore(options.respect_gitignore)
            .hidden(!options.include_hidden)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false);
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    GatherError::Walk(format!("Invalid glob pattern '{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| GatherError::Walk(format!("Failed to build glob set: {}", e)))?;
            builder.filter_entry(move |entry| !matcher.is_match(entry.path()));
        }
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn collect_entries(self) -> Result<Vec<PathBuf>, GatherError> {
        self.inner
            .map(|result| match result {
                Ok(entry) => Ok(entry.path().to_path_buf()),
                Err(e) => Err(GatherError::Walk(e.to_string())),
            })
            .collect()
    }
}
fn matches_filters(path: &Path, options: &GatherOptions) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if let Some(marker) = &options.exclude_marker {
        if name.contains(marker.as_str()) {
            return false;
        }
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => options.extensions.iter().any(|e| e == ext),
        None => false,
    }
}
fn in_scope(path: &Path, root: &Path, scope: TraversalScope) -> bool {
    match scope {
        TraversalScope::FullTree => true,
        TraversalScope::SrcOnly => {
            let relative = path.strip_prefix(root).unwrap_or(path);
            match relative.parent() {
                None => true,
                Some(parent) => {
                    parent.as_os_str().is_empty()
                        || parent.components().any(|c| c.as_os_str() == "src")
                }
            }
        }
    }
}
fn read_file_entry(path: &Path, options: &GatherOptions) -> Result<FileEntry, GatherError> {
    let bytes = fs::read(path).map_err(|e| GatherError::io(path, e))?;
    let decoded = options.chain.decode(&bytes).ok_or_else(|| GatherError::Decode {
        path: path.to_path_buf(),
    })?;
    #[cfg(feature = "logging")]
    if options.chain.candidates().first() != Some(&decoded.encoding) {
        tracing::debug!(
            "Read {} via fallback encoding {}",
            path.display(),
            decoded.encoding.name()
        );
    }
    let size = if options.include_file_size {
        Some(bytes.len() as u64)
    } else {
        None
    };
    Ok(FileEntry {
        path: path.to_path_buf(),
        content: decoded.text,
        encoding: decoded.encoding,
        size,
    })
}
pub fn gather(options: GatherOptions) -> Result<GatherReport, GatherError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting gather with root: {}", options.root.display());
    let walker = Walker::new(&options)?;
    let all_entries = walker.collect_entries()?;
    let mut matched: Vec<PathBuf> = all_entries
        .into_iter()
        .filter(|p| p.is_file())
        .filter(|p| matches_filters(p, &options))
        .filter(|p| in_scope(p, &options.root, options.scope))
        .collect();
    // Lexicographic order makes repeated runs byte-identical.
    matched.sort();
    let mut files = Vec::with_capacity(matched.len());
    let mut skipped = Vec::new();
    for path in matched {
        match read_file_entry(&path, &options) {
            Ok(entry) => files.push(entry),
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {}: {}", path.display(), e);
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(GatherReport { files, skipped })
}
