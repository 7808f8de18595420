use crate::encoding::EncodingChain;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalScope {
    /// Every directory under the root.
    FullTree,
    /// Files directly in the root, plus files whose relative path
    /// passes through a directory component named `src`.
    SrcOnly,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatherOptions {
    pub root: PathBuf,
    /// Extensions matched against the file name suffix, without the dot.
    pub extensions: Vec<String>,
    /// Files whose name contains this substring are skipped regardless
    /// of extension.
    pub exclude_marker: Option<String>,
    pub scope: TraversalScope,
    pub chain: EncodingChain,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
    pub include_file_size: bool,
}
impl Default for GatherOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: vec!["h".to_string(), "cpp".to_string()],
            exclude_marker: None,
            scope: TraversalScope::FullTree,
            chain: EncodingChain::utf8_first(),
            respect_gitignore: false,
            max_depth: None,
            include_hidden: true,
            follow_links: false,
            ignore_patterns: Vec::new(),
            include_file_size: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct GatherBuilder {
    options: GatherOptions,
}
impl GatherBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: GatherOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.options.extensions = extensions;
        self
    }
    pub fn exclude_marker(mut self, marker: impl Into<String>) -> Self {
        self.options.exclude_marker = Some(marker.into());
        self
    }
    pub fn no_exclude_marker(mut self) -> Self {
        self.options.exclude_marker = None;
        self
    }
    pub fn scope(mut self, scope: TraversalScope) -> Self {
        self.options.scope = scope;
        self
    }
    pub fn chain(mut self, chain: EncodingChain) -> Self {
        self.options.chain = chain;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn include_file_size(mut self, yes: bool) -> Self {
        self.options.include_file_size = yes;
        self
    }
    pub fn build(self) -> GatherOptions {
        self.options
    }
}
