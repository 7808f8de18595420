//! Output formatting for gather reports.
//!
//! Provides functions to format a [`GatherReport`] into Markdown (two
//! styles), JSON, or a plain path listing. All formatting preserves
//! the exact decoded content of files; section headings use the path
//! relative to the gather root.

use crate::{GatherError, GatherReport};
use std::fs;
use std::path::Path;

/// How file sections are laid out in the Markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownStyle {
    /// A `##` heading followed by the content in a fenced code block
    /// tagged with a language derived from the file extension.
    Fenced,
    /// A `##` heading, the raw content, then a literal `****` rule line.
    RuleMarker,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown(MarkdownStyle),
    Json,
    Paths,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown(_) => "md",
            OutputFormat::Json => "json",
            OutputFormat::Paths => "txt",
        }
    }
}

/// Formats the gather report into a string.
pub fn format_report(
    report: &GatherReport,
    format: OutputFormat,
    root: &Path,
    pretty: bool,
) -> String {
    match format {
        OutputFormat::Markdown(style) => format_markdown(report, style, root),
        OutputFormat::Json => format_json(report, pretty),
        OutputFormat::Paths => format_paths(report),
    }
}

/// Writes the formatted report to a file, UTF-8 encoded.
///
/// A write failure here is terminal for the run, unlike per-file read
/// failures during gathering.
pub fn write_report_to_file(
    report: &GatherReport,
    format: OutputFormat,
    root: &Path,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), GatherError> {
    let content = format_report(report, format, root, pretty);
    fs::write(&path, content).map_err(|e| GatherError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(report: &GatherReport, style: MarkdownStyle, root: &Path) -> String {
    let mut out = String::with_capacity(1024);

    for file in &report.files {
        let heading = file.path.strip_prefix(root).unwrap_or(&file.path);
        match style {
            MarkdownStyle::Fenced => {
                let ext = file.path.extension().and_then(|e| e.to_str()).unwrap_or("");
                let lang = language_from_extension(ext);
                out.push_str(&format!("## {}\n\n```{}\n", heading.display(), lang));
                out.push_str(&file.content);
                if !file.content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n\n");
            }
            MarkdownStyle::RuleMarker => {
                out.push_str(&format!("## {}\n", heading.display()));
                out.push_str(&file.content);
                out.push_str("\n****\n");
            }
        }
    }
    out
}

fn format_paths(report: &GatherReport) -> String {
    let mut out = String::with_capacity(1024);
    for file in &report.files {
        out.push_str(&format!("{}\n", file.path.display()));
    }
    out
}

fn format_json(report: &GatherReport, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(report).expect("JSON serialization failed")
    } else {
        serde_json::to_string(report).expect("JSON serialization failed")
    }
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "rs" => "rust", "toml" => "toml", "json" => "json", "md" | "markdown" => "markdown",
        "txt" => "text", "html" | "htm" => "html", "css" => "css", "js" => "javascript",
        "py" => "python", "sh" | "bash" => "bash", "yml" | "yaml" => "yaml", "xml" => "xml",
        "c" => "c", "cpp" | "cc" | "cxx" | "h" | "hpp" => "cpp",
        "go" => "go", "rb" => "ruby", "php" => "php", "swift" => "swift",
        "kt" | "kts" => "kotlin", "scala" => "scala", "dart" => "dart",
        _ => "",
    }
}
