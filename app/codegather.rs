//! Command-line interface for codegather.
//!
//! This binary walks a directory tree, gathers matching source files
//! through the encoding fallback chain, and writes the result as a
//! Markdown document (or JSON / path listing).

use clap::{Parser, ValueEnum};
use codegather::{
    gather, output, EncodingChain, GatherBuilder, GatherOptions, GatherReport, TraversalScope,
};
use std::path::{Path, PathBuf};
use std::process::exit;

/// codegather — bundle source files into one Markdown document
#[derive(Parser)]
#[command(name = "codegather", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "code.md")]
    output: PathBuf,

    /// Print to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Recognized extensions, without the dot (can be repeated)
    #[arg(short, long = "ext", default_values_t = vec!["h".to_string(), "cpp".to_string()])]
    extensions: Vec<String>,

    /// Skip files whose name contains this substring
    #[arg(long)]
    exclude_marker: Option<String>,

    /// Traversal scope
    #[arg(long, value_enum, default_value_t = Scope::FullTree)]
    scope: Scope,

    /// Encoding fallback order
    #[arg(long, value_enum, default_value_t = EncodingOrder::Utf8First)]
    encoding_order: EncodingOrder,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Markdown section style
    #[arg(long, value_enum, default_value_t = Style::Fenced)]
    style: Style,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Respect .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Record file sizes in the report
    #[arg(long)]
    file_size: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Scope {
    FullTree,
    SrcOnly,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EncodingOrder {
    Utf8First,
    Utf16leFirst,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
    Paths,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Style {
    Fenced,
    Rule,
}

impl Cli {
    fn into_options(self) -> (GatherOptions, PathBuf, bool, output::OutputFormat, bool) {
        let chain = match self.encoding_order {
            EncodingOrder::Utf8First => EncodingChain::utf8_first(),
            EncodingOrder::Utf16leFirst => EncodingChain::utf16le_first(),
        };
        let scope = match self.scope {
            Scope::FullTree => TraversalScope::FullTree,
            Scope::SrcOnly => TraversalScope::SrcOnly,
        };
        let style = match self.style {
            Style::Fenced => output::MarkdownStyle::Fenced,
            Style::Rule => output::MarkdownStyle::RuleMarker,
        };
        let format = match self.format {
            Format::Markdown => output::OutputFormat::Markdown(style),
            Format::Json => output::OutputFormat::Json,
            Format::Paths => output::OutputFormat::Paths,
        };

        let mut builder = GatherBuilder::new(self.root)
            .extensions(self.extensions)
            .scope(scope)
            .chain(chain)
            .respect_gitignore(self.gitignore)
            .include_hidden(!self.no_hidden)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns)
            .include_file_size(self.file_size);

        if let Some(marker) = self.exclude_marker {
            builder = builder.exclude_marker(marker);
        }
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        (builder.build(), self.output, self.stdout, format, self.pretty)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, output_path, to_stdout, format, pretty) = cli.into_options();
    let root = options.root.clone();

    let report = match gather(options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    for skip in &report.skipped {
        eprintln!("warning: skipping {}: {}", skip.path.display(), skip.reason);
    }

    if report.files.is_empty() {
        println!("No matching files found under {}", root.display());
        return;
    }

    if to_stdout {
        print!("{}", output::format_report(&report, format, &root, pretty));
        return;
    }

    write_report(&report, format, &root, &output_path, pretty);
}

fn write_report(
    report: &GatherReport,
    format: output::OutputFormat,
    root: &Path,
    path: &Path,
    pretty: bool,
) {
    match output::write_report_to_file(report, format, root, path, pretty) {
        Ok(()) => println!(
            "Gathered {} file(s) into {}",
            report.files.len(),
            path.display()
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
