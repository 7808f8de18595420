use codegather::output::{format_report, write_report_to_file, MarkdownStyle, OutputFormat};
use codegather::{gather, EncodingChain, GatherBuilder};
use std::fs;
use tempfile::tempdir;

#[test]
fn integration_full_flow_fenced_markdown() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.cpp"), "int main() { return 0; }\n").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/util.h"), "#pragma once\n").unwrap();
    let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(report.files.len(), 2);

    let doc = format_report(
        &report,
        OutputFormat::Markdown(MarkdownStyle::Fenced),
        dir.path(),
        false,
    );
    assert!(doc.contains("## main.cpp\n\n```cpp\nint main() { return 0; }\n```\n\n"));
    assert!(doc.contains("## src/util.h\n\n```cpp\n#pragma once\n```\n\n"));
}

#[test]
fn integration_rule_marker_markdown() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.h"), "int a;\n").unwrap();
    let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
    let doc = format_report(
        &report,
        OutputFormat::Markdown(MarkdownStyle::RuleMarker),
        dir.path(),
        false,
    );
    assert_eq!(doc, "## a.h\nint a;\n\n****\n");
}

#[test]
fn integration_round_trip_ascii_content() {
    let content = "struct Point { int x; int y; };\n";
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("point.h"), content).unwrap();
    let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
    let doc = format_report(
        &report,
        OutputFormat::Markdown(MarkdownStyle::Fenced),
        dir.path(),
        false,
    );
    let body = doc
        .strip_prefix("## point.h\n\n```cpp\n")
        .and_then(|rest| rest.strip_suffix("```\n\n"))
        .unwrap();
    assert_eq!(body, content);
}

#[test]
fn integration_idempotent_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.cpp"), "int b;\n").unwrap();
    fs::write(dir.path().join("a.cpp"), "int a;\n").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/c.h"), "int c;\n").unwrap();

    let run = || {
        let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
        format_report(
            &report,
            OutputFormat::Markdown(MarkdownStyle::Fenced),
            dir.path(),
            false,
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn integration_mixed_encodings() {
    let dir = tempdir().unwrap();
    // Odd byte count so the UTF-16LE candidate rejects it; even-length
    // ASCII decodes as valid UTF-16 code units.
    fs::write(dir.path().join("ascii.cpp"), "int x;\n").unwrap();
    let utf16: Vec<u8> = "wide text"
        .encode_utf16()
        .flat_map(|u| u.to_le_bytes())
        .collect();
    fs::write(dir.path().join("wide.cpp"), &utf16).unwrap();
    fs::write(dir.path().join("legacy.cpp"), [0xC3, 0x28, 0x3B]).unwrap();

    let options = GatherBuilder::new(dir.path())
        .chain(EncodingChain::utf16le_first())
        .build();
    let report = gather(options).unwrap();
    assert_eq!(report.files.len(), 3);
    assert!(report.skipped.is_empty());

    let by_name = |name: &str| {
        report
            .files
            .iter()
            .find(|f| f.path.ends_with(name))
            .unwrap()
    };
    assert_eq!(by_name("ascii.cpp").content, "int x;\n");
    assert_eq!(by_name("wide.cpp").content, "wide text");
    assert_eq!(by_name("legacy.cpp").content, "\u{c3}(;");
}

#[test]
fn integration_write_report_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.cpp"), "int a;\n").unwrap();
    let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
    let out_path = dir.path().join("code.md");
    write_report_to_file(
        &report,
        OutputFormat::Markdown(MarkdownStyle::Fenced),
        dir.path(),
        &out_path,
        false,
    )
    .unwrap();
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("## a.cpp\n"));
}

#[test]
fn integration_json_format_parses() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.h"), "int a;\n").unwrap();
    let report = gather(GatherBuilder::new(dir.path()).build()).unwrap();
    let json = format_report(&report, OutputFormat::Json, dir.path(), true);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files"].as_array().unwrap().len(), 1);
    assert_eq!(value["files"][0]["encoding"], "Utf8");
}
