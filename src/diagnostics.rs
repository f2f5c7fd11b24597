//! Error reporting for the CLI.
//!
//! Lexical and parse errors are rendered as [`ariadne`] reports labelled
//! on the offending source line; everything else (I/O, tool failures)
//! prints as a plain `Error:` line on stderr.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::CompileError;

/// Returns the byte range of the 1-based `line` in `source`.
///
/// Falls back to the end of the source when the line is out of range
/// (e.g. an error reported at an end-of-file token).
fn line_range(source: &str, line: usize) -> Range<usize> {
    let mut start = 0;
    for (current, text) in source.lines().enumerate() {
        let line_start = text.as_ptr() as usize - source.as_ptr() as usize;
        if current + 1 == line {
            return line_start..line_start + text.len().max(1);
        }
        start = line_start + text.len();
    }
    start..source.len().max(start)
}

/// Prints an ariadne report labelling `range` in `source`.
fn print_range_report(
    filename: &str,
    source: &str,
    range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Reports a source-anchored error, falling back to plain stderr output
/// if the report itself cannot be rendered.
fn report_at_line(filename: &str, source: &str, line: usize, message: &str) {
    let range = line_range(source, line);
    if let Err(report_err) = print_range_report(filename, source, range, message) {
        eprintln!("Error: {} (at {}:{})", message, filename, line);
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a compile error to stderr in the most helpful form available.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::Lex { message, line } => {
            report_at_line(filename, source, *line, message);
        }
        CompileError::Parse(parse_error) => {
            report_at_line(filename, source, parse_error.line, &parse_error.message);
        }
        other => {
            eprintln!("Error: {}", other);
        }
    }
}
