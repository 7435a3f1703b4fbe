use std::io::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use ternlint_linter::Diagnostic;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A one-indexed line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct SourceLocation {
    pub(crate) row: usize,
    pub(crate) column: usize,
}

/// Converts a byte offset into a one-indexed line and column.
pub(crate) fn source_location(source: &str, offset: u32) -> SourceLocation {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let row = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |index| index + 1);
    SourceLocation {
        row,
        column: offset - line_start + 1,
    }
}

/// One finding in a form suitable for machine output.
#[derive(Debug, Serialize)]
pub(crate) struct Message<'a> {
    pub(crate) filename: &'a str,
    pub(crate) code: &'static str,
    pub(crate) message: String,
    pub(crate) location: SourceLocation,
    pub(crate) end_location: SourceLocation,
}

impl<'a> Message<'a> {
    pub(crate) fn from_diagnostic(
        diagnostic: Diagnostic,
        filename: &'a str,
        source: &str,
    ) -> Self {
        Self {
            filename,
            code: diagnostic.rule.code(),
            message: diagnostic.body,
            location: source_location(source, diagnostic.range.start()),
            end_location: source_location(source, diagnostic.range.end()),
        }
    }
}

pub(crate) fn write_text(writer: &mut impl Write, messages: &[Message]) -> Result<()> {
    for message in messages {
        writeln!(
            writer,
            "{}{}{}{}{} {} {}",
            message.filename.bold(),
            ":".cyan(),
            message.location.row,
            ":".cyan(),
            message.location.column,
            message.code.red().bold(),
            message.message
        )?;
    }
    if !messages.is_empty() {
        let count = messages.len();
        let noun = if count == 1 { "error" } else { "errors" };
        writeln!(writer, "Found {count} {noun}.")?;
    }
    Ok(())
}

pub(crate) fn write_json(writer: &mut impl Write, messages: &[Message]) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(messages)?)?;
    Ok(())
}

/// Reports a parse failure for one file.
pub(crate) fn write_parse_error(
    writer: &mut impl Write,
    filename: &str,
    source: &str,
    error: &ternlint_parser::ParseError,
) -> Result<()> {
    let location = source_location(source, error.location.start());
    writeln!(
        writer,
        "{}{}{}{}{} {} {}",
        filename.bold(),
        ":".cyan(),
        location.row,
        ":".cyan(),
        location.column,
        "error:".red().bold(),
        error.error
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{source_location, SourceLocation};

    #[test]
    fn location_of_offset() {
        let source = "a ? 1 : 2\nb ? 3 : 4\n";
        assert_eq!(source_location(source, 0), SourceLocation { row: 1, column: 1 });
        assert_eq!(source_location(source, 4), SourceLocation { row: 1, column: 5 });
        assert_eq!(source_location(source, 10), SourceLocation { row: 2, column: 1 });
        assert_eq!(source_location(source, 14), SourceLocation { row: 2, column: 5 });
    }

    #[test]
    fn location_past_the_end_clamps() {
        assert_eq!(source_location("ab", 99), SourceLocation { row: 1, column: 3 });
    }
}
