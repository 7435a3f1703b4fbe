use log::debug;

use ternlint_ast::Program;
use ternlint_parser::{parse, ParseError};

use crate::checkers::ast;
use crate::diagnostic::Diagnostic;
use crate::settings::LinterSettings;

/// Parses and lints one compilation unit.
///
/// Parse errors are fatal for the unit; no diagnostics are produced from a
/// source that failed to parse.
pub fn check_source(
    source: &str,
    settings: &LinterSettings,
) -> Result<Vec<Diagnostic>, ParseError> {
    let program = parse(source)?;
    Ok(check_program(&program, source, settings))
}

/// Lints an already parsed compilation unit.
///
/// Rule state (the condition history in particular) is scoped to this call:
/// conditions seen in one unit never affect another.
pub fn check_program(
    program: &Program,
    source: &str,
    settings: &LinterSettings,
) -> Vec<Diagnostic> {
    let diagnostics = ast::check_program(program, source, settings);
    debug!(
        "linted unit of {} statement(s), {} finding(s)",
        program.body.len(),
        diagnostics.len()
    );
    diagnostics
}
