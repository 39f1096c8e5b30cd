//! Turning one input into the text the driver prints.

use letter_core::LineMap;
use letter_diagnostics::{with_source, SyntaxError};
use letter_options::{OutputFormat, ResolvedOptions};
use letter_printer::{Printer, PrinterOptions};
use miette::{IntoDiagnostic, Report};
use tracing::{debug, enabled, Level};

/// Render `source` in the configured output format.
///
/// Syntax errors come back as reports carrying `name` and the source text so
/// they print with a labeled snippet.
pub fn render(name: &str, source: &str, options: &ResolvedOptions) -> miette::Result<String> {
    let attach = |err: SyntaxError| syntax_report(err, name, source);

    let mut output = match options.output {
        OutputFormat::Ast => {
            let program = letter_parser::parse(source).map_err(attach)?;
            if options.pretty {
                serde_json::to_string_pretty(&program).into_diagnostic()?
            } else {
                serde_json::to_string(&program).into_diagnostic()?
            }
        }
        OutputFormat::Sexp => letter_parser::parse_sexpr(source).map_err(attach)?.to_string(),
        OutputFormat::Source => {
            let program = letter_parser::parse(source).map_err(attach)?;
            Printer::with_options(PrinterOptions::with_indent_width(options.indent_width)).print_program(&program)
        }
        OutputFormat::Tokens => letter_scanner::tokenize(source)
            .map_err(|err| attach(err.into()))?
            .iter()
            .map(|token| format!("{}\n", token))
            .collect(),
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn syntax_report(err: SyntaxError, name: &str, source: &str) -> Report {
    if enabled!(Level::DEBUG) {
        let location = LineMap::new(source).line_and_column_of(err.span().start);
        debug!(file = name, %location, error = %err, "syntax error");
    }
    with_source(err, name, source)
}
