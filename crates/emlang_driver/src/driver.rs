use std::fmt::Write as _;

use emlang_frontend::ast::Program;
use emlang_frontend::token::TokenKind;
use emlang_session::diagnostics::DiagnosticEmitter;
use emlang_session::sourcemap::Source;
use emlang_session::{ErrorsEmitted, Session};

use crate::cli::Emit;

/// Parses a source, reporting any syntax errors to the session.
///
/// The program is only returned when no errors were reported, since a tree
/// built around errors does not reflect what was written.
pub fn parse_source<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    source: Source,
) -> Result<Program, ErrorsEmitted> {
    let (program, errors) = emlang_frontend::parse(&source.source);

    let source_id = session.sources.insert(source);
    session.report_all(errors, &source_id)?;

    Ok(program)
}

pub fn render(program: &Program, source: &str, emit: Emit) -> String {
    match emit {
        Emit::Ast => program.to_string(),
        Emit::Tokens => render_tokens(source),
        Emit::Debug => format!("{program:#?}\n"),
    }
}

fn render_tokens(source: &str) -> String {
    let mut scanner = emlang_frontend::scan(source);
    let mut s = String::new();

    loop {
        let token = scanner.next_token();
        let _ = writeln!(s, "{} {:?}", token.kind.token_name(), token.literal);

        if token.kind == TokenKind::Eof {
            return s;
        }
    }
}
