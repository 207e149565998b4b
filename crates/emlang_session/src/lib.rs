pub mod diagnostics;
pub mod sourcemap;

use diagnostics::{DiagnosticEmitter, IntoDiagnostic, Severity};
use sourcemap::SourceMap;

/// Returned when at least one error-severity diagnostic was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsEmitted;

/// Holds the loaded sources and where diagnostics about them are sent.
pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::default(),
            diagnostics,
        }
    }

    pub fn report<Context: ?Sized>(
        &mut self,
        diagnostic: impl IntoDiagnostic<Context>,
        cx: &Context,
    ) -> Result<(), ErrorsEmitted> {
        self.report_all([diagnostic], cx)
    }

    pub fn report_all<Context: ?Sized, I>(
        &mut self,
        diagnostics: I,
        cx: &Context,
    ) -> Result<(), ErrorsEmitted>
    where
        I: IntoIterator,
        I::Item: IntoDiagnostic<Context>,
    {
        let mut had_error = false;

        for diagnostic in diagnostics {
            let diagnostic = diagnostic.into_diagnostic(cx);
            had_error |= diagnostic.severity >= Severity::Error;
            self.diagnostics.emit_diagnostic(diagnostic, &self.sources);
        }

        if had_error {
            Err(ErrorsEmitted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::Diagnostic;
    use crate::{ErrorsEmitted, Session};

    #[test]
    fn only_errors_fail_a_report() {
        let mut session = Session::new(Vec::<Diagnostic>::new());

        assert_eq!(session.report(Diagnostic::warning(), &()), Ok(()));
        assert_eq!(
            session.report_all([Diagnostic::warning(), Diagnostic::error()], &()),
            Err(ErrorsEmitted)
        );
        assert_eq!(session.report_all(Vec::<Diagnostic>::new(), &()), Ok(()));

        assert_eq!(session.diagnostics.len(), 3);
    }
}
