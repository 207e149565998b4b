use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::sources::{Cached, Source, Sources};
use crate::span::Span;
use crate::{Config, Diagnostic, Severity, SnippetKind};

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: Sources> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        for source_data in self.snippets_by_source() {
            let num_lines = source_data.source.num_lines();
            let groups = group_by_lines(source_data.snippets, self.config.context_size, num_lines);

            for (snippets, lines) in groups {
                self.draw_group(source_data.source, &snippets, lines)?;
            }
        }

        writeln!(self.stream)?;

        Ok(())
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream.set_color(self.get_primary_color())?;

        if let Some(id) = &self.diagnostic.id {
            write!(self.stream, "[{id}] ")?;
        }

        write!(self.stream, "{}:", self.diagnostic.severity.as_str())?;

        self.stream.reset()?;

        if let Some(message) = &self.diagnostic.message {
            write!(self.stream, " {message}")?;
        }

        writeln!(self.stream)
    }

    fn draw_group(
        &mut self,
        source: &Cached<S::Source>,
        snippets: &[SnippetData],
        lines: Span,
    ) -> io::Result<()> {
        let line_num_width = 1 + lines.end.max(1).ilog10() as usize;

        // groups are never empty
        let (line_num, col_num) = snippets[0].line_col;

        self.stream.set_color(&self.config.subtle)?;
        write!(self.stream, "In {}:{line_num}:{col_num}", source.name_str())?;

        if let Some(path) = source.path() {
            write!(self.stream, " ({}:{line_num}:{col_num})", path.display())?;
        }

        self.stream.reset()?;
        writeln!(self.stream)?;

        for line in lines.start..lines.end {
            let line_str = source.line_str(line).unwrap_or_default();

            self.draw_gutter(Some(line + 1), line_num_width)?;
            if !line_str.is_empty() {
                write!(self.stream, " {}", line_str.replace('\t', TAB))?;
            }
            writeln!(self.stream)?;

            let line_start = source.line_to_byte(line).unwrap_or_default();

            for snippet in snippets.iter().filter(|s| s.line == line) {
                let start = (snippet.bytes.start - line_start).min(line_str.len());
                let end = snippet
                    .bytes
                    .end
                    .saturating_sub(line_start)
                    .clamp(start, line_str.len());

                let offset = str_width(line_str.get(..start).unwrap_or_default());
                let width = str_width(line_str.get(start..end).unwrap_or_default()).max(1);

                self.draw_gutter(None, line_num_width)?;
                write!(self.stream, " {:<offset$}", "")?;

                self.stream
                    .set_color(self.get_snippet_color(snippet.kind))?;

                write!(self.stream, "{}", self.config.underline.repeat(width))?;
                write!(self.stream, "{}{}", self.config.underline_after, snippet.label)?;

                self.stream.reset()?;
                writeln!(self.stream)?;
            }
        }

        Ok(())
    }

    fn draw_gutter(&mut self, line: Option<usize>, line_num_width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.subtle)?;

        match line {
            Some(line) => write!(self.stream, "{line:>line_num_width$}")?,
            None => write!(self.stream, "{:>line_num_width$}", "")?,
        }

        write!(self.stream, " {}", self.config.gutter)?;

        self.stream.reset()
    }

    /// Snippets grouped by source, in order of first appearance. Snippets
    /// pointing outside of their source are dropped.
    fn snippets_by_source(&self) -> Vec<SourceData<'a, S>> {
        let diagnostic: &'a Diagnostic<S> = self.diagnostic;
        let sources: &'a S = self.sources;

        let mut source_datas: Vec<SourceData<'a, S>> = vec![];

        for snippet in &diagnostic.snippets {
            let Some(source) = sources.get_source(snippet.source_id) else {
                continue;
            };

            let (Some(line), Some(line_col)) = (
                source.byte_to_line_index(snippet.span.start),
                source.byte_to_line_col(snippet.span.start),
            ) else {
                continue;
            };

            let data = SnippetData {
                label: &snippet.label,
                kind: snippet.kind,

                bytes: snippet.span,
                line,
                line_col,
            };

            match source_datas
                .iter_mut()
                .find(|d| d.source_id == snippet.source_id)
            {
                Some(source_data) => source_data.snippets.push(data),
                None => source_datas.push(SourceData {
                    source_id: snippet.source_id,
                    source,
                    snippets: vec![data],
                }),
            }
        }

        source_datas
    }

    fn get_primary_color(&self) -> &'a ColorSpec {
        match self.diagnostic.severity {
            Severity::Warning => &self.config.warning_color,
            Severity::Error => &self.config.error_color,
        }
    }

    fn get_snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.get_primary_color(),
            SnippetKind::Secondary => &self.config.emphasis,
        }
    }
}

struct SourceData<'a, S: Sources> {
    source_id: S::SourceId,
    source: &'a Cached<S::Source>,
    snippets: Vec<SnippetData<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SnippetData<'a> {
    label: &'a str,
    kind: SnippetKind,

    bytes: Span,
    line: usize,
    line_col: (usize, usize),
}

/// Groups snippets whose context windows touch, returning each group with
/// its window of (zero-based) lines.
fn group_by_lines(
    mut snippets: Vec<SnippetData>,
    context_size: usize,
    num_lines: usize,
) -> Vec<(Vec<SnippetData>, Span)> {
    snippets.sort_by_key(|s| (s.line, s.bytes.start));

    let mut groups: Vec<(Vec<SnippetData>, Span)> = vec![];

    for snippet in snippets {
        let window = Span::new(
            snippet.line.saturating_sub(context_size),
            (snippet.line + context_size + 1).min(num_lines),
        );

        match groups.last_mut() {
            Some((group, lines)) if window.start <= lines.end => {
                lines.end = lines.end.max(window.end);
                group.push(snippet);
            }
            _ => groups.push((vec![snippet], window)),
        }
    }

    groups
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}
