//! Builder-pattern printer for rendering compile errors against their pattern.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::{Error, Expected, Span, TokenKind};

pub struct ErrorPrinter<'a> {
    error: &'a Error,
    source: Option<&'a str>,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> ErrorPrinter<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return writeln!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let title = self.error.title();
        let label = label(self.error);
        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(adjust_range(self.error.span(), source.len()))
                .label(&label),
        );

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        writeln!(w, "{}", renderer.render(&report))
    }
}

fn label(error: &Error) -> String {
    match error {
        Error::UnexpectedToken {
            expected: Expected::Token(TokenKind::RParen),
            ..
        } => "unclosed group".to_string(),
        Error::UnexpectedToken {
            expected: Expected::Expression,
            found,
            ..
        } if matches!(found, TokenKind::Star | TokenKind::Plus | TokenKind::Optional) => {
            "quantifier has nothing to repeat".to_string()
        }
        Error::UnexpectedToken { found, .. } => format!("unexpected {found}"),
        Error::RecursionLimitExceeded { .. } => "nested too deeply".to_string(),
    }
}

/// Empty spans (end of input) still need one column to point at.
fn adjust_range(span: &Span, limit: usize) -> std::ops::Range<usize> {
    if span.start == span.end {
        return span.start..(span.start + 1).min(limit);
    }

    span.clone()
}
