//! Rendering contract for answer text
//!
//! The model's answer uses a small set of line-level structural markers.
//! This module interprets them into typed lines for display while leaving
//! the underlying line structure untouched. Markers are mutually exclusive
//! by construction: each line is matched against the marker set in a fixed
//! order and the first match wins.

use crate::models::RouteAnswer;

/// An inline span within a bullet or paragraph line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Emphasis(String),
}

/// One structural line of the answer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `## ` section heading
    Heading(String),
    /// Whole-line `**...**` sub-heading
    SubHeading(String),
    /// `- ` or `* ` list item
    Bullet(Vec<Span>),
    /// Blank separator line
    Blank,
    /// Plain paragraph line
    Paragraph(Vec<Span>),
}

/// Parse answer text into typed lines, preserving line order
///
/// Whole-line bold is tested before the `## ` marker, so a line can only
/// ever produce one variant.
#[must_use]
pub fn parse_lines(text: &str) -> Vec<Line> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Line {
    // The length guard excludes "**" and "****": those carry no heading
    // text, so they fall through to the paragraph arm instead of
    // producing an empty sub-heading
    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        return Line::SubHeading(line[2..line.len() - 2].to_string());
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Line::Heading(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Line::Bullet(parse_spans(rest));
    }
    if line.trim().is_empty() {
        return Line::Blank;
    }
    Line::Paragraph(parse_spans(line))
}

/// Split a line into plain and `**...**` emphasis spans
fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let Some(end) = rest[start + 2..].find("**") else {
            break;
        };

        if start > 0 {
            spans.push(Span::Plain(rest[..start].to_string()));
        }
        spans.push(Span::Emphasis(rest[start + 2..start + 2 + end].to_string()));
        rest = &rest[start + 2 + end + 2..];
    }

    if !rest.is_empty() {
        spans.push(Span::Plain(rest.to_string()));
    }

    spans
}

/// Render a normalized answer as plain terminal text
#[must_use]
pub fn render_answer(answer: &RouteAnswer) -> String {
    let mut output = String::new();

    for line in parse_lines(&answer.answer_text) {
        match line {
            Line::Heading(text) => {
                output.push('\n');
                output.push_str(&text);
                output.push('\n');
                output.push_str(&"=".repeat(text.chars().count()));
                output.push('\n');
            }
            Line::SubHeading(text) => {
                output.push('\n');
                output.push_str(&text);
                output.push('\n');
            }
            Line::Bullet(spans) => {
                output.push_str("  - ");
                output.push_str(&render_spans(&spans));
                output.push('\n');
            }
            Line::Blank => output.push('\n'),
            Line::Paragraph(spans) => {
                output.push_str(&render_spans(&spans));
                output.push('\n');
            }
        }
    }

    if answer.has_citations() {
        output.push_str("\nVerified locations:\n");
        for citation in &answer.citations {
            output.push_str(&format!("  {} - {}\n", citation.title, citation.uri));
        }
    }

    output
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) | Span::Emphasis(text) => text.as_str(),
        })
        .collect()
}
