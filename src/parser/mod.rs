use serde::Serialize;

use crate::section::{Property, Section};
use crate::utils::{strip_line_comment, trim_ascii_edges};
use crate::value::{classify, Value, ValueType};

/// The reserved section header token that returns parsing to the document
/// root. `[SECTIONEND]` never creates a section by that name.
pub const SECTION_END: &str = "SECTIONEND";

/// Why a line was skipped or downgraded during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Not a comment, not a section marker, and no `=` anywhere.
    MissingDelimiter,
    /// Classified as a number but the text did not fit the native type;
    /// the raw text was stored as a string instead.
    NumericOverflow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// 1-based physical line number.
    pub line: usize,
    /// The line as it appeared in the source, untrimmed.
    pub text: String,
    pub kind: DiagnosticKind,
}

/// Everything a parse wants to tell the caller besides the tree itself.
///
/// Parsing never fails; malformed input degrades to skipped lines, and
/// this report says which ones. A caller that needs to detect a
/// misconfigured file checks here, or probes for expected keys afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Line-by-line reader that turns a stream of text lines into mutations of
/// a section tree.
///
/// State is just the qualified name of the section assignments currently
/// land in; `None` means the document root. Feeding a `[SECTIONEND]` line
/// resets it to root.
pub struct Parser {
    current: Option<String>,
    line_no: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            current: None,
            line_no: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Consume one physical line, mutating `root` as needed.
    pub fn feed(&mut self, root: &mut Section, line: &str) {
        self.line_no += 1;

        if line.is_empty() {
            return;
        }

        // A comment marker at the very start of the raw line hides the
        // whole line, leading whitespace not forgiven.
        if line.starts_with("//") {
            return;
        }

        let clean = trim_ascii_edges(strip_line_comment(line));
        if clean.is_empty() {
            return;
        }

        if clean.len() >= 2 && clean.starts_with('[') && clean.ends_with(']') {
            let interior = &clean[1..clean.len() - 1];

            if interior == SECTION_END {
                self.current = None;
                return;
            }

            // The interior may carry the author's own dots; it is handed to
            // the root as a single key and resolves or creates the nested
            // chain there. An interior that cannot resolve (empty, or an
            // empty segment) drops us back to the root.
            self.current = root
                .add_subsection(interior)
                .map(|_| interior.to_string());
            return;
        }

        let Some(idx) = clean.rfind('=') else {
            self.diagnostics.push(Diagnostic {
                line: self.line_no,
                text: line.to_string(),
                kind: DiagnosticKind::MissingDelimiter,
            });
            return;
        };

        let key = trim_ascii_edges(&clean[..idx]);
        let raw = trim_ascii_edges(&clean[idx + 1..]);
        let value = self.convert(raw, line);

        let property = Property::new(key, value);
        match &self.current {
            Some(prefix) => root.add_property(&format!("{}.{}", prefix, key), property),
            None => root.add_property(key, property),
        }
    }

    /// End of input; hand back the accumulated diagnostics.
    pub fn finish(self) -> ParseReport {
        ParseReport { diagnostics: self.diagnostics }
    }

    /// Turn trimmed right-hand-side text into a typed value.
    fn convert(&mut self, raw: &str, line: &str) -> Value {
        match classify(raw) {
            ValueType::Int => match raw.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => self.numeric_fallback(raw, line),
            },
            ValueType::Float => match raw.parse::<f64>() {
                Ok(x) => Value::Float(x),
                Err(_) => self.numeric_fallback(raw, line),
            },
            ValueType::Bool => Value::Bool(matches!(raw, "true" | "True")),
            ValueType::String => Value::Str(strip_quotes(raw).to_string()),
            ValueType::Unknown => Value::Unknown,
        }
    }

    fn numeric_fallback(&mut self, raw: &str, line: &str) -> Value {
        self.diagnostics.push(Diagnostic {
            line: self.line_no,
            text: line.to_string(),
            kind: DiagnosticKind::NumericOverflow,
        });
        Value::Str(raw.to_string())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

/// Drive a parser over a sequence of lines against `root`.
pub fn parse_lines<'a, I>(lines: I, root: &mut Section) -> ParseReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parser = Parser::new();
    for line in lines {
        parser.feed(root, line);
    }
    parser.finish()
}

/// Strip one leading and one trailing quote character, independently; a
/// value may carry only one of the two.
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['\'', '"']).unwrap_or(s);
    s.strip_suffix(['\'', '"']).unwrap_or(s)
}

#[cfg(test)]
mod tests;
