//! Brace-counting lookup of the function around a cursor line
//!
//! This is a line heuristic, not a grammar. Braces inside string literals and
//! comments are counted like any other brace, so a function whose body holds
//! an unbalanced `"{"` literal reports the wrong end line or none at all.

use crate::{
    error::Result,
    types::SourceSpan,
};
use regex::Regex;
use tracing::{debug, trace};

/// `func name(` at the start of a line, leading whitespace ignored
const FUNCTION_DECLARATION: &str = r"^\s*func\s+\w+\s*\(";

pub struct FunctionBoundaryLocator {
    declaration: Regex,
}

impl FunctionBoundaryLocator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            declaration: Regex::new(FUNCTION_DECLARATION)?,
        })
    }

    /// Find the span of the function declared at or above `cursor_line`.
    ///
    /// Scans backward for the nearest declaration line, then forward from it
    /// until the first brace depth returns to zero. Returns `None` when there
    /// is no declaration above the cursor or the body never closes.
    pub fn locate(&self, text: &str, cursor_line: u32) -> Option<SourceSpan> {
        let lines: Vec<&str> = text.split('\n').collect();
        let cursor = (cursor_line as usize).min(lines.len() - 1);

        let start = (0..=cursor)
            .rev()
            .find(|&index| self.declaration.is_match(lines[index]))?;
        trace!("function declaration candidate at line {}", start);

        let Some(offset) = find_body_end(&lines[start..]) else {
            debug!("function at line {} is never closed", start);
            return None;
        };

        Some(SourceSpan::new(start as u32, (start + offset) as u32))
    }

    /// Same as [`locate`](Self::locate) but returns the function's source text
    pub fn enclosing_function(&self, text: &str, cursor_line: u32) -> Option<(SourceSpan, String)> {
        self.locate(text, cursor_line)
            .map(|span| (span, span.extract(text)))
    }
}

/// Offset of the line where the first opened body closes again
fn find_body_end(lines: &[&str]) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut entered_body = false;

    for (offset, line) in lines.iter().enumerate() {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    entered_body = true;
                }
                '}' => {
                    depth -= 1;
                    if entered_body && depth == 0 {
                        return Some(offset);
                    }
                }
                _ => {}
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn locator() -> FunctionBoundaryLocator {
        FunctionBoundaryLocator::new().unwrap()
    }

    const SOURCE: &str = r#"let total = 0;

func add(a, b) {
    if (a > b) {
        return a + b;
    }
    return b + a;
}

  func   nested_call (x) {
    return add(x, 1);
}
print(add(1, 2));"#;

    #[test]
    fn test_locate_from_inside_body() {
        let span = locator().locate(SOURCE, 4).unwrap();
        assert_eq!(span, SourceSpan::new(2, 7));
    }

    #[test]
    fn test_locate_from_declaration_line() {
        let span = locator().locate(SOURCE, 2).unwrap();
        assert_eq!(span, SourceSpan::new(2, 7));
    }

    #[test]
    fn test_locate_indented_declaration() {
        let span = locator().locate(SOURCE, 10).unwrap();
        assert_eq!(span, SourceSpan::new(9, 11));
    }

    #[test]
    fn test_locate_before_any_function() {
        assert_eq!(locator().locate(SOURCE, 0), None);
        assert_eq!(locator().locate(SOURCE, 1), None);
    }

    #[test]
    fn test_locate_after_function_returns_nearest_above() {
        // Backward search stops at the nearest declaration, even past its end
        let span = locator().locate(SOURCE, 12).unwrap();
        assert_eq!(span, SourceSpan::new(9, 11));
    }

    #[test]
    fn test_locate_clamps_cursor_past_end() {
        let span = locator().locate(SOURCE, 500).unwrap();
        assert_eq!(span, SourceSpan::new(9, 11));
    }

    #[test]
    fn test_unterminated_function() {
        let source = "func broken() {\n    if (x) {\n        y();\n    }\n";
        assert_eq!(locator().locate(source, 2), None);
    }

    #[test]
    fn test_single_line_function() {
        let source = "func one() { return 1; }\nprint(one());";
        assert_eq!(locator().locate(source, 0), Some(SourceSpan::new(0, 0)));
    }

    #[test]
    fn test_signature_with_brace_on_next_line() {
        let source = "func later(x)\n{\n    return x;\n}";
        assert_eq!(locator().locate(source, 2), Some(SourceSpan::new(0, 3)));
    }

    #[test]
    fn test_brace_inside_string_is_counted() {
        let source = "func tricky() {\n    let s = \"}\";\n    return s;\n}";
        // The quoted brace closes the body early
        assert_eq!(locator().locate(source, 2), Some(SourceSpan::new(0, 1)));
    }

    #[test]
    fn test_declaration_pattern() {
        let locator = locator();
        assert!(locator.declaration.is_match("func main() {"));
        assert!(locator.declaration.is_match("\t func  spaced  (a)"));
        assert!(!locator.declaration.is_match("let f = func(x) { x };"));
        assert!(!locator.declaration.is_match("function main() {"));
        assert!(!locator.declaration.is_match("// func main() {"));
        assert!(!locator.declaration.is_match("func () {"));
    }

    #[test]
    fn test_enclosing_function_text() {
        let (span, text) = locator().enclosing_function(SOURCE, 11).unwrap();
        assert_eq!(span, SourceSpan::new(9, 11));
        assert_eq!(text, "  func   nested_call (x) {\n    return add(x, 1);\n}");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(locator().locate("", 0), None);
        assert_eq!(locator().locate("", 3), None);
    }

    const VOCABULARY: &[&str] = &[
        "func alpha() {",
        "func beta(n) { return n; }",
        "    if (x) {",
        "}",
        "    x = x + 1;",
        "",
        "    let s = \"{\";",
        "print(x);",
    ];

    proptest! {
        #[test]
        fn located_spans_are_brace_balanced(
            lines in prop::collection::vec(prop::sample::select(VOCABULARY), 0..40),
            cursor in 0u32..50,
        ) {
            let text = lines.join("\n");
            if let Some(span) = locator().locate(&text, cursor) {
                prop_assert!(span.start_line <= cursor);
                prop_assert!(span.end_line >= span.start_line);
                let body = span.extract(&text);
                let opens = body.matches('{').count();
                let closes = body.matches('}').count();
                prop_assert!(opens > 0);
                prop_assert_eq!(opens, closes);
            }
        }

        #[test]
        fn no_declaration_means_no_span(
            lines in prop::collection::vec(prop::sample::select(&VOCABULARY[2..]), 0..40),
            cursor in 0u32..50,
        ) {
            let text = lines.join("\n");
            prop_assert_eq!(locator().locate(&text, cursor), None);
        }
    }
}
