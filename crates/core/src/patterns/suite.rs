use crate::{
    error::Result,
    patterns::{
        Pattern,
        pattern::{call_with_name, captured_name},
    },
    types::{DeclarationKind, TestDeclaration},
};
use regex::Regex;

/// Keyword that opens a test suite
pub const SUITE_KEYWORD: &str = "describe";

pub struct SuitePattern {
    regex: Regex,
}

impl SuitePattern {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: call_with_name(SUITE_KEYWORD)?,
        })
    }
}

impl Pattern for SuitePattern {
    fn detect(&self, line: &str, line_number: u32) -> Option<TestDeclaration> {
        captured_name(&self.regex, line).map(|name| TestDeclaration {
            kind: DeclarationKind::Suite,
            name,
            line: line_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_pattern() {
        let pattern = SuitePattern::new().unwrap();

        let declaration = pattern
            .detect(r#"describe("Calculator", func() {"#, 1)
            .unwrap();
        assert_eq!(declaration.kind, DeclarationKind::Suite);
        assert_eq!(declaration.name, "Calculator");
        assert_eq!(declaration.line, 1);

        let declaration = pattern.detect("  describe ( 'Strings' , func() {", 7).unwrap();
        assert_eq!(declaration.name, "Strings");
        assert_eq!(declaration.line, 7);
    }

    #[test]
    fn test_suite_pattern_rejects() {
        let pattern = SuitePattern::new().unwrap();
        assert!(pattern.detect(r#"describe("", func() {"#, 1).is_none());
        assert!(pattern.detect(r#"describe("Unterminated, func() {"#, 1).is_none());
        assert!(pattern.detect(r#"describe("Calculator")"#, 1).is_none());
        assert!(pattern.detect(r#"describe("#, 1).is_none());
        assert!(pattern.detect(r#"// describe("Commented", func() {"#, 1).is_none());
        assert!(pattern.detect(r#"it("adds", func() {"#, 1).is_none());
        assert!(pattern.detect(r#"describe(name, func() {"#, 1).is_none());
    }
}
