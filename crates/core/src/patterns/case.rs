use crate::{
    error::Result,
    patterns::{
        Pattern,
        pattern::{call_with_name, captured_name},
    },
    types::{DeclarationKind, TestDeclaration},
};
use regex::Regex;

/// Keyword that declares a single test case
pub const CASE_KEYWORD: &str = "it";

pub struct CasePattern {
    regex: Regex,
}

impl CasePattern {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: call_with_name(CASE_KEYWORD)?,
        })
    }
}

impl Pattern for CasePattern {
    fn detect(&self, line: &str, line_number: u32) -> Option<TestDeclaration> {
        captured_name(&self.regex, line).map(|name| TestDeclaration {
            kind: DeclarationKind::Case,
            name,
            line: line_number,
        })
    }
}
