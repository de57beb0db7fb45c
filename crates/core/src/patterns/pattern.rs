use crate::{error::Result, types::TestDeclaration};
use regex::Regex;

/// Trait for detecting one kind of test declaration on a single source line
pub trait Pattern: Send + Sync {
    /// `line_number` is 1-based
    fn detect(&self, line: &str, line_number: u32) -> Option<TestDeclaration>;
}

/// Build the `keyword("name",` matcher shared by the suite and case patterns.
///
/// The name is the first quoted argument, single or double quotes, holding at
/// least one non-quote character. Only the first line of a call is inspected.
pub(crate) fn call_with_name(keyword: &str) -> Result<Regex> {
    let pattern = format!(
        r#"^\s*{}\s*\(\s*["']([^"']+)["']\s*,"#,
        regex::escape(keyword)
    );
    Ok(Regex::new(&pattern)?)
}

/// First capture group of `regex` on `line`, if any
pub(crate) fn captured_name(regex: &Regex, line: &str) -> Option<String> {
    regex
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}
