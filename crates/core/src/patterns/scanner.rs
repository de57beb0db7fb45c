use crate::{
    error::Result,
    patterns::{CasePattern, Pattern, SuitePattern},
    types::{CodeLens, TestDeclaration, is_test_file},
};
use std::path::Path;
use tracing::debug;

/// Command id invoked by the "run this" lens above a declaration
pub const RUN_INDIVIDUAL_TEST_COMMAND: &str = "r2lang.runIndividualTest";

/// Line-oriented discovery of `describe(...)` and `it(...)` declarations
pub struct TestDeclarationScanner {
    patterns: Vec<Box<dyn Pattern>>,
}

impl TestDeclarationScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: vec![Box::new(SuitePattern::new()?), Box::new(CasePattern::new()?)],
        })
    }

    /// Scan `text` for declarations, in line order.
    ///
    /// Returns nothing when discovery is disabled or `document_name` does not
    /// carry the test-file suffix. Each line matches at most one pattern.
    pub fn scan(&self, document_name: &str, text: &str, enabled: bool) -> Vec<TestDeclaration> {
        if !enabled {
            debug!("test discovery disabled, skipping {}", document_name);
            return Vec::new();
        }
        if !is_test_file(document_name) {
            return Vec::new();
        }

        let declarations: Vec<TestDeclaration> = text
            .split('\n')
            .enumerate()
            .filter_map(|(index, line)| {
                let line_number = index as u32 + 1;
                self.patterns
                    .iter()
                    .find_map(|pattern| pattern.detect(line, line_number))
            })
            .collect();

        debug!(
            "found {} test declarations in {}",
            declarations.len(),
            document_name
        );
        declarations
    }

    /// Scan a document and pair every declaration with a run lens
    pub fn code_lenses(&self, file_path: &Path, text: &str, enabled: bool) -> Vec<CodeLens> {
        let name = file_path.to_string_lossy();
        self.scan(&name, text, enabled)
            .into_iter()
            .map(|declaration| CodeLens {
                line: declaration.line_index(),
                title: declaration.label().to_string(),
                command: RUN_INDIVIDUAL_TEST_COMMAND.to_string(),
                arguments: vec![declaration.name.clone(), name.to_string()],
                declaration,
                file_path: file_path.to_path_buf(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DeclarationKind;
    use proptest::prelude::*;

    const CALCULATOR_TEST: &str = r#"import "calculator.r2" as calc

describe("Calculator", func() {
    it("adds", func() {
        assert.equals(calc.add(2, 2), 4);
    });

    it('subtracts', func() {
        assert.equals(calc.sub(4, 2), 2);
    });

    it(
        "spans lines",
        func() {}
    );
});
"#;

    const DECLARATION_LINES: &[&str] = &[
        "describe(\"S\", func() {",
        "describe(\"\", func() {",
        "it('', func() {",
        "it('c', func() {",
        "});",
    ];

    fn scanner() -> TestDeclarationScanner {
        TestDeclarationScanner::new().unwrap()
    }

    #[test]
    fn test_scan_suite_and_case() {
        let text = "// calculator\nlet x = 1;\ndescribe(\"Calculator\", func() {\n  it(\"adds\", func() {\n  });\n});";
        let declarations = scanner().scan("calc_test.r2", text, true);

        assert_eq!(
            declarations,
            vec![
                TestDeclaration {
                    kind: DeclarationKind::Suite,
                    name: "Calculator".to_string(),
                    line: 3,
                },
                TestDeclaration {
                    kind: DeclarationKind::Case,
                    name: "adds".to_string(),
                    line: 4,
                },
            ]
        );
    }

    #[test]
    fn test_scan_skips_multi_line_declarations() {
        let declarations = scanner().scan("calculator_test.r2", CALCULATOR_TEST, true);
        let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Calculator", "adds", "subtracts"]);
        let lines: Vec<_> = declarations.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![3, 4, 8]);
    }

    #[test]
    fn test_scan_disabled() {
        assert!(scanner().scan("calculator_test.r2", CALCULATOR_TEST, false).is_empty());
    }

    #[test]
    fn test_scan_requires_test_suffix() {
        assert!(scanner().scan("calculator.r2", CALCULATOR_TEST, true).is_empty());
        assert!(scanner().scan("tests/calculator.r2", CALCULATOR_TEST, true).is_empty());
        assert!(scanner().scan("calculator_test.r2.bak", CALCULATOR_TEST, true).is_empty());
    }

    #[test]
    fn test_code_lenses() {
        let path = Path::new("/work/calculator_test.r2");
        let lenses = scanner().code_lenses(path, CALCULATOR_TEST, true);
        assert_eq!(lenses.len(), 3);

        assert_eq!(lenses[0].line, 2);
        assert_eq!(lenses[0].title, "▶️ Run Test Suite");
        assert_eq!(lenses[0].command, RUN_INDIVIDUAL_TEST_COMMAND);
        assert_eq!(
            lenses[0].arguments,
            vec!["Calculator".to_string(), "/work/calculator_test.r2".to_string()]
        );

        assert_eq!(lenses[1].title, "▶️ Run Test");
        assert_eq!(lenses[1].arguments[0], "adds");
    }

    proptest! {
        #[test]
        fn disabled_scan_is_always_empty(text in ".*") {
            prop_assert!(scanner().scan("any_test.r2", &text, false).is_empty());
        }

        #[test]
        fn non_test_documents_are_never_scanned(
            stem in "[a-z_]{1,12}",
            text in ".*",
        ) {
            let name = format!("{stem}.r2");
            prop_assume!(!name.ends_with("_test.r2"));
            prop_assert!(scanner().scan(&name, &text, true).is_empty());
        }

        #[test]
        fn declaration_names_are_never_empty(
            lines in prop::collection::vec(prop::sample::select(DECLARATION_LINES), 0..20),
        ) {
            let text = lines.join("\n");
            for declaration in scanner().scan("x_test.r2", &text, true) {
                prop_assert!(!declaration.name.is_empty());
            }
        }
    }
}
