//! Keyword documentation on hover

use crate::types::SourcePosition;
use serde::{Deserialize, Serialize};

/// Markdown shown for a keyword, with the column range it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub contents: String,
    pub line: u32,
    pub start: u32,
    pub end: u32,
}

const KEYWORDS: &[(&str, &str)] = &[
    (
        "func",
        "Declares a function\n\n```r2lang\nfunc myFunction(param1, param2) {\n    return param1 + param2;\n}\n```",
    ),
    (
        "class",
        "Declares a class\n\n```r2lang\nclass MyClass {\n    constructor() {\n        this.value = 0;\n    }\n}\n```",
    ),
    (
        "describe",
        "Defines a test suite\n\n```r2lang\ndescribe(\"Calculator\", func() {\n    it(\"should add numbers\", func() {\n        assert.equals(2 + 2, 4);\n    });\n});\n```",
    ),
    (
        "it",
        "Defines a test case\n\n```r2lang\nit(\"should handle edge cases\", func() {\n    assert.true(condition);\n});\n```",
    ),
    (
        "assert",
        "Test assertion functions\n\n```r2lang\nassert.equals(actual, expected);\nassert.true(condition);\nassert.false(condition);\n```",
    ),
    ("if", "Conditional statement\n\n```r2lang\nif (condition) {\n    // code\n}\n```"),
    ("while", "Loop statement\n\n```r2lang\nwhile (condition) {\n    // code\n}\n```"),
    (
        "for",
        "Loop statement\n\n```r2lang\nfor (let i = 0; i < 10; i++) {\n    // code\n}\n```",
    ),
    ("import", "Imports a module\n\n```r2lang\nimport \"module.r2\" as mod\n```"),
    ("let", "Declares a variable\n\n```r2lang\nlet variableName = value;\n```"),
    ("this", "References the current object instance"),
    ("super", "References the parent class"),
    (
        "extends",
        "Inherits from a parent class\n\n```r2lang\nclass Child extends Parent {\n    // class body\n}\n```",
    ),
];

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Identifier touching `column` (a char offset), with its `[start, end)` range.
///
/// A cursor right after the last character still counts as on the word.
pub fn word_at(line: &str, column: u32) -> Option<(String, u32, u32)> {
    let chars: Vec<char> = line.chars().collect();
    let column = column as usize;

    let anchor = if chars.get(column).copied().is_some_and(is_word_char) {
        column
    } else if column > 0 && chars.get(column - 1).copied().is_some_and(is_word_char) {
        column - 1
    } else {
        return None;
    };

    let start = (0..=anchor)
        .rev()
        .take_while(|&index| is_word_char(chars[index]))
        .last()
        .unwrap_or(anchor);
    let end = (anchor..chars.len())
        .take_while(|&index| is_word_char(chars[index]))
        .last()
        .map_or(anchor + 1, |index| index + 1);

    let word = chars[start..end].iter().collect();
    Some((word, start as u32, end as u32))
}

pub fn keyword_info(word: &str) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, info)| *info)
}

pub fn hover(text: &str, position: SourcePosition) -> Option<Hover> {
    let line = text.split('\n').nth(position.line as usize)?;
    let (word, start, end) = word_at(line, position.column)?;
    let contents = keyword_info(&word)?;

    Some(Hover {
        contents: contents.to_string(),
        line: position.line,
        start,
        end,
    })
}
