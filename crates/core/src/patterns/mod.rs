//! Line patterns for test-suite and test-case declarations

pub mod case;
pub mod pattern;
pub mod scanner;
pub mod suite;

pub use case::CasePattern;
pub use pattern::Pattern;
pub use scanner::{RUN_INDIVIDUAL_TEST_COMMAND, TestDeclarationScanner};
pub use suite::SuitePattern;
