pub mod declaration;
pub mod executable;
pub mod position;

// Re-export commonly used types
pub use declaration::{CodeLens, DeclarationKind, TestDeclaration};
pub use executable::{Origin, ResolvedExecutable};
pub use position::{SourcePosition, SourceSpan};

/// Language id of R2Lang documents
pub const LANGUAGE_ID: &str = "r2lang";

/// File extension of R2Lang sources
pub const SOURCE_EXTENSION: &str = "r2";

/// Test files are identified solely by this file name suffix
pub const TEST_FILE_SUFFIX: &str = "_test.r2";

/// Check whether a document name marks it as a test file
pub fn is_test_file(name: &str) -> bool {
    name.ends_with(TEST_FILE_SUFFIX)
}
