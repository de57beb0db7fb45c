//! Line-oriented source analysis

pub mod function_locator;

pub use function_locator::FunctionBoundaryLocator;
