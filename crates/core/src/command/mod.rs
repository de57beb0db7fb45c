//! Command construction and dispatch

pub mod builder;
pub mod dispatcher;
pub mod run_request;

// Re-export commonly used types
pub use builder::{COVERAGE_ARGS, CommandBuilder, QUIET_REPL_FLAG, REPL_FLAG, TEST_FILTER_FLAG};
pub use dispatcher::CommandDispatcher;
pub use run_request::{Operation, RunRequest};
