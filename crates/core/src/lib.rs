//! r2-runner - Run R2Lang code, REPL sessions and tests from an editor
//!
//! This crate provides functionality to:
//! - Locate the function around a cursor and find test declarations
//! - Resolve the interpreter, REPL and test runner executables
//! - Build shell command lines and hand them to host terminals
//! - Drive every editor operation through a single [`Orchestrator`]
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod patterns;
pub mod providers;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod services;
pub mod types;
pub mod welcome;

// Re-export commonly used types and traits
pub use error::{Error, GuardFailure, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandBuilder, CommandDispatcher, Operation, RunRequest};
pub use config::Config;
pub use interfaces::Host;
pub use parser::FunctionBoundaryLocator;
pub use patterns::TestDeclarationScanner;
pub use resolver::ExecutableResolver;
pub use runner::{Dispatch, Orchestrator, Timings};
pub use welcome::{WelcomeChoice, WelcomeOutcome};
