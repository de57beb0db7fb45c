//! Host command ids mapped to orchestrator operations

use crate::{
    command::Operation,
    error::{Error, Result},
    runner::{Dispatch, Orchestrator},
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

struct Registration {
    operation: Operation,
    arity: usize,
}

/// Every command the extension contributes, keyed by id
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Registration>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        for operation in Operation::ALL {
            let arity = match operation {
                Operation::RunNamedTest => 2,
                _ => 0,
            };
            commands.insert(operation.command_id(), Registration { operation, arity });
        }
        Self { commands }
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    pub fn operation(&self, command_id: &str) -> Option<Operation> {
        self.commands.get(command_id).map(|r| r.operation)
    }

    pub fn invoke(
        &self,
        orchestrator: &Orchestrator,
        command_id: &str,
        args: &[String],
    ) -> Result<Dispatch> {
        let registration = self
            .commands
            .get(command_id)
            .ok_or_else(|| Error::UnknownCommand(command_id.to_string()))?;

        if args.len() != registration.arity {
            return Err(Error::InvalidArguments {
                command: command_id.to_string(),
                expected: registration.arity,
                actual: args.len(),
            });
        }

        debug!("invoking {} with {} argument(s)", command_id, args.len());
        match registration.operation {
            Operation::RunFile => orchestrator.run_file(),
            Operation::RunSelection => orchestrator.run_selection(),
            Operation::OpenRepl => orchestrator.open_repl(),
            Operation::RunAllTests => orchestrator.run_all_tests(),
            Operation::RunCurrentTestFile => orchestrator.run_current_test_file(),
            Operation::RunWithCoverage => orchestrator.run_with_coverage(),
            Operation::RunNamedTest => orchestrator.run_named_test(&args[0], Path::new(&args[1])),
            Operation::FeedRepl => orchestrator.feed_repl(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryHost;

    #[test]
    fn test_registers_every_command() {
        let registry = CommandRegistry::new();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(
            ids,
            vec![
                "r2lang.openRepl",
                "r2lang.runCurrentTest",
                "r2lang.runFile",
                "r2lang.runInRepl",
                "r2lang.runIndividualTest",
                "r2lang.runSelection",
                "r2lang.runTests",
                "r2lang.runTestsWithCoverage",
            ]
        );
        assert_eq!(
            registry.operation("r2lang.runIndividualTest"),
            Some(Operation::RunNamedTest)
        );
        assert_eq!(registry.operation("r2lang.debug"), None);
    }

    #[tokio::test]
    async fn test_invoke_checks_arguments() {
        let memory = MemoryHost::new(None);
        let orchestrator = Orchestrator::new(memory.host()).unwrap();
        let registry = orchestrator.registry();

        let err = registry
            .invoke(&orchestrator, "r2lang.runIndividualTest", &["adds".to_string()])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid arguments for r2lang.runIndividualTest: expected 2, got 1"
        );

        let err = registry.invoke(&orchestrator, "r2lang.nope", &[]).unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(_)));

        let dispatch = registry
            .invoke(
                &orchestrator,
                "r2lang.runIndividualTest",
                &["adds".to_string(), "calc_test.r2".to_string()],
            )
            .unwrap();
        assert_eq!(dispatch.request.args, vec!["-grep", "adds", "."]);
        dispatch.settle().await;
    }

    #[tokio::test]
    async fn test_execute_reports_failures() {
        let memory = MemoryHost::new(None);
        let orchestrator = Orchestrator::new(memory.host()).unwrap();

        assert!(orchestrator.execute("r2lang.runFile", &[]).is_none());
        assert!(orchestrator.execute("r2lang.nope", &[]).is_none());
        assert_eq!(
            memory.notifier.errors(),
            vec![
                "No active R2Lang file found".to_string(),
                "Unknown command: r2lang.nope".to_string(),
            ]
        );
    }
}
