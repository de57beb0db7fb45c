//! First-run welcome prompt

use crate::{
    error::Result,
    runner::{Dispatch, Orchestrator},
    types::LANGUAGE_ID,
};
use tracing::debug;

/// Persisted flag, set once the user opts out
pub const WELCOME_STATE_KEY: &str = "hasShownWelcome";

pub const WELCOME_MESSAGE: &str =
    "Welcome to R2Lang! Get started by creating a .r2 file or opening the REPL.";

pub const EXAMPLES_URL: &str = "https://github.com/arturoeanton/go-r2lang/tree/main/examples";

pub const NEW_FILE_TEMPLATE: &str = "func main() {\n    print(\"Hello, R2Lang!\");\n}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeChoice {
    CreateNewFile,
    OpenRepl,
    ViewExamples,
    DontShowAgain,
}

impl WelcomeChoice {
    pub const ALL: [WelcomeChoice; 4] = [
        WelcomeChoice::CreateNewFile,
        WelcomeChoice::OpenRepl,
        WelcomeChoice::ViewExamples,
        WelcomeChoice::DontShowAgain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WelcomeChoice::CreateNewFile => "Create New File",
            WelcomeChoice::OpenRepl => "Open REPL",
            WelcomeChoice::ViewExamples => "View Examples",
            WelcomeChoice::DontShowAgain => "Don't show again",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// What the host should do after the user picked a choice
#[derive(Debug)]
pub enum WelcomeOutcome {
    NewDocument {
        language_id: &'static str,
        content: &'static str,
    },
    ReplOpened(Dispatch),
    OpenUrl(&'static str),
    Dismissed,
}

impl Orchestrator {
    /// Whether the welcome prompt should be shown on activation
    pub fn activate(&self) -> bool {
        let shown = self
            .host()
            .state
            .get_flag(WELCOME_STATE_KEY)
            .unwrap_or(false);
        debug!("activated, welcome already shown: {}", shown);
        !shown
    }

    pub fn handle_welcome(&self, choice: WelcomeChoice) -> Result<WelcomeOutcome> {
        match choice {
            WelcomeChoice::CreateNewFile => Ok(WelcomeOutcome::NewDocument {
                language_id: LANGUAGE_ID,
                content: NEW_FILE_TEMPLATE,
            }),
            WelcomeChoice::OpenRepl => self.open_repl().map(WelcomeOutcome::ReplOpened),
            WelcomeChoice::ViewExamples => Ok(WelcomeOutcome::OpenUrl(EXAMPLES_URL)),
            WelcomeChoice::DontShowAgain => {
                self.host().state.set_flag(WELCOME_STATE_KEY, true)?;
                Ok(WelcomeOutcome::Dismissed)
            }
        }
    }
}
