//! Notation value object - the closed set of built-in classpath notations
//!
//! Build scripts refer to these by their DSL form (`toolApi()`), the
//! classpath registry knows them by their key (`TOOL_API`).

use std::fmt;
use std::str::FromStr;

use super::levenshtein;

/// A symbolic dependency whose files ship with the tool itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Notation {
    /// The tool's public API, relocated when running from an installation
    ToolApi,
    /// The test-harness API, layered on top of [`Notation::ToolApi`]
    ToolTestKit,
    /// The bundled script-language runtime
    ScriptRuntime,
    /// Marker jar used to locate the installation
    InstallationBeacon,
    /// Client library for driving the tool from other programs
    ToolingApi,
    /// Bootstrap classpath of forked worker processes
    WorkerProcess,
}

impl Notation {
    /// Every notation, in cache slot order
    pub const ALL: [Notation; 6] = [
        Notation::ToolApi,
        Notation::ToolTestKit,
        Notation::ScriptRuntime,
        Notation::InstallationBeacon,
        Notation::ToolingApi,
        Notation::WorkerProcess,
    ];

    /// Number of notations (size of the intern cache)
    pub const COUNT: usize = Self::ALL.len();

    /// Key used to look the notation up in the classpath registry
    pub fn name(&self) -> &'static str {
        match self {
            Notation::ToolApi => "TOOL_API",
            Notation::ToolTestKit => "TOOL_TEST_KIT",
            Notation::ScriptRuntime => "SCRIPT_RUNTIME",
            Notation::InstallationBeacon => "INSTALLATION_BEACON",
            Notation::ToolingApi => "TOOLING_API",
            Notation::WorkerProcess => "WORKER_PROCESS",
        }
    }

    /// Form used in build scripts and diagnostics
    pub fn display_name(&self) -> &'static str {
        match self {
            Notation::ToolApi => "toolApi()",
            Notation::ToolTestKit => "toolTestKit()",
            Notation::ScriptRuntime => "localScriptRuntime()",
            Notation::InstallationBeacon => "installationBeacon()",
            Notation::ToolingApi => "toolingApi()",
            Notation::WorkerProcess => "workerProcess()",
        }
    }

    /// Dense slot index, stable for the lifetime of the process
    pub fn index(&self) -> usize {
        match self {
            Notation::ToolApi => 0,
            Notation::ToolTestKit => 1,
            Notation::ScriptRuntime => 2,
            Notation::InstallationBeacon => 3,
            Notation::ToolingApi => 4,
            Notation::WorkerProcess => 5,
        }
    }

    /// Diagnostic description of the accepted notation forms
    pub fn describe() -> NotationDescription {
        NotationDescription {
            candidate: "ClassPathNotation",
            example: Notation::ToolApi.display_name(),
            forms: Self::ALL.iter().map(|n| n.display_name()).collect(),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What a notation parser accepts, for "cannot convert" style messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationDescription {
    pub candidate: &'static str,
    pub example: &'static str,
    pub forms: Vec<&'static str>,
}

impl fmt::Display for NotationDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (e.g. {}); one of: {}",
            self.candidate,
            self.example,
            self.forms.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classpath notation '{input}'{suggestion}")]
pub struct ParseNotationError {
    input: String,
    suggestion: String,
}

impl ParseNotationError {
    fn new(input: &str) -> Self {
        let lowered = input.to_lowercase();
        let best = Notation::ALL
            .iter()
            .map(|n| (n, levenshtein(&lowered, &n.display_name().to_lowercase())))
            .min_by_key(|(_, dist)| *dist);

        let suggestion = match best {
            Some((n, dist)) if dist <= 2 => format!(". Did you mean '{}'?", n.display_name()),
            _ => String::new(),
        };

        Self {
            input: input.to_string(),
            suggestion,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Notation {
    type Err = ParseNotationError;

    /// Accepts either the DSL form (`toolApi()`) or the registry key (`TOOL_API`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Notation::ALL
            .iter()
            .copied()
            .find(|n| n.display_name() == trimmed || n.name() == trimmed)
            .ok_or_else(|| ParseNotationError::new(trimmed))
    }
}
