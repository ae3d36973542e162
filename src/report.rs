//! Console status lines and run outcome
//!
//! Progress goes to stdout, failures to stderr. The markers are for humans;
//! nothing parses this output.

use std::io::{self, Write};
use std::process::ExitCode;

/// Line marker shown at the start of each status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Progress,
    Success,
    Removed,
    Warning,
    Failure,
}

impl Status {
    pub fn marker(&self) -> &'static str {
        match self {
            Status::Progress => "🔄",
            Status::Success => "✅",
            Status::Removed => "🗑️",
            Status::Warning => "⚠️",
            Status::Failure => "❌",
        }
    }
}

/// One failed entry or API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub repository: Option<String>,
    pub team: Option<String>,
    pub message: String,
}

/// Failures collected over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub entries: usize,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn record(&mut self, repository: Option<&str>, team: Option<&str>, message: impl Into<String>) {
        self.failures.push(Failure {
            repository: repository.map(str::to_string),
            team: team.map(str::to_string),
            message: message.into(),
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 0 when nothing failed, 1 otherwise
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

type Sink = Box<dyn Write + Send>;

/// Writes status lines; failures go to the error sink
pub struct Console {
    out: Sink,
    err: Sink,
}

impl Console {
    pub fn new(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            err: Box::new(err),
        }
    }

    /// stdout for progress, stderr for failures
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }

    /// Top-level line for an entry
    pub fn headline(&mut self, status: Status, message: impl AsRef<str>) {
        self.write(status, 0, message.as_ref());
    }

    /// Indented line for an operation inside an entry
    pub fn detail(&mut self, status: Status, message: impl AsRef<str>) {
        self.write(status, 2, message.as_ref());
    }

    fn write(&mut self, status: Status, indent: usize, message: &str) {
        let sink = match status {
            Status::Failure => &mut self.err,
            _ => &mut self.out,
        };
        // A closed stdout must not abort the run
        let _ = writeln!(sink, "{:indent$}{} {}", "", status.marker(), message);
    }
}
