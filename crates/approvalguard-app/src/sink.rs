//! Destinations for user-facing output.

use approvalguard_render::render_error_command;

/// Receives the informational lines and the failure signal of a run.
pub trait LogSink {
    fn info(&mut self, line: &str);

    /// Mark the run as failed. Called at most once per run.
    fn fail(&mut self, message: &str);

    /// Raw workflow commands (annotations). Sinks that don't speak them may ignore these.
    fn command(&mut self, _command: &str) {}
}

/// Writes to stdout the way GitHub Actions expects: plain lines for info,
/// `::error::` workflow commands for failures and annotations.
#[derive(Debug, Default)]
pub struct ActionsLog;

impl LogSink for ActionsLog {
    fn info(&mut self, line: &str) {
        println!("{line}");
    }

    fn fail(&mut self, message: &str) {
        println!("{}", render_error_command(message));
    }

    fn command(&mut self, command: &str) {
        println!("{command}");
    }
}

/// Records everything in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
    pub failure: Option<String>,
    pub commands: Vec<String>,
}

impl MemorySink {
    pub fn logged(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl LogSink for MemorySink {
    fn info(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn fail(&mut self, message: &str) {
        self.failure = Some(message.to_string());
    }

    fn command(&mut self, command: &str) {
        self.commands.push(command.to_string());
    }
}
