//! Output sinks for rendered notifications and per-event errors.

use std::error::Error;
use tracing::error;

/// Receives everything the aggregation pass wants the user to see.
pub trait Reporter {
    fn notification(&mut self, line: &str);
    fn error(&mut self, error: &dyn Error);
}

/// Prints to standard output; errors also go to the persistent log.
#[derive(Debug, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn notification(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, err: &dyn Error) {
        error!("Error: {}", err);
        println!("Error: {}", err);
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    pub lines: Vec<String>,
    pub errors: Vec<String>,
}

impl Reporter for MemoryReporter {
    fn notification(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn error(&mut self, err: &dyn Error) {
        self.errors.push(format!("Error: {}", err));
    }
}
