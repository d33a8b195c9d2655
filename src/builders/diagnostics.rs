use colored::Colorize;

/// Destination for the non-fatal warnings raised during extraction.
///
/// Warnings never change the produced markup; they only describe what the
/// scanner skipped or substituted. Fatal conditions are not sink events,
/// they propagate as errors and abort the run.
pub trait DiagnosticsSink {
    fn warning(&mut self, message: &str);
}

/// Writes warnings to stderr when the caller enabled them, styled like the
/// rest of the console output. With warnings disabled it swallows every
/// message, which is the default for scripted invocations.
pub struct StderrSink {
    enabled: bool,
}

impl StderrSink {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl DiagnosticsSink for StderrSink {
    fn warning(&mut self, message: &str) {
        if self.enabled {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }
}

/// Collects warnings in memory so tests can assert on their exact count
/// and wording.
#[derive(Default)]
pub struct MemorySink {
    warnings: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl DiagnosticsSink for MemorySink {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}
