//! Destinations for program output and diagnostics.
//!
//! `print` output and error reports travel on separate channels. The stdout
//! handler sends them to stdout and stderr; the buffer handler keeps both so
//! tests and embedders can inspect them.

/// Output captured by [`PrintHandler::Buffer`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Everything written by `print`, one line per value.
    pub output:      String,
    /// Every reported error, one line per report.
    pub diagnostics: String,
}

/// Where the interpreter writes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrintHandler {
    /// Output to stdout, diagnostics to stderr.
    #[default]
    Stdout,
    /// Capture both in memory.
    Buffer(CapturedOutput),
}

impl PrintHandler {
    /// Creates an empty capturing handler.
    #[must_use]
    pub fn buffer() -> Self {
        Self::Buffer(CapturedOutput::default())
    }

    /// Writes one line of program output.
    pub fn println(&mut self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(captured) => {
                captured.output.push_str(msg);
                captured.output.push('\n');
            },
        }
    }

    /// Writes one diagnostic line.
    pub fn report(&mut self, msg: &str) {
        match self {
            Self::Stdout => eprintln!("{msg}"),
            Self::Buffer(captured) => {
                captured.diagnostics.push_str(msg);
                captured.diagnostics.push('\n');
            },
        }
    }

    /// Captured program output. Empty for stdout.
    #[must_use]
    pub fn output(&self) -> &str {
        match self {
            Self::Stdout => "",
            Self::Buffer(captured) => &captured.output,
        }
    }

    /// Captured diagnostics. Empty for stdout.
    #[must_use]
    pub fn diagnostics(&self) -> &str {
        match self {
            Self::Stdout => "",
            Self::Buffer(captured) => &captured.diagnostics,
        }
    }
}
