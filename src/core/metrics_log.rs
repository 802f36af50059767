use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "system_monitor.log";

/// Append-only text log with a console echo.
///
/// The file is opened and closed on every append; nothing is held between
/// cycles. `echo` is standard output in the binary.
pub struct MetricsLog<W: Write = Stdout> {
    path: PathBuf,
    echo: W,
}

impl MetricsLog<Stdout> {
    /// Log to `path` and echo to standard output
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_echo(path, io::stdout())
    }
}

impl<W: Write> MetricsLog<W> {
    pub fn with_echo<P: AsRef<Path>>(path: P, echo: W) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            echo,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn echo(&self) -> &W {
        &self.echo
    }

    /// Append `line` to the file and echo it.
    ///
    /// A failure is reported on the echo sink and returned; it never panics.
    /// The echo happens whether or not the file write succeeded.
    pub fn append(&mut self, line: &str) -> Result<()> {
        let written = self.write_line(line);

        if let Err(e) = writeln!(self.echo, "{}", line) {
            log::warn!("Failed to echo metrics line: {}", e);
        }

        if let Err(e) = &written {
            log::error!("Failed to write {}: {}", self.path.display(), e);
            let _ = writeln!(self.echo, "Logging error: {}", e);
        }

        let _ = self.echo.flush();
        written
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Single write so a line is never split across cycles
        file.write_all(format!("{}\n", line).as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
