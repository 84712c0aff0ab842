//! Daemon log tail backed by the systemd journal.

use std::process::ExitStatus;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::LogTailConfig;

/// Failure to read the daemon log.
#[derive(Debug, thiserror::Error)]
pub enum LogTailError {
    #[error("failed to run log reader: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("log reader exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("{0}")]
    Other(String),
}

/// Source of the most recent daemon output lines.
#[async_trait]
pub trait LogSource: Send + Sync {
    async fn tail(&self, lines: usize) -> Result<Vec<String>, LogTailError>;
}

/// Reads the unit's output through `journalctl`.
#[derive(Debug, Clone)]
pub struct JournalctlSource {
    program: String,
    unit: String,
}

impl JournalctlSource {
    pub fn new(program: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            unit: unit.into(),
        }
    }

    pub fn from_config(config: &LogTailConfig) -> Self {
        Self::new(&config.program, &config.unit)
    }

    fn args(&self, lines: usize) -> Vec<String> {
        vec![
            "--no-pager".to_string(),
            "-u".to_string(),
            self.unit.clone(),
            "--output=cat".to_string(),
            "-n".to_string(),
            lines.to_string(),
        ]
    }
}

#[async_trait]
impl LogSource for JournalctlSource {
    async fn tail(&self, lines: usize) -> Result<Vec<String>, LogTailError> {
        let output = Command::new(&self.program)
            .args(self.args(lines))
            .output()
            .await?;

        if !output.status.success() {
            return Err(LogTailError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // Split verbatim: a trailing newline yields a trailing empty line.
        Ok(String::from_utf8_lossy(&output.stdout)
            .split('\n')
            .map(str::to_owned)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_journalctl_arguments() {
        let source = JournalctlSource::from_config(&LogTailConfig::default());
        assert_eq!(
            source.args(100),
            vec!["--no-pager", "-u", "fetcherd", "--output=cat", "-n", "100"]
        );
    }

    #[tokio::test]
    async fn missing_reader_is_an_error() {
        let source = JournalctlSource::new("/nonexistent/journalctl", "fetcherd");
        let err = source.tail(10).await.unwrap_err();
        assert!(matches!(err, LogTailError::Spawn(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn splits_output_on_newlines() {
        // `echo` prints its arguments, so the output is predictable.
        let source = JournalctlSource::new("echo", "fetcherd");
        let lines = source.tail(3).await.unwrap();
        assert_eq!(lines, vec!["--no-pager -u fetcherd --output=cat -n 3", ""]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let source = JournalctlSource::new("false", "fetcherd");
        let err = source.tail(10).await.unwrap_err();
        assert!(matches!(err, LogTailError::Failed { .. }));
    }
}
